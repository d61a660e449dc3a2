//! Uploaded icon normalizer.
//!
//! Accepts a data URI or bare base64 image, shrinks it into a square
//! bounding box and re-encodes it as a PNG data URI.

use image::{imageops::FilterType, ColorType, DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

use crate::prelude::*;
use crate::utils::{decode_data_uri, to_data_uri};

/// Bounding box (in pixels) of a normalized icon.
pub const ICON_MAX_SIZE: u32 = 128;

// Sync normalizer
pub fn normalize_icon_sync(input: &str) -> ClResult<String> {
	let bytes = decode_data_uri(input)?;

	let now = std::time::Instant::now();
	let original = ImageReader::new(Cursor::new(&bytes)).with_guessed_format()?.decode()?;
	debug!("decoded {}x{} [{:.2}ms]", original.width(), original.height(), now.elapsed().as_millis());

	// Shrink only, smaller images keep their size
	let resized = if original.width() > ICON_MAX_SIZE || original.height() > ICON_MAX_SIZE {
		let now = std::time::Instant::now();
		let resized = original.resize(ICON_MAX_SIZE, ICON_MAX_SIZE, FilterType::Lanczos3);
		debug!("resized to {}x{} [{:.2}ms]", resized.width(), resized.height(), now.elapsed().as_millis());
		resized
	} else {
		original
	};

	// PNG has no float sample formats
	let resized = match resized.color() {
		ColorType::Rgb32F | ColorType::Rgba32F => DynamicImage::ImageRgba8(resized.to_rgba8()),
		_ => resized,
	};

	let mut output = Cursor::new(Vec::new());
	resized.write_to(&mut output, ImageFormat::Png)?;

	Ok(to_data_uri("image/png", output.into_inner()))
}

/// Runs the normalizer on the worker pool.
pub async fn normalize_icon(app: &App, input: String) -> ClResult<String> {
	app.worker.try_run(move || normalize_icon_sync(&input)).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::{Rgb, RgbImage, Rgba, RgbaImage};

	fn png_data_uri(img: DynamicImage) -> String {
		let mut buf = Cursor::new(Vec::new());
		img.write_to(&mut buf, ImageFormat::Png).unwrap();
		to_data_uri("image/png", buf.into_inner())
	}

	fn decode_output(uri: &str) -> DynamicImage {
		assert!(uri.starts_with("data:image/png;base64,"));
		let bytes = decode_data_uri(uri).unwrap();
		image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap()
	}

	#[test]
	fn test_wide_image_is_shrunk_keeping_aspect() {
		let input = png_data_uri(DynamicImage::ImageRgb8(RgbImage::from_pixel(1000, 500, Rgb([10, 20, 30]))));

		let out = decode_output(&normalize_icon_sync(&input).unwrap());
		assert_eq!((out.width(), out.height()), (128, 64));
	}

	#[test]
	fn test_small_image_is_untouched() {
		let input = png_data_uri(DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 50, Rgba([1, 2, 3, 4]))));

		let out = decode_output(&normalize_icon_sync(&input).unwrap());
		assert_eq!((out.width(), out.height()), (50, 50));
		assert_eq!(out.to_rgba8().get_pixel(10, 10), &Rgba([1, 2, 3, 4]));
	}

	#[test]
	fn test_bare_base64_is_accepted() {
		let input = png_data_uri(DynamicImage::ImageRgb8(RgbImage::new(300, 600)));
		let bare = input.split_once(',').unwrap().1.to_string();

		let out = decode_output(&normalize_icon_sync(&bare).unwrap());
		assert_eq!((out.width(), out.height()), (64, 128));
	}

	#[test]
	fn test_malformed_base64_fails() {
		let res = normalize_icon_sync("data:image/png;base64,not*base64*at*all");
		assert!(matches!(res, Err(Error::ValidationError(_))));
	}

	#[test]
	fn test_non_image_fails() {
		let res = normalize_icon_sync(&to_data_uri("image/png", b"definitely not an image"));
		assert!(matches!(res, Err(Error::ValidationError(_))));
	}
}

// vim: ts=4
