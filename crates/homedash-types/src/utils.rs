//! Utility functions

use base64::{
	alphabet,
	engine::{
		general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD},
		DecodePaddingMode,
	},
	Engine,
};
use rand::Rng;

use crate::prelude::*;

/// Number of random bytes behind a session token.
pub const TOKEN_BYTES: usize = 32;

/// Standard alphabet, but accepts input with or without `=` padding.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
	&alphabet::STANDARD,
	GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Generate an opaque URL-safe token from `TOKEN_BYTES` bytes of CSPRNG output.
pub fn random_token() -> String {
	let mut bytes = [0u8; TOKEN_BYTES];
	let mut rng = rand::rng();
	rng.fill_bytes(&mut bytes);
	URL_SAFE_NO_PAD.encode(bytes)
}

/// Compare two strings without short-circuiting on the first differing byte.
///
/// Length is not hidden.
pub fn constant_time_eq(left: &str, right: &str) -> bool {
	let left = left.as_bytes();
	let right = right.as_bytes();
	if left.len() != right.len() {
		return false;
	}

	let mut diff = 0u8;
	for (a, b) in left.iter().zip(right.iter()) {
		diff |= a ^ b;
	}
	diff == 0
}

/// Build a `data:<mime>;base64,<payload>` URI.
pub fn to_data_uri(mime: &str, data: impl AsRef<[u8]>) -> String {
	format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

/// Decode the payload of a data URI, or of a bare base64 string.
///
/// Anything up to and including the first comma is treated as the
/// `data:<mime>;base64` header and dropped.
pub fn decode_data_uri(input: &str) -> ClResult<Vec<u8>> {
	let payload = match input.split_once(',') {
		Some((_header, payload)) => payload,
		None => input,
	};
	// Whitespace anywhere in the payload is ignored
	let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
	if payload.is_empty() {
		return Err(Error::ValidationError("Empty image data".into()));
	}
	Ok(LENIENT_STANDARD.decode(payload)?)
}


// vim: ts=4
