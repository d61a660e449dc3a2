use serde::Serialize;
use std::{path::Path, time::Duration};
use sysinfo::{Disks, System};

use crate::prelude::*;

/// CPU usage is averaged over this window.
pub const CPU_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
pub struct CpuInfo {
	pub percent: f64,
	pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct UsageInfo {
	pub total: u64,
	pub used: u64,
	pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
	pub cpu: CpuInfo,
	pub memory: UsageInfo,
	pub disk: UsageInfo,
	pub timestamp: String,
}

/// Share of `part` in `total`, in percent with one decimal.
pub fn percent(part: u64, total: u64) -> f64 {
	if total == 0 {
		return 0.0;
	}
	#[allow(clippy::cast_precision_loss)]
	let ratio = part as f64 / total as f64;
	(ratio * 1000.0).round() / 10.0
}

/// Takes a snapshot. Waits `CPU_SAMPLE_INTERVAL` between two CPU refreshes.
pub async fn collect() -> ClResult<SystemInfo> {
	let mut sys = System::new();
	sys.refresh_cpu_usage();
	tokio::time::sleep(CPU_SAMPLE_INTERVAL.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)).await;
	sys.refresh_cpu_usage();
	sys.refresh_memory();

	let cpu = CpuInfo {
		percent: (f64::from(sys.global_cpu_usage()) * 10.0).round() / 10.0,
		count: sys.cpus().len(),
	};

	let total = sys.total_memory();
	let memory = UsageInfo {
		total,
		used: sys.used_memory(),
		percent: percent(total.saturating_sub(sys.available_memory()), total),
	};

	Ok(SystemInfo { cpu, memory, disk: root_disk()?, timestamp: chrono::Local::now().to_rfc3339() })
}

/// Usage of the filesystem mounted at `/`, or of the first disk when there
/// is no such mount point.
fn root_disk() -> ClResult<UsageInfo> {
	let disks = Disks::new_with_refreshed_list();
	let disk = disks
		.list()
		.iter()
		.find(|d| d.mount_point() == Path::new("/"))
		.or_else(|| disks.list().first())
		.ok_or_else(|| Error::Internal("No disks found".into()))?;

	let total = disk.total_space();
	let used = total.saturating_sub(disk.available_space());
	Ok(UsageInfo { total, used, percent: percent(used, total) })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_percent() {
		assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
		assert!((percent(1, 3) - 33.3).abs() < 1e-9);
		assert!((percent(2, 3) - 66.7).abs() < 1e-9);
		assert!(percent(5, 0).abs() < f64::EPSILON);
	}

	#[test]
	fn test_system_info_shape() {
		let info = SystemInfo {
			cpu: CpuInfo { percent: 12.5, count: 4 },
			memory: UsageInfo { total: 100, used: 40, percent: 40.0 },
			disk: UsageInfo { total: 10, used: 5, percent: 50.0 },
			timestamp: "2024-01-01T00:00:00+00:00".into(),
		};
		let json = serde_json::to_value(&info).unwrap();
		assert_eq!(json["cpu"]["count"], 4);
		assert_eq!(json["memory"]["used"], 40);
		assert_eq!(json["disk"]["percent"], 50.0);
		assert!(json["timestamp"].is_string());
	}
}

// vim: ts=4
