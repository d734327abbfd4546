use std::fs;
use std::io;

use tracing::debug;

use crate::types::{BatteryFault, BatteryStatus};

/// Reads the current status from a `power_supply` sysfs node.
///
/// A missing node is reported as [`BatteryFault::ServiceNotFound`]; a node
/// that exists but cannot be read or parsed as
/// [`BatteryFault::ConnectionAlreadyOpen`].
pub fn read_status(battery_path: &str) -> Result<BatteryStatus, BatteryFault> {
    let status_path = format!("{}/status", battery_path);
    let capacity_path = format!("{}/capacity", battery_path);

    let status_str = read_node(&status_path)?;
    match status_str.trim() {
        "Charging" => Ok(BatteryStatus::Charging),
        "Full" | "Not charging" => Ok(BatteryStatus::PluggedAndCharged),
        _ => {
            let capacity_str = read_node(&capacity_path)?;
            let capacity = capacity_str.trim().parse::<f64>().map_err(|e| {
                debug!(path = %capacity_path, error = %e, "failed to parse capacity");
                BatteryFault::ConnectionAlreadyOpen
            })?;
            Ok(BatteryStatus::Discharging(capacity.clamp(0.0, 100.0).round() as u8))
        }
    }
}

fn read_node(path: &str) -> Result<String, BatteryFault> {
    fs::read_to_string(path).map_err(|e| {
        debug!(path, error = %e, "failed to read power supply node");
        match e.kind() {
            io::ErrorKind::NotFound => BatteryFault::ServiceNotFound,
            _ => BatteryFault::ConnectionAlreadyOpen,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fake_supply(name: &str, status: &str, capacity: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("battery-icon-test-{}-{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("status"), status).unwrap();
        match capacity {
            Some(capacity) => fs::write(dir.join("capacity"), capacity).unwrap(),
            None => {
                let _ = fs::remove_file(dir.join("capacity"));
            }
        }
        dir
    }

    fn read(dir: &PathBuf) -> Result<BatteryStatus, BatteryFault> {
        read_status(dir.to_str().unwrap())
    }

    #[test]
    fn maps_sysfs_status_words() {
        let dir = fake_supply("charging", "Charging\n", Some("55\n"));
        assert_eq!(read(&dir), Ok(BatteryStatus::Charging));

        let dir = fake_supply("full", "Full\n", Some("100\n"));
        assert_eq!(read(&dir), Ok(BatteryStatus::PluggedAndCharged));

        let dir = fake_supply("not-charging", "Not charging\n", Some("80\n"));
        assert_eq!(read(&dir), Ok(BatteryStatus::PluggedAndCharged));

        let dir = fake_supply("discharging", "Discharging\n", Some("42\n"));
        assert_eq!(read(&dir), Ok(BatteryStatus::Discharging(42)));
    }

    #[test]
    fn unknown_status_is_discharging_with_clamped_capacity() {
        let dir = fake_supply("unknown", "Unknown\n", Some("130\n"));
        assert_eq!(read(&dir), Ok(BatteryStatus::Discharging(100)));
    }

    #[test]
    fn missing_node_is_service_not_found() {
        let dir = std::env::temp_dir().join("battery-icon-test-does-not-exist");
        assert_eq!(read(&dir), Err(BatteryFault::ServiceNotFound));
    }

    #[test]
    fn garbage_capacity_is_connection_fault() {
        let dir = fake_supply("garbage", "Discharging\n", Some("lots\n"));
        assert_eq!(read(&dir), Err(BatteryFault::ConnectionAlreadyOpen));
    }

    #[test]
    fn missing_capacity_while_discharging_is_service_not_found() {
        let dir = fake_supply("no-capacity", "Discharging\n", None);
        assert_eq!(read(&dir), Err(BatteryFault::ServiceNotFound));
    }
}
