use std::fmt;
use std::path::PathBuf;

use gtk4::glib;

/// Logical names of the battery artwork shipped in the resource directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Left,
    Right,
    Middle,
    Empty,
    Charged,
    Charging,
    Dead,
    NoBattery,
}

impl Asset {
    pub fn name(&self) -> &'static str {
        match self {
            Asset::Left => "left",
            Asset::Right => "right",
            Asset::Middle => "middle",
            Asset::Empty => "empty",
            Asset::Charged => "charged",
            Asset::Charging => "charging",
            Asset::Dead => "dead",
            Asset::NoBattery => "none",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Asset::Left => "BatteryLevelCapB-L.pdf",
            Asset::Right => "BatteryLevelCapB-R.pdf",
            Asset::Middle => "BatteryLevelCapB-M.pdf",
            Asset::Empty => "BatteryEmpty.pdf",
            Asset::Charged => "BatteryChargedAndPlugged.pdf",
            Asset::Charging => "BatteryCharging.pdf",
            Asset::Dead => "BatteryDeadCropped.pdf",
            Asset::NoBattery => "BatteryNone.pdf",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset `{asset}` not found at {}", path.display())]
    NotFound { asset: Asset, path: PathBuf },
    #[error("failed to decode asset `{asset}` from {}", path.display())]
    Decode {
        asset: Asset,
        path: PathBuf,
        #[source]
        source: glib::Error,
    },
}

impl AssetError {
    pub fn asset(&self) -> Asset {
        match self {
            AssetError::NotFound { asset, .. } | AssetError::Decode { asset, .. } => *asset,
        }
    }
}
