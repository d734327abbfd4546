use tracing::{debug, warn};

use super::{Asset, AssetError, IconBackend, Rect, Size};
use crate::types::{BatteryFault, BatteryStatus};

/// Percentage points represented by one fill unit.
pub const FILL_STEP_PERCENT: u8 = 12;
/// The bar is never drawn narrower than this many fill units.
pub const MIN_FILL_UNITS: f64 = 2.0;
/// Added to the minimum width so a clamped bar is never exactly two units.
pub const MIN_FILL_EPSILON: f64 = 0.1;
/// Inset of the bar from the outline's left edge, also used as the gap
/// below the outline's top edge.
pub const BAR_MARGIN: f64 = 2.0;

/// Width of the fill bar: whole fill units, one per `FILL_STEP_PERCENT`,
/// clamped to just over `MIN_FILL_UNITS`.
pub fn fill_width(percentage: u8, unit_width: f64) -> f64 {
    let width = f64::from(percentage / FILL_STEP_PERCENT) * unit_width;
    let minimum = MIN_FILL_UNITS * unit_width;
    if width <= minimum {
        minimum + MIN_FILL_EPSILON
    } else {
        width
    }
}

/// Where the capacity bar lands on the empty outline.
pub fn bar_frame(fill_unit: Size, percentage: u8) -> Rect {
    Rect {
        x: BAR_MARGIN,
        y: BAR_MARGIN,
        width: fill_width(percentage, fill_unit.width),
        height: fill_unit.height,
    }
}

/// Turns statuses and faults into icons.
#[derive(Debug)]
pub struct IconComposer<B> {
    backend: B,
}

impl<B: IconBackend> IconComposer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn compose_status(&self, status: BatteryStatus) -> Option<B::Image> {
        match status {
            BatteryStatus::Charging => self.compose_asset(Asset::Charging),
            BatteryStatus::PluggedAndCharged => self.compose_asset(Asset::Charged),
            BatteryStatus::Discharging(percentage) => self.compose_capacity_bar(percentage),
        }
    }

    /// Absence of a fault produces no icon.
    pub fn compose_fault(&self, fault: Option<BatteryFault>) -> Option<B::Image> {
        match fault? {
            BatteryFault::ConnectionAlreadyOpen => self.compose_asset(Asset::Dead),
            BatteryFault::ServiceNotFound => self.compose_asset(Asset::NoBattery),
        }
    }

    pub fn compose_capacity_bar(&self, percentage: u8) -> Option<B::Image> {
        self.try_capacity_bar(percentage).map_err(log_asset_error).ok()
    }

    fn compose_asset(&self, asset: Asset) -> Option<B::Image> {
        self.backend
            .load(asset)
            .map(|image| self.backend.finish(image))
            .map_err(log_asset_error)
            .ok()
    }

    fn try_capacity_bar(&self, percentage: u8) -> Result<B::Image, AssetError> {
        let mut outline = self.backend.load(Asset::Empty)?;
        let left = self.backend.load(Asset::Left)?;
        let right = self.backend.load(Asset::Right)?;
        let middle = self.backend.load(Asset::Middle)?;

        let frame = bar_frame(self.backend.size(&middle), percentage);
        debug!(percentage, width = frame.width, "composing capacity bar");
        self.backend
            .draw_three_part(&mut outline, frame, &left, &middle, &right);
        Ok(self.backend.finish(outline))
    }
}

fn log_asset_error(err: AssetError) {
    warn!(asset = %err.asset(), "battery icon unavailable: {}", err);
}
