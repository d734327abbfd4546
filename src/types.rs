use std::fmt;

/// Battery state as reported by the status producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryStatus {
    Charging,
    PluggedAndCharged,
    /// Remaining charge, 0..=100.
    Discharging(u8),
}

impl BatteryStatus {
    pub fn percentage(&self) -> Option<u8> {
        match self {
            BatteryStatus::Discharging(percentage) => Some(*percentage),
            BatteryStatus::Charging | BatteryStatus::PluggedAndCharged => None,
        }
    }

    /// True when both statuses are the same variant, ignoring the percentage.
    pub fn same_kind(&self, other: &BatteryStatus) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatteryStatus::Charging => write!(f, "Charging"),
            BatteryStatus::PluggedAndCharged => write!(f, "Charged"),
            BatteryStatus::Discharging(percentage) => write!(f, "{}%", percentage),
        }
    }
}

/// Hardware or service level failure reported instead of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryFault {
    ConnectionAlreadyOpen,
    ServiceNotFound,
}

impl fmt::Display for BatteryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatteryFault::ConnectionAlreadyOpen => write!(f, "Battery unavailable"),
            BatteryFault::ServiceNotFound => write!(f, "No battery"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_only_for_discharging() {
        assert_eq!(BatteryStatus::Discharging(40).percentage(), Some(40));
        assert_eq!(BatteryStatus::Charging.percentage(), None);
        assert_eq!(BatteryStatus::PluggedAndCharged.percentage(), None);
    }

    #[test]
    fn same_kind_ignores_percentage() {
        assert!(BatteryStatus::Discharging(10).same_kind(&BatteryStatus::Discharging(90)));
        assert!(!BatteryStatus::Charging.same_kind(&BatteryStatus::PluggedAndCharged));
        assert!(!BatteryStatus::Discharging(10).same_kind(&BatteryStatus::Charging));
    }
}
