use serde::Deserialize;
use tracing::debug;

use super::{IconBackend, IconComposer};
use crate::types::BatteryStatus;

/// When a cached icon is considered out of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidationPolicy {
    /// Only a new percentage while discharging re-renders. A cached
    /// charging or charged icon is kept for every later status, and a
    /// cached bar survives a switch to charging.
    #[default]
    PercentageOnly,
    /// Additionally re-renders whenever the status variant changes.
    StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDecision {
    Reuse,
    Compose,
}

/// Decides what to do with an incoming status given the status that
/// produced the cached icon, if any.
pub fn decide(
    cached: Option<BatteryStatus>,
    incoming: BatteryStatus,
    policy: InvalidationPolicy,
) -> CacheDecision {
    use crate::types::BatteryStatus::{Charging, Discharging, PluggedAndCharged};

    let Some(cached) = cached else {
        return CacheDecision::Compose;
    };
    if policy == InvalidationPolicy::StatusKind && !cached.same_kind(&incoming) {
        return CacheDecision::Compose;
    }
    match (cached, incoming) {
        (Discharging(old), Discharging(new)) if old != new => CacheDecision::Compose,
        (Discharging(_), Discharging(_)) => CacheDecision::Reuse,
        (Discharging(_), Charging | PluggedAndCharged) => CacheDecision::Reuse,
        (Charging | PluggedAndCharged, _) => CacheDecision::Reuse,
    }
}

struct CacheEntry<I> {
    status: BatteryStatus,
    image: I,
}

impl<I> CacheEntry<I> {
    fn percentage(&self) -> Option<u8> {
        self.status.percentage()
    }
}

/// Remembers the last rendered icon and the status that produced it.
pub struct RenderCache<B: IconBackend> {
    composer: IconComposer<B>,
    policy: InvalidationPolicy,
    slot: Option<CacheEntry<B::Image>>,
    renders: u64,
}

impl<B: IconBackend> RenderCache<B> {
    pub fn new(composer: IconComposer<B>, policy: InvalidationPolicy) -> Self {
        Self {
            composer,
            policy,
            slot: None,
            renders: 0,
        }
    }

    /// Returns the icon for `status`, composing a new one only when the
    /// policy says the cached icon is out of date. A failed composition
    /// leaves the cache empty.
    pub fn request(&mut self, status: BatteryStatus) -> Option<&B::Image> {
        let decision = decide(self.cached_status(), status, self.policy);
        debug!(
            %status,
            cached_percentage = ?self.slot.as_ref().and_then(CacheEntry::percentage),
            ?decision,
            "icon cache lookup"
        );

        if decision == CacheDecision::Compose {
            self.renders += 1;
            self.slot = self
                .composer
                .compose_status(status)
                .map(|image| CacheEntry { status, image });
        }
        self.slot.as_ref().map(|entry| &entry.image)
    }

    pub fn cached_status(&self) -> Option<BatteryStatus> {
        self.slot.as_ref().map(|entry| entry.status)
    }

    /// Number of compositions performed so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn composer(&self) -> &IconComposer<B> {
        &self.composer
    }
}
