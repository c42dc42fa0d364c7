use events::{DisasterEvent, EventId};
use foundation::time::Time;

/// Delay between successive marker reveals.
pub const STAGGER_INTERVAL_S: f64 = 0.5;

/// Staggered reveal offsets for one version of the event list.
///
/// Built once per list change, never per frame. The k-th event (0-indexed)
/// becomes eligible to draw once `k * STAGGER_INTERVAL_S` seconds have
/// passed since the build; after that it stays revealed for the lifetime of
/// this schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSchedule {
    built_at: Time,
    offsets: Vec<(EventId, f64)>,
}

impl RevealSchedule {
    pub fn empty() -> Self {
        Self {
            built_at: Time::ZERO,
            offsets: Vec::new(),
        }
    }

    pub fn build(list: &[DisasterEvent], now: Time) -> Self {
        let offsets = list
            .iter()
            .enumerate()
            .map(|(index, event)| (event.id.clone(), index as f64 * STAGGER_INTERVAL_S))
            .collect();
        Self {
            built_at: now,
            offsets,
        }
    }

    pub fn built_at(&self) -> Time {
        self.built_at
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether the marker at `index` is part of the current frame's draw
    /// set. Out-of-range indices are never revealed.
    pub fn is_revealed(&self, index: usize, now: Time) -> bool {
        match self.offsets.get(index) {
            Some((_, offset)) => now.since(self.built_at) >= *offset,
            None => false,
        }
    }

    pub fn revealed_count(&self, now: Time) -> usize {
        self.offsets
            .iter()
            .take_while(|(_, offset)| now.since(self.built_at) >= *offset)
            .count()
    }
}
