use crate::event::DisasterEvent;

/// Damage score above which an event counts as severe in the summary strip.
pub const SEVERE_DAMAGE_THRESHOLD: f64 = 80.0;

/// Aggregates the shell shows next to the views.
///
/// All aggregations are total over any input, including an empty feed:
/// `mean_confidence` is defined as 0.0 for zero events rather than NaN.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FeedStats {
    pub event_count: usize,
    pub total_damage_score: f64,
    pub total_radius_km: f64,
    pub severe_count: usize,
    pub mean_confidence: f64,
}

impl FeedStats {
    pub fn from_events(events: &[DisasterEvent]) -> Self {
        let event_count = events.len();
        let total_damage_score: f64 = events.iter().map(|e| e.damage_score).sum();
        let total_radius_km: f64 = events.iter().map(|e| e.radius_km).sum();
        let severe_count = events
            .iter()
            .filter(|e| e.damage_score > SEVERE_DAMAGE_THRESHOLD)
            .count();
        let mean_confidence = if event_count == 0 {
            0.0
        } else {
            events.iter().map(|e| e.confidence).sum::<f64>() / event_count as f64
        };

        Self {
            event_count,
            total_damage_score,
            total_radius_km,
            severe_count,
            mean_confidence,
        }
    }
}
