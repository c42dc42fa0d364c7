use thiserror::Error;

/// Stable identifier assigned by the upstream feed (e.g. `NWS-HURRICANE-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Disaster category. The feed is free-form text; anything we do not know
/// maps to `Other` (the original feed also emits e.g. "Hailstorm").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Hurricane,
    Wildfire,
    Flood,
    Tornado,
    Other,
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Hurricane" => Self::Hurricane,
            "Wildfire" => Self::Wildfire,
            "Flood" => Self::Flood,
            "Tornado" => Self::Tornado,
            _ => Self::Other,
        }
    }
}

/// Lifecycle status of an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Active,
    Resolved,
}

impl Status {
    /// Only "resolved" ends an event; unknown labels stay `Active` so a
    /// malformed status never hides a live disaster.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("resolved") {
            Self::Resolved
        } else {
            Self::Active
        }
    }
}

/// A geographic position in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lng_deg: f64,
}

impl GeoPoint {
    pub const fn new(lat_deg: f64, lng_deg: f64) -> Self {
        Self { lat_deg, lng_deg }
    }
}

/// Why an event was rejected by [`DisasterEvent::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum EventDataError {
    #[error("non-finite coordinates ({lat}, {lng})")]
    NonFiniteCoordinates { lat: f64, lng: f64 },
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("negative or non-finite impact radius {0} km")]
    InvalidRadius(f64),
    #[error("damage score {0} outside [0, 100]")]
    DamageOutOfRange(f64),
    #[error("confidence {0} outside [0, 1]")]
    ConfidenceOutOfRange(f64),
}

/// Immutable disaster event as delivered by the external feed.
///
/// The visualization engine never mutates one of these; it only derives
/// geometry from them.
#[derive(Debug, Clone, PartialEq)]
pub struct DisasterEvent {
    pub id: EventId,
    pub title: String,
    pub category: Category,
    pub position: GeoPoint,
    /// Impact radius in kilometers, `>= 0`.
    pub radius_km: f64,
    /// Damage score in `[0, 100]`.
    pub damage_score: f64,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f64,
    pub status: Status,
}

impl DisasterEvent {
    /// Check the value against the feed contract.
    ///
    /// The render loop skips (and logs once) events that fail here rather
    /// than letting a NaN propagate into projection math.
    pub fn validate(&self) -> Result<(), EventDataError> {
        let GeoPoint { lat_deg, lng_deg } = self.position;
        if !lat_deg.is_finite() || !lng_deg.is_finite() {
            return Err(EventDataError::NonFiniteCoordinates {
                lat: lat_deg,
                lng: lng_deg,
            });
        }
        if !(-90.0..=90.0).contains(&lat_deg) {
            return Err(EventDataError::LatitudeOutOfRange(lat_deg));
        }
        if !(-180.0..=180.0).contains(&lng_deg) {
            return Err(EventDataError::LongitudeOutOfRange(lng_deg));
        }
        if !self.radius_km.is_finite() || self.radius_km < 0.0 {
            return Err(EventDataError::InvalidRadius(self.radius_km));
        }
        if !self.damage_score.is_finite() || !(0.0..=100.0).contains(&self.damage_score) {
            return Err(EventDataError::DamageOutOfRange(self.damage_score));
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(EventDataError::ConfidenceOutOfRange(self.confidence));
        }
        Ok(())
    }
}
