//! Wire-format records for the feed snapshot the shell hands us.
//!
//! The upstream service emits GeoJSON-flavored payloads (`coordinates` is
//! `[lng, lat]`). These DTOs only describe that shape; conversion into
//! [`DisasterEvent`] normalizes it into the engine's lat/lng convention.

use serde::Deserialize;

use crate::event::{Category, DisasterEvent, EventId, GeoPoint, Status};

#[derive(Debug, Clone, Deserialize)]
pub struct ImpactPoint {
    /// GeoJSON point order: `[longitude, latitude]`.
    pub coordinates: [f64; 2],
    pub radius_km: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub event_id: String,
    pub event_type: String,
    pub title: String,
    pub coordinates: ImpactPoint,
    pub damage_score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub status: String,
}

impl From<EventRecord> for DisasterEvent {
    fn from(record: EventRecord) -> Self {
        let [lng, lat] = record.coordinates.coordinates;
        DisasterEvent {
            id: EventId::new(record.event_id),
            title: record.title,
            category: Category::from_label(&record.event_type),
            position: GeoPoint::new(lat, lng),
            radius_km: record.coordinates.radius_km,
            damage_score: record.damage_score,
            confidence: record.confidence,
            status: Status::from_label(&record.status),
        }
    }
}
