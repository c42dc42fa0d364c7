/// A coarse landmass blob: centroid plus a pixel extent at full depth scale.
///
/// The default table is illustrative, not real boundary data; hosts that
/// care about visual fidelity should inject their own table sourced from
/// actual continent outlines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Landmass {
    pub lat_deg: f64,
    pub lng_deg: f64,
    pub extent_px: f64,
}

impl Landmass {
    pub const fn new(lat_deg: f64, lng_deg: f64, extent_px: f64) -> Self {
        Self {
            lat_deg,
            lng_deg,
            extent_px,
        }
    }
}

/// Default continent blobs (North America, Europe, Asia, Africa, Australia).
pub const DEFAULT_LANDMASSES: [Landmass; 10] = [
    Landmass::new(45.0, -100.0, 30.0),
    Landmass::new(35.0, -95.0, 25.0),
    Landmass::new(25.0, -80.0, 15.0),
    Landmass::new(55.0, 10.0, 20.0),
    Landmass::new(45.0, 15.0, 18.0),
    Landmass::new(35.0, 105.0, 35.0),
    Landmass::new(55.0, 90.0, 30.0),
    Landmass::new(0.0, 20.0, 25.0),
    Landmass::new(-20.0, 25.0, 22.0),
    Landmass::new(-25.0, 135.0, 12.0),
];
