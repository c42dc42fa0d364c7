use foundation::color::Rgba;

/// Stepped claims-density ramp.
///
/// This is a discrete 8-bucket lookup, not a continuous gradient; the bucket
/// boundaries are a rendering contract shared with the map legend. Each row
/// applies when `density` is strictly greater than its threshold; the final
/// row catches everything else.
const HEAT_RAMP: [(f64, [u8; 3]); 7] = [
    (80.0, [0x80, 0x00, 0x26]),
    (60.0, [0xbd, 0x00, 0x26]),
    (40.0, [0xe3, 0x1a, 0x1c]),
    (20.0, [0xfc, 0x4e, 0x2a]),
    (10.0, [0xfd, 0x8d, 0x3c]),
    (5.0, [0xfe, 0xb2, 0x4c]),
    (2.0, [0xfe, 0xd9, 0x76]),
];

const HEAT_FLOOR: [u8; 3] = [0xff, 0xed, 0xa0];

/// Map a density scalar onto the sequential heat palette (light yellow →
/// dark red). Monotonic step function.
pub fn heat_color(density: f64) -> Rgba {
    for &(threshold, [r, g, b]) in &HEAT_RAMP {
        if density > threshold {
            return Rgba::from_rgb8(r, g, b);
        }
    }
    let [r, g, b] = HEAT_FLOOR;
    Rgba::from_rgb8(r, g, b)
}
