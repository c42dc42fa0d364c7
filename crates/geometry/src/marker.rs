use events::Category;

/// Icon glyph shown inside a flat-map marker.
pub fn glyph_for(category: Category) -> &'static str {
    match category {
        Category::Hurricane => "🌀",
        Category::Wildfire => "🔥",
        Category::Flood => "🌊",
        Category::Tornado => "🌪️",
        Category::Other => "⚡",
    }
}

/// Globe marker disc radius in pixels.
///
/// Base size grows with damage, shrinks toward the silhouette via the
/// projection's depth scale, and breathes with the pulse amplitude.
pub fn globe_marker_radius(damage_score: f64, depth_scale: f64, pulse: f64) -> f64 {
    (8.0 + damage_score / 10.0) * depth_scale * pulse
}
