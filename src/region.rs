//! Body regions and name-driven region selection.

/// One of the four dyeable body zones.
///
/// Skin and hair are not regions; meshes outside these four zones are never
/// recolored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyRegion {
    Head,
    Body,
    Hands,
    Feet,
}

impl BodyRegion {
    /// All regions, in resolution order.
    pub const ALL: [BodyRegion; 4] = [
        BodyRegion::Head,
        BodyRegion::Body,
        BodyRegion::Hands,
        BodyRegion::Feet,
    ];
}

/// Infers which body region a garment mesh belongs to from its material's
/// display name.
///
/// Fixed priority, first match wins: "body", then "head"/"helmet", then
/// "hands", then "feet". All checks are case-insensitive except "feet",
/// which matches case-sensitively. That asymmetry is observed stock
/// behavior and is kept verbatim (and pinned by a test) rather than
/// silently normalized.
pub fn region_for_name(name: &str) -> Option<BodyRegion> {
    let lower = name.to_ascii_lowercase();

    if lower.contains("body") {
        Some(BodyRegion::Body)
    } else if lower.contains("head") || lower.contains("helmet") {
        Some(BodyRegion::Head)
    } else if lower.contains("hands") {
        Some(BodyRegion::Hands)
    } else if name.contains("feet") {
        Some(BodyRegion::Feet)
    } else {
        None
    }
}
