//! Region color resolution from equipped items.

use bevy::prelude::warn;

use super::slots::EquipmentSource;
use crate::color::DyeColor;
use crate::region::BodyRegion;

/// Colors resolved for each dyeable body region in one pass.
///
/// A region is present only when an occupied slot mapping to it carried
/// dye-data with a parseable tint. Rebuilt from scratch on every pass,
/// never cached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionColorMap {
    colors: [Option<DyeColor>; BodyRegion::ALL.len()],
}

impl RegionColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: BodyRegion) -> Option<DyeColor> {
        self.colors[region as usize]
    }

    /// Record a region's color. A later occupant of the same region
    /// overwrites an earlier one.
    pub fn insert(&mut self, region: BodyRegion, color: DyeColor) {
        self.colors[region as usize] = Some(color);
    }

    pub fn is_empty(&self) -> bool {
        self.colors.iter().all(Option::is_none)
    }

    /// Number of regions with a resolved color.
    pub fn len(&self) -> usize {
        self.colors.iter().filter(|c| c.is_some()).count()
    }
}

/// Scan equipped items and resolve the color chosen for each body region.
///
/// Empty slots, items without dye-data, and slots covering no dyeable
/// region are skipped silently; none of those are faults. A malformed tint
/// drops only its own region, logged at warn level, and the scan continues.
pub fn resolve_region_colors(equipment: &impl EquipmentSource) -> RegionColorMap {
    let mut map = RegionColorMap::new();

    for item in equipment.slots().flatten() {
        let Some(dye) = &item.dye else { continue };
        let Some(region) = item.slot.region() else { continue };

        match dye.tint().parse::<DyeColor>() {
            Ok(color) => map.insert(region, color),
            Err(err) => warn!("ignoring tint for {region:?}: {err}"),
        }
    }

    map
}
