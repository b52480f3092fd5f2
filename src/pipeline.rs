//! The dye application pass.
//!
//! One pass has two phases: Collecting resolves the [`RegionColorMap`] from
//! equipped items exactly once, then Applying walks the garment materials
//! and runs classification, region selection, and slot translation on each.
//! Both phases are plain synchronous functions so they stay testable
//! without a scheduler; the one-frame deferral lives in
//! [`plugin`](crate::plugin).

use bevy::prelude::debug;

use crate::equipment::{EquipmentSource, RegionColorMap, resolve_region_colors};
use crate::material::{DyeTarget, ShaderVariant, remap_material, translation_for};
use crate::region::region_for_name;

/// Apply the resolved region colors to one material.
///
/// Skin, hair, and unrecognized shaders are terminal and are never
/// mutated, whatever their display name. A material whose name matches no
/// region, or whose region has no resolved color, is likewise left
/// bit-for-bit as found. Returns whether the material was remapped.
pub fn dye_material<T: DyeTarget>(colors: &RegionColorMap, material: &mut T) -> bool {
    let variant = ShaderVariant::classify(material.shader_name());
    let Some(translation) = translation_for(variant) else {
        debug!(
            "skipping '{}': {variant:?} is not dyeable",
            material.display_name()
        );
        return false;
    };

    let Some(region) = region_for_name(material.display_name()) else {
        debug!("skipping '{}': no region match", material.display_name());
        return false;
    };

    let Some(color) = colors.get(region) else {
        debug!(
            "skipping '{}': no color resolved for {region:?}",
            material.display_name()
        );
        return false;
    };

    debug!("dyeing '{}' as {region:?}", material.display_name());
    remap_material(material, translation, color);
    true
}

/// Run one full pass over a character's garment materials.
///
/// Collecting happens once up front, then every supplied material goes
/// through one Applying step. Skips are contained per material: nothing one
/// material does can prevent the rest from being processed, and there is no
/// rollback of materials already dyed. Returns the number of materials
/// remapped.
pub fn apply<'a, E, T>(equipment: &E, materials: impl IntoIterator<Item = &'a mut T>) -> usize
where
    E: EquipmentSource,
    T: DyeTarget + 'a,
{
    let colors = resolve_region_colors(equipment);

    materials
        .into_iter()
        .map(|material| dye_material(&colors, material))
        .filter(|dyed| *dyed)
        .count()
}
