//! Translation from each shading model's native slot layout onto the
//! unified layout.
//!
//! Every dyeable shading model carries the same three logical textures
//! (albedo, normal, and a packed roughness/metallic/occlusion map) under
//! its own slot names. Remapping reads those, assigns the unified shader,
//! and writes them back into the unified slots together with the constant
//! mask parameters and the resolved dye color.

use super::target::DyeTarget;
use super::variant::ShaderVariant;
use crate::color::DyeColor;

/// Symbolic ids of every texture slot across the known shading models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    // Unified layout, also the `character/base` native layout.
    Albedo,
    Normal,
    Rmoe,
    // `character/cloth` native layout.
    Albedo1,
    Normal1,
    Rmo,
    // `character/player_outfit` native layout.
    Albedo2,
    Normal2,
    Rmot,
}

impl TextureSlot {
    /// Number of distinct slots, for dense per-slot storage.
    pub const COUNT: usize = 9;
}

/// Scalar parameters of the unified shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarParam {
    MaskRange,
    Fuzziness,
}

/// Mask range written on every remap.
pub const MASK_RANGE: f32 = 1.0;

/// Mask fuzziness written on every remap.
pub const FUZZINESS: f32 = 1.0;

/// Native source slots of one dyeable shading model, in unified order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotTranslation {
    pub albedo: TextureSlot,
    pub normal: TextureSlot,
    pub rmoe: TextureSlot,
}

/// Look up the native slot layout for a variant.
///
/// Returns `None` for `Skin`, `Hair`, and `Unknown`, which are never
/// remapped.
pub fn translation_for(variant: ShaderVariant) -> Option<SlotTranslation> {
    match variant {
        ShaderVariant::Character => Some(SlotTranslation {
            albedo: TextureSlot::Albedo,
            normal: TextureSlot::Normal,
            rmoe: TextureSlot::Rmoe,
        }),
        ShaderVariant::Cloth => Some(SlotTranslation {
            albedo: TextureSlot::Albedo1,
            normal: TextureSlot::Normal1,
            rmoe: TextureSlot::Rmo,
        }),
        ShaderVariant::Outfit => Some(SlotTranslation {
            albedo: TextureSlot::Albedo2,
            normal: TextureSlot::Normal2,
            rmoe: TextureSlot::Rmot,
        }),
        ShaderVariant::Skin | ShaderVariant::Hair | ShaderVariant::Unknown => None,
    }
}

/// Rewrite a dyeable material onto the unified shader with the given color.
///
/// Sources are read before anything is written, so re-running this on a
/// material whose source slots equal the destination slots (the
/// `character/base` layout, or an already-remapped material) passes its
/// textures through unchanged; scalars and color are plain overwrites.
/// Textures are carried as-is, including absent ones.
pub fn remap_material<T: DyeTarget>(
    material: &mut T,
    translation: SlotTranslation,
    color: DyeColor,
) {
    let albedo = material.texture(translation.albedo);
    let normal = material.texture(translation.normal);
    let rmoe = material.texture(translation.rmoe);

    material.assign_dyed_shader();
    material.set_texture(TextureSlot::Albedo, albedo);
    material.set_texture(TextureSlot::Normal, normal);
    material.set_texture(TextureSlot::Rmoe, rmoe);
    material.set_scalar(ScalarParam::MaskRange, MASK_RANGE);
    material.set_scalar(ScalarParam::Fuzziness, FUZZINESS);
    material.set_color(color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MockMaterial;
    use crate::material::variant::shader_names;

    #[test]
    fn test_translation_table() {
        let cloth = translation_for(ShaderVariant::Cloth).unwrap();
        assert_eq!(cloth.albedo, TextureSlot::Albedo1);
        assert_eq!(cloth.normal, TextureSlot::Normal1);
        assert_eq!(cloth.rmoe, TextureSlot::Rmo);

        let outfit = translation_for(ShaderVariant::Outfit).unwrap();
        assert_eq!(outfit.albedo, TextureSlot::Albedo2);
        assert_eq!(outfit.normal, TextureSlot::Normal2);
        assert_eq!(outfit.rmoe, TextureSlot::Rmot);

        // The base character model already uses the unified names.
        let character = translation_for(ShaderVariant::Character).unwrap();
        assert_eq!(character.albedo, TextureSlot::Albedo);
        assert_eq!(character.normal, TextureSlot::Normal);
        assert_eq!(character.rmoe, TextureSlot::Rmoe);
    }

    #[test]
    fn test_exempt_variants_have_no_translation() {
        assert_eq!(translation_for(ShaderVariant::Skin), None);
        assert_eq!(translation_for(ShaderVariant::Hair), None);
        assert_eq!(translation_for(ShaderVariant::Unknown), None);
    }

    #[test]
    fn test_remap_cloth() {
        let mut material = MockMaterial::new(shader_names::CLOTH, "Body_Outer")
            .with_texture(TextureSlot::Albedo1, "cloth_albedo")
            .with_texture(TextureSlot::Normal1, "cloth_normal")
            .with_texture(TextureSlot::Rmo, "cloth_rmo");

        let translation = translation_for(ShaderVariant::Cloth).unwrap();
        remap_material(&mut material, translation, DyeColor::rgb(0, 255, 0));

        assert_eq!(material.shader, shader_names::DYED);
        assert_eq!(material.texture_in(TextureSlot::Albedo), Some("cloth_albedo"));
        assert_eq!(material.texture_in(TextureSlot::Normal), Some("cloth_normal"));
        assert_eq!(material.texture_in(TextureSlot::Rmoe), Some("cloth_rmo"));
        assert_eq!(material.mask_range, Some(MASK_RANGE));
        assert_eq!(material.fuzziness, Some(FUZZINESS));
        assert_eq!(material.color, Some(DyeColor::rgb(0, 255, 0)));
    }

    #[test]
    fn test_remap_is_repeat_safe() {
        let mut material = MockMaterial::new(shader_names::CHARACTER, "hands_glove")
            .with_texture(TextureSlot::Albedo, "a")
            .with_texture(TextureSlot::Normal, "n")
            .with_texture(TextureSlot::Rmoe, "r");

        let translation = translation_for(ShaderVariant::Character).unwrap();
        remap_material(&mut material, translation, DyeColor::rgb(1, 2, 3));
        let first = material.clone();

        // Source slots equal destination slots here, so a second direct
        // remap must be a texture no-op and a scalar/color overwrite.
        remap_material(&mut material, translation, DyeColor::rgb(1, 2, 3));
        assert_eq!(material, first);
    }

    #[test]
    fn test_remap_carries_absent_textures() {
        let mut material =
            MockMaterial::new(shader_names::OUTFIT, "helmet").with_texture(TextureSlot::Albedo2, "a2");

        let translation = translation_for(ShaderVariant::Outfit).unwrap();
        remap_material(&mut material, translation, DyeColor::BLACK);

        assert_eq!(material.texture_in(TextureSlot::Albedo), Some("a2"));
        assert_eq!(material.texture_in(TextureSlot::Normal), None);
        assert_eq!(material.texture_in(TextureSlot::Rmoe), None);
    }
}
