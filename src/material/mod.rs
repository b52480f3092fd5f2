//! Material classification, slot translation, and the dye target surface.
//!
//! A garment material is classified by its shader identity into a
//! [`ShaderVariant`]; dyeable variants carry a [`SlotTranslation`] mapping
//! their native texture slots onto the unified layout. [`DyeTarget`] is the
//! capability interface the remapper mutates through; [`CharacterMaterial`]
//! is the ECS-side implementation.

mod component;
mod target;
mod translation;
mod variant;

pub use component::CharacterMaterial;
pub use target::DyeTarget;
pub use translation::{
    FUZZINESS, MASK_RANGE, ScalarParam, SlotTranslation, TextureSlot, remap_material,
    translation_for,
};
pub use variant::{ShaderVariant, shader_names};

#[cfg(test)]
pub(crate) use target::mock::MockMaterial;
