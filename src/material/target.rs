//! Capability interface over one garment mesh's material.

use super::translation::{ScalarParam, TextureSlot};
use crate::color::DyeColor;

/// The narrow mutation surface the dye pipeline needs from a host material.
///
/// Implementations expose the material's shader identity and display name
/// for classification and region selection, plus slot-addressed texture,
/// scalar, and color writes. The pipeline borrows a target only for the
/// duration of one pass and retains nothing.
pub trait DyeTarget {
    /// Host texture handle, carried between slots unchanged.
    type Texture: Clone;

    /// Current shader identity, e.g. `"character/cloth"`.
    fn shader_name(&self) -> &str;

    /// Display name the region selector matches against.
    fn display_name(&self) -> &str;

    /// Read a texture slot. Empty slots read `None`.
    fn texture(&self, slot: TextureSlot) -> Option<Self::Texture>;

    /// Write a texture slot, emptying it on `None`.
    fn set_texture(&mut self, slot: TextureSlot, texture: Option<Self::Texture>);

    fn set_scalar(&mut self, param: ScalarParam, value: f32);

    fn set_color(&mut self, color: DyeColor);

    /// Reassign the material to the unified dyed shader.
    fn assign_dyed_shader(&mut self);
}

#[cfg(test)]
pub(crate) mod mock {
    //! Minimal in-memory material for core tests.

    use super::*;
    use crate::material::variant::shader_names;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct MockMaterial {
        pub shader: String,
        pub name: String,
        pub textures: [Option<&'static str>; TextureSlot::COUNT],
        pub mask_range: Option<f32>,
        pub fuzziness: Option<f32>,
        pub color: Option<DyeColor>,
    }

    impl MockMaterial {
        pub fn new(shader: &str, name: &str) -> Self {
            Self {
                shader: shader.to_owned(),
                name: name.to_owned(),
                textures: [None; TextureSlot::COUNT],
                mask_range: None,
                fuzziness: None,
                color: None,
            }
        }

        pub fn with_texture(mut self, slot: TextureSlot, texture: &'static str) -> Self {
            self.textures[slot as usize] = Some(texture);
            self
        }

        pub fn texture_in(&self, slot: TextureSlot) -> Option<&'static str> {
            self.textures[slot as usize]
        }
    }

    impl DyeTarget for MockMaterial {
        type Texture = &'static str;

        fn shader_name(&self) -> &str {
            &self.shader
        }

        fn display_name(&self) -> &str {
            &self.name
        }

        fn texture(&self, slot: TextureSlot) -> Option<&'static str> {
            self.textures[slot as usize]
        }

        fn set_texture(&mut self, slot: TextureSlot, texture: Option<&'static str>) {
            self.textures[slot as usize] = texture;
        }

        fn set_scalar(&mut self, param: ScalarParam, value: f32) {
            match param {
                ScalarParam::MaskRange => self.mask_range = Some(value),
                ScalarParam::Fuzziness => self.fuzziness = Some(value),
            }
        }

        fn set_color(&mut self, color: DyeColor) {
            self.color = Some(color);
        }

        fn assign_dyed_shader(&mut self) {
            self.shader = shader_names::DYED.to_owned();
        }
    }
}
