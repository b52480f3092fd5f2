//! ECS-side garment material state.

use bevy::prelude::*;

use super::target::DyeTarget;
use super::translation::{ScalarParam, TextureSlot};
use super::variant::shader_names;
use crate::color::DyeColor;

/// Material state of one skinned garment mesh, as consumed by the
/// character renderer.
///
/// Texture slots are sparse: a slot holds `None` until its shading model
/// populates it. The dye pass mutates this state in place through
/// [`DyeTarget`]; the render layer resolves the shader identity string to
/// an actual shader (the unified one via
/// [`DyedCharacterShader`](crate::DyedCharacterShader)).
#[derive(Component, Clone, Debug)]
pub struct CharacterMaterial {
    shader: String,
    name: String,
    textures: [Option<Handle<Image>>; TextureSlot::COUNT],
    mask_range: Option<f32>,
    fuzziness: Option<f32>,
    color: Option<DyeColor>,
}

impl CharacterMaterial {
    /// Material state for the given shader identity and display name.
    pub fn new(shader: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            shader: shader.into(),
            name: name.into(),
            textures: std::array::from_fn(|_| None),
            mask_range: None,
            fuzziness: None,
            color: None,
        }
    }

    /// Builder-style texture assignment for spawn-time setup.
    pub fn with_texture(mut self, slot: TextureSlot, texture: Handle<Image>) -> Self {
        self.textures[slot as usize] = Some(texture);
        self
    }

    pub fn shader(&self) -> &str {
        &self.shader
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture_in(&self, slot: TextureSlot) -> Option<&Handle<Image>> {
        self.textures[slot as usize].as_ref()
    }

    pub fn mask_range(&self) -> Option<f32> {
        self.mask_range
    }

    pub fn fuzziness(&self) -> Option<f32> {
        self.fuzziness
    }

    /// The dye color applied to this material, once dyed.
    pub fn color(&self) -> Option<DyeColor> {
        self.color
    }

    /// The dye color as a render color, once dyed.
    pub fn render_color(&self) -> Option<Color> {
        self.color.map(Color::from)
    }
}

impl DyeTarget for CharacterMaterial {
    type Texture = Handle<Image>;

    fn shader_name(&self) -> &str {
        &self.shader
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn texture(&self, slot: TextureSlot) -> Option<Handle<Image>> {
        self.textures[slot as usize].clone()
    }

    fn set_texture(&mut self, slot: TextureSlot, texture: Option<Handle<Image>>) {
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
