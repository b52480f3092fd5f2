//! # bevy_dye
//!
//! A Bevy plugin that recolors a character's garment meshes from the dye
//! choices stored on equipped inventory items.
//!
//! ## Features
//!
//! - Per-region dye resolution (head, body, hands, feet) from equipment slots
//! - Shader-identity classification of garment materials; skin and hair are
//!   never touched
//! - Slot translation from each stock shading model onto one unified dyeable
//!   shader (embedded WGSL)
//! - One-frame deferred passes triggered by mesh rebuilds and outfit previews
//! - Scheduler-free core (`pipeline::apply`) for host-agnostic use and tests
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_dye::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(DyePlugin)
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands, mut built: MessageWriter<CharacterMeshesBuilt>) {
//!     let mut equipment = Equipment::new(5);
//!     equipment.equip(0, ArmorItem::with_dye(EquipSlot::Chest, DyeData::with_tint("200,30,30")));
//!     let character = commands.spawn((equipment, PrimaryCharacter)).id();
//!
//!     let body = commands
//!         .spawn(CharacterMaterial::new(shader_names::CLOTH, "Body_Outer"))
//!         .id();
//!     let mesh_root = commands.spawn_empty().add_child(body).id();
//!
//!     built.write(CharacterMeshesBuilt { character, mesh_root });
//! }
//! ```

pub mod color;
pub mod equipment;
pub mod material;
pub mod pipeline;
pub mod region;
mod plugin;

pub mod prelude {
    pub use crate::color::{ColorFormatError, DyeColor};
    pub use crate::equipment::{
        ArmorItem, DyeData, EquipSlot, Equipment, EquipmentSource, PrimaryCharacter,
        RegionColorMap, resolve_region_colors,
    };
    pub use crate::material::{
        CharacterMaterial, DyeTarget, ScalarParam, ShaderVariant, TextureSlot, shader_names,
    };
    pub use crate::pipeline::{apply, dye_material};
    pub use crate::plugin::{
        CharacterMeshesBuilt, DYED_SHADER_ASSET_PATH, DyePlugin, DyeSystems, DyedCharacterShader,
        OutfitPreviewOpened, PendingDyePasses,
    };
    pub use crate::region::{BodyRegion, region_for_name};
}

pub use plugin::{
    CharacterMeshesBuilt, DYED_SHADER_ASSET_PATH, DyePlugin, DyeSystems, DyedCharacterShader,
    OutfitPreviewOpened, PendingDyePasses,
};
