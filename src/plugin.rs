//! Bevy integration: trigger messages, one-frame deferral, and the
//! embedded unified shader.

use bevy::asset::embedded_asset;
use bevy::prelude::*;
use bevy::shader::Shader;

use crate::equipment::{Equipment, PrimaryCharacter, resolve_region_colors};
use crate::material::CharacterMaterial;
use crate::pipeline::dye_material;

/// Asset path of the embedded unified shader.
pub const DYED_SHADER_ASSET_PATH: &str = "embedded://bevy_dye/shaders/dyed_character.wgsl";

/// Sent by the host after a character's mesh set has been (re)built.
#[derive(Message, Clone, Copy, Debug)]
pub struct CharacterMeshesBuilt {
    /// Entity carrying the character's [`Equipment`].
    pub character: Entity,
    /// Root of the freshly built mesh hierarchy.
    pub mesh_root: Entity,
}

/// Sent by the host when an outfit preview is opened.
///
/// The preview always reflects the live [`PrimaryCharacter`]'s equipment.
#[derive(Message, Clone, Copy, Debug)]
pub struct OutfitPreviewOpened {
    /// Root of the preview mesh hierarchy.
    pub mesh_root: Entity,
}

/// The unified dyed-character shader, loaded once at plugin build from the
/// embedded asset.
///
/// Required before any pass runs: the pass runner takes it as `Res`, so a
/// missing resource is a startup fault, never a per-pass error.
#[derive(Resource, Clone, Debug)]
pub struct DyedCharacterShader(pub Handle<Shader>);

/// One queued dye pass awaiting its single-frame deferral.
#[derive(Clone, Copy, Debug)]
struct PendingPass {
    character: Entity,
    mesh_root: Entity,
    /// Set at the end of the frame the pass was queued in; the runner only
    /// executes ready passes, deferring each by exactly one frame so the
    /// mesh hierarchy that triggered it has finished constructing.
    ready: bool,
}

/// Passes waiting out their one-frame deferral.
///
/// Passes run in arrival order with no mutual exclusion: when two triggers
/// race over the same meshes, the last writer wins. Both writers produce
/// the same output for the same equipment state, so the race is benign.
/// Tearing the app down while passes are still pending simply drops them.
#[derive(Resource, Debug, Default)]
pub struct PendingDyePasses(Vec<PendingPass>);

impl PendingDyePasses {
    /// Number of passes still waiting to run.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// System set containing the dye scheduling systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DyeSystems;

/// Plugin that recolors garment materials from equipped-item dye choices.
///
/// Registers the trigger messages, the embedded unified shader, and the
/// queue/run system pair in [`DyeSystems`] during `PostUpdate`, after the
/// host has built its mesh hierarchies for the frame.
pub struct DyePlugin;

impl Plugin for DyePlugin {
    fn build(&self, app: &mut App) {
        embedded_asset!(app, "shaders/dyed_character.wgsl");

        let shader = app
            .world()
            .resource::<AssetServer>()
            .load(DYED_SHADER_ASSET_PATH);

        app.insert_resource(DyedCharacterShader(shader))
            .init_resource::<PendingDyePasses>()
            .add_message::<CharacterMeshesBuilt>()
            .add_message::<OutfitPreviewOpened>()
            .add_systems(
                PostUpdate,
                (queue_dye_passes, run_dye_passes)
                    .chain()
                    .in_set(DyeSystems),
            );
    }
}

/// Drains trigger messages into pending passes.
fn queue_dye_passes(
    mut built: MessageReader<CharacterMeshesBuilt>,
    mut previews: MessageReader<OutfitPreviewOpened>,
    primary: Query<Entity, With<PrimaryCharacter>>,
    mut pending: ResMut<PendingDyePasses>,
) {
    for message in built.read() {
        pending.0.push(PendingPass {
            character: message.character,
            mesh_root: message.mesh_root,
            ready: false,
        });
    }

    for message in previews.read() {
        match primary.single() {
            Ok(character) => pending.0.push(PendingPass {
                character,
                mesh_root: message.mesh_root,
                ready: false,
            }),
            Err(_) => warn!("outfit preview opened with no primary character; dropping dye pass"),
        }
    }
}

/// Executes passes whose one-frame deferral has elapsed.
///
/// Each pass resolves its region colors once, then dyes every
/// [`CharacterMaterial`] beneath the mesh root. A character that lost its
/// equipment while the pass was deferred drops the pass with a warning.
fn run_dye_passes(
    mut pending: ResMut<PendingDyePasses>,
    // Startup precondition: the unified shader must be loaded before any
    // pass runs. Taking it as `Res` makes its absence a hard fault.
    _shader: Res<DyedCharacterShader>,
    characters: Query<&Equipment>,
    children: Query<&Children>,
    mut materials: Query<&mut CharacterMaterial>,
) {
    let mut deferred = Vec::new();

    for pass in pending.0.drain(..) {
        if !pass.ready {
            deferred.push(PendingPass {
                ready: true,
                ..pass
            });
            continue;
        }

        let Ok(equipment) = characters.get(pass.character) else {
            warn!(
                "dye pass dropped: {:?} carries no equipment",
                pass.character
            );
            continue;
        };

        let colors = resolve_region_colors(equipment);
        let mut dyed = 0;

        let mut stack = vec![pass.mesh_root];
        while let Some(entity) = stack.pop() {
            if let Ok(entity_children) = children.get(entity) {
                stack.extend_from_slice(entity_children);
            }

            if let Ok(mut material) = materials.get_mut(entity) {
                if dye_material(&colors, material.as_mut()) {
                    dyed += 1;
                }
            }
        }

        debug!("dye pass under {:?}: {dyed} materials recolored", pass.mesh_root);
    }

    pending.0 = deferred;
}
