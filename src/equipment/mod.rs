//! Equipment data and region color resolution.
//!
//! Provides the item-side data model ([`ArmorItem`], [`DyeData`]), the
//! [`EquipmentSource`] capability trait, and the resolver that turns one
//! character's equipped items into a [`RegionColorMap`].

mod component;
mod resolver;
mod slots;

pub use component::{Equipment, PrimaryCharacter};
pub use resolver::{RegionColorMap, resolve_region_colors};
pub use slots::{
    ArmorItem, DyeData, EquipSlot, EquipmentSource, TINT_COLOR_DEFAULT, TINT_COLOR_KEY,
};
