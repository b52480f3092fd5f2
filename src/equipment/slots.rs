//! Equipment slots, armor items, and their dye payloads.

use crate::region::BodyRegion;

/// Equipment slot category of an armor item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquipSlot {
    Head,
    Chest,
    Hands,
    Feet,
    /// Worn somewhere that carries no dyeable meshes (belts, backpacks, ...).
    Other,
}

impl EquipSlot {
    /// The dyeable body region this slot covers, if any.
    pub fn region(self) -> Option<BodyRegion> {
        match self {
            EquipSlot::Head => Some(BodyRegion::Head),
            EquipSlot::Chest => Some(BodyRegion::Body),
            EquipSlot::Hands => Some(BodyRegion::Hands),
            EquipSlot::Feet => Some(BodyRegion::Feet),
            EquipSlot::Other => None,
        }
    }
}

/// Property key under which a dye choice is stored.
pub const TINT_COLOR_KEY: &str = "TintColor";

/// Tint text reported when dye-data exists but carries no explicit choice.
pub const TINT_COLOR_DEFAULT: &str = "0,0,0";

/// Per-item dye payload.
///
/// String properties are chosen externally (a dye workstation, item config,
/// ...) and attached to the item before it reaches this crate. An item
/// without a payload is simply not dyeable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DyeData {
    properties: Vec<(String, String)>,
}

impl DyeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dye-data with the tint property already set.
    pub fn with_tint(tint: impl Into<String>) -> Self {
        let mut data = Self::default();
        data.set_property(TINT_COLOR_KEY, tint);
        data
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.properties.push((key, value)),
        }
    }

    /// Look up a property, falling back to `default` when absent.
    pub fn property<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map_or(default, |(_, v)| v.as_str())
    }

    /// The tint text for this item (`"0,0,0"` when never explicitly chosen).
    pub fn tint(&self) -> &str {
        self.property(TINT_COLOR_KEY, TINT_COLOR_DEFAULT)
    }
}

/// One equipped armor piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArmorItem {
    pub slot: EquipSlot,
    /// Present only for dyeable items; absence silently exempts the item.
    pub dye: Option<DyeData>,
}

impl ArmorItem {
    /// An armor piece without dye-data.
    pub fn new(slot: EquipSlot) -> Self {
        Self { slot, dye: None }
    }

    /// A dyeable armor piece.
    pub fn with_dye(slot: EquipSlot, dye: DyeData) -> Self {
        Self {
            slot,
            dye: Some(dye),
        }
    }
}

/// Ordered, fixed-length view of one character's equipment.
///
/// The resolver walks the slots exactly once per pass and retains nothing
/// afterwards.
pub trait EquipmentSource {
    /// Slots in wear order; `None` for an empty slot.
    fn slots(&self) -> impl Iterator<Item = Option<&ArmorItem>>;
}

/// Convenience source for tests and simple hosts.
impl EquipmentSource for Vec<Option<ArmorItem>> {
    fn slots(&self) -> impl Iterator<Item = Option<&ArmorItem>> {
        self.iter().map(Option::as_ref)
    }
}
