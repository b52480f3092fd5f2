//! ECS-side equipment storage.

use bevy::prelude::*;

use super::slots::{ArmorItem, EquipmentSource};

/// Fixed-order equipment worn by one character entity.
///
/// The slot layout is owned by the host's inventory rules; this crate only
/// reads it through [`EquipmentSource`] during a dye pass.
#[derive(Component, Clone, Debug, Default)]
pub struct Equipment {
    slots: Vec<Option<ArmorItem>>,
}

impl Equipment {
    /// An equipment rack with `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    /// Place an item into a slot, replacing any current occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn equip(&mut self, index: usize, item: ArmorItem) {
        self.slots[index] = Some(item);
    }

    /// Empty a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn clear(&mut self, index: usize) {
        self.slots[index] = None;
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl EquipmentSource for Equipment {
    fn slots(&self) -> impl Iterator<Item = Option<&ArmorItem>> {
        self.slots.iter().map(Option::as_ref)
    }
}

/// Marker for the character whose live equipment backs outfit previews.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PrimaryCharacter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::slots::EquipSlot;

    #[test]
    fn test_equip_and_clear() {
        let mut equipment = Equipment::new(4);
        assert_eq!(equipment.slot_count(), 4);

        equipment.equip(1, ArmorItem::new(EquipSlot::Chest));
        let occupied: Vec<_> = equipment.slots().map(|s| s.is_some()).collect();
        assert_eq!(occupied, [false, true, false, false]);

        equipment.clear(1);
        assert!(equipment.slots().all(|s| s.is_none()));
    }
}
