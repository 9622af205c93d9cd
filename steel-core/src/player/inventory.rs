//! Player inventory storage.
//!
//! Slot layout follows vanilla `Inventory`: 0..9 hotbar, 9..36 main,
//! 36..40 armor, 40 offhand.

use std::{array, mem};

use crate::item::ItemStack;

/// Total number of slots.
pub const INVENTORY_SIZE: usize = 41;
/// Number of hotbar slots.
pub const HOTBAR_SIZE: u8 = 9;
/// Index of the offhand slot.
pub const OFFHAND_SLOT: usize = 40;

/// A player's items.
pub struct PlayerInventory {
    items: [ItemStack; INVENTORY_SIZE],
    selected: u8,
}

impl PlayerInventory {
    /// Creates an empty inventory with the first hotbar slot selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: array::from_fn(|_| ItemStack::empty()),
            selected: 0,
        }
    }

    /// The selected hotbar slot.
    #[must_use]
    pub const fn get_selected_slot(&self) -> u8 {
        self.selected
    }

    /// Selects a hotbar slot. Out of range values are ignored.
    pub const fn set_selected_slot(&mut self, slot: u8) {
        if slot < HOTBAR_SIZE {
            self.selected = slot;
        }
    }

    /// The stack in `slot`, or `None` if the index is out of range.
    #[must_use]
    pub fn get_item(&self, slot: usize) -> Option<&ItemStack> {
        self.items.get(slot)
    }

    /// Replaces the stack in `slot`. Out of range indices are ignored.
    pub fn set_item(&mut self, slot: usize, stack: ItemStack) {
        if let Some(item) = self.items.get_mut(slot) {
            *item = stack;
        }
    }

    /// The stack in the selected hotbar slot.
    #[must_use]
    pub fn main_hand(&self) -> &ItemStack {
        &self.items[usize::from(self.selected)]
    }

    /// The stack in the offhand slot.
    #[must_use]
    pub fn off_hand(&self) -> &ItemStack {
        &self.items[OFFHAND_SLOT]
    }

    /// Removes one item from `slot`.
    pub fn shrink(&mut self, slot: usize) {
        if let Some(item) = self.items.get_mut(slot) {
            item.count -= 1;
            if item.count <= 0 {
                *item = ItemStack::empty();
            }
        }
    }

    /// Removes one item from the selected hotbar slot.
    pub fn shrink_main_hand(&mut self) {
        self.shrink(usize::from(self.selected));
    }

    /// Removes every non-empty stack, in slot order, leaving the inventory empty.
    pub fn take_non_empty(&mut self) -> Vec<ItemStack> {
        self.items
            .iter_mut()
            .filter(|stack| !stack.is_empty())
            .map(mem::take)
            .collect()
    }

    /// Whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(ItemStack::is_empty)
    }
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}
