//! Dropped item stacks lying in the world.

use std::any::Any;

use steel_registry::vanilla_entity_types::ITEM;
use steel_utils::math::Vector3;

use crate::entity::{Entity, EntityBase};
use crate::item::ItemStack;

/// Ticks before a dropped item can be picked up.
pub const PICKUP_DELAY: i32 = 10;

/// A dropped item.
pub struct ItemEntity {
    base: EntityBase,
    stack: ItemStack,
}

impl ItemEntity {
    /// Creates a dropped `stack` at `position`.
    #[must_use]
    pub fn new(position: Vector3<f64>, stack: ItemStack) -> Self {
        Self {
            base: EntityBase::new(ITEM, position),
            stack,
        }
    }

    /// The dropped stack.
    #[must_use]
    pub const fn stack(&self) -> &ItemStack {
        &self.stack
    }

    /// Whether the pickup delay has elapsed.
    #[must_use]
    pub fn can_be_picked_up(&self) -> bool {
        self.tick_count() >= PICKUP_DELAY
    }
}

impl Entity for ItemEntity {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
