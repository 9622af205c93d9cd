//! Non-player living entities: zombies, cows, wolves, slimes, ...

use std::any::Any;
use std::ptr;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Weak};

use steel_registry::EntityTypeRef;
use steel_registry::vanilla_entity_types::{MAGMA_CUBE, SLIME};
use steel_utils::locks::SyncMutex;
use steel_utils::math::Vector3;

use crate::combat::attribution::Attribution;
use crate::entity::attributes::Attribute;
use crate::entity::living_base::LivingEntityBase;
use crate::entity::{Entity, EntityBase, LivingEntity};
use crate::item::{ItemStack, items};
use crate::player::Player;

/// A mob's hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    /// The main hand.
    Main,
    /// The off hand.
    Off,
}

impl Hand {
    const fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Off => 1,
        }
    }
}

/// A generic mob. Species differences live in the entity type and in the
/// death hook table, not in separate structs.
pub struct Mob {
    base: EntityBase,
    living: LivingEntityBase,
    /// Slime size. Always 1 for other species.
    size: AtomicI32,
    tamed: AtomicBool,
    owner: SyncMutex<Option<Weak<Player>>>,
    hands: SyncMutex<[ItemStack; 2]>,
}

impl Mob {
    /// Creates a mob of `entity_type` at full health.
    #[must_use]
    pub fn new(entity_type: EntityTypeRef, position: Vector3<f64>) -> Self {
        Self {
            base: EntityBase::new(entity_type, position),
            living: LivingEntityBase::new(entity_type.max_health),
            size: AtomicI32::new(1),
            tamed: AtomicBool::new(false),
            owner: SyncMutex::new(None),
            hands: SyncMutex::new([ItemStack::empty(), ItemStack::empty()]),
        }
    }

    /// Whether this mob is a slime or magma cube.
    #[must_use]
    pub fn is_slime_like(&self) -> bool {
        ptr::eq(self.base.entity_type, SLIME) || ptr::eq(self.base.entity_type, MAGMA_CUBE)
    }

    /// Slime size.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size.load(Ordering::Relaxed)
    }

    /// Resizes a slime. Max health becomes `size²` and health is refilled.
    /// Ignored for other species and for sizes below 1.
    pub fn set_size(&self, size: i32) {
        if !self.is_slime_like() || size < 1 {
            return;
        }
        self.size.store(size, Ordering::Relaxed);
        let max_health = size * size;
        self.living
            .attributes
            .lock()
            .set_base(Attribute::MaxHealth, f64::from(max_health));
        self.living.store_health(self.living.max_health());
    }

    /// Whether a player has tamed this mob.
    #[must_use]
    pub fn is_tamed(&self) -> bool {
        self.tamed.load(Ordering::Relaxed)
    }

    /// Tames the mob for `owner`. Only tameable species accept an owner.
    pub fn tame(&self, owner: &Arc<Player>) {
        if !self.base.entity_type.tameable {
            return;
        }
        *self.owner.lock() = Some(Arc::downgrade(owner));
        self.tamed.store(true, Ordering::Relaxed);
    }

    /// The stack held in `hand`.
    #[must_use]
    pub fn item_in_hand(&self, hand: Hand) -> ItemStack {
        self.hands.lock()[hand.index()].clone()
    }

    /// Puts `stack` into `hand`.
    pub fn set_item_in_hand(&self, hand: Hand, stack: ItemStack) {
        self.hands.lock()[hand.index()] = stack;
    }

    /// The taming player, if still online.
    #[must_use]
    pub fn owner(&self) -> Option<Arc<Player>> {
        self.owner.lock().as_ref().and_then(Weak::upgrade)
    }
}

impl Entity for Mob {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribution(&self) -> Attribution {
        if !self.base.entity_type.tameable {
            return Attribution::None;
        }
        Attribution::Owned {
            tamed: self.is_tamed(),
            owner: self.owner.lock().clone(),
        }
    }

    fn tick(&self) {
        self.base.increment_tick_count();
        self.living.base_tick();
    }

    fn as_living(&self) -> Option<&dyn LivingEntity> {
        Some(self)
    }
}

impl LivingEntity for Mob {
    fn living_base(&self) -> &LivingEntityBase {
        &self.living
    }

    fn holds_totem(&self) -> bool {
        self.hands
            .lock()
            .iter()
            .any(|stack| stack.is(&items::TOTEM_OF_UNDYING))
    }

    fn consume_totem(&self) {
        let mut hands = self.hands.lock();
        if let Some(stack) = hands
            .iter_mut()
            .find(|stack| stack.is(&items::TOTEM_OF_UNDYING))
        {
            stack.count -= 1;
            if stack.count <= 0 {
                *stack = ItemStack::empty();
            }
        }
    }

    fn as_mob(&self) -> Option<&Mob> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use steel_registry::vanilla_entity_types::{WOLF, ZOMBIE};

    use super::*;

    #[test]
    fn test_slime_size_sets_max_health() {
        let slime = Mob::new(SLIME, Vector3::ZERO);
        slime.set_size(4);
        assert_eq!(slime.size(), 4);
        assert!((slime.living_base().max_health() - 16.0).abs() < f32::EPSILON);
        assert!((slime.living_base().get_health() - 16.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_non_slime_ignores_size() {
        let zombie = Mob::new(ZOMBIE, Vector3::ZERO);
        zombie.set_size(4);
        assert_eq!(zombie.size(), 1);
        assert!((zombie.living_base().max_health() - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_mob_totem_in_either_hand() {
        let zombie = Mob::new(ZOMBIE, Vector3::ZERO);
        assert!(!zombie.holds_totem());
        zombie.set_item_in_hand(Hand::Off, ItemStack::new(items::TOTEM_OF_UNDYING, 2));
        assert!(zombie.holds_totem());
        zombie.consume_totem();
        assert_eq!(zombie.item_in_hand(Hand::Off).count, 1);
        zombie.consume_totem();
        assert!(zombie.item_in_hand(Hand::Off).is_empty());
        assert!(!zombie.holds_totem());
    }

    #[test]
    fn test_untamed_wolf_attribution() {
        let wolf = Mob::new(WOLF, Vector3::ZERO);
        assert!(matches!(
            wolf.attribution(),
            Attribution::Owned { tamed: false, owner: None }
        ));
        let zombie = Mob::new(ZOMBIE, Vector3::ZERO);
        assert!(matches!(zombie.attribution(), Attribution::None));
    }
}
