//! Lit TNT.

use std::any::Any;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Weak};

use steel_registry::vanilla_entity_types::TNT;
use steel_utils::math::Vector3;

use crate::combat::attribution::Attribution;
use crate::entity::{Entity, EntityBase};
use crate::player::Player;

/// Vanilla fuse length in ticks.
pub const DEFAULT_FUSE: i32 = 80;

/// A primed TNT entity. Remembers who lit it so explosion kills can be credited.
pub struct PrimedTnt {
    base: EntityBase,
    igniter: Option<Weak<Player>>,
    fuse: AtomicI32,
}

impl PrimedTnt {
    /// Primes TNT at `position`, lit by `igniter` if a player did it.
    #[must_use]
    pub fn new(position: Vector3<f64>, igniter: Option<&Arc<Player>>) -> Self {
        Self {
            base: EntityBase::new(TNT, position),
            igniter: igniter.map(Arc::downgrade),
            fuse: AtomicI32::new(DEFAULT_FUSE),
        }
    }

    /// The player who lit the fuse, if still online.
    #[must_use]
    pub fn igniter(&self) -> Option<Arc<Player>> {
        self.igniter.as_ref().and_then(Weak::upgrade)
    }

    /// Remaining fuse ticks.
    #[must_use]
    pub fn fuse(&self) -> i32 {
        self.fuse.load(Ordering::Relaxed)
    }
}

impl Entity for PrimedTnt {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribution(&self) -> Attribution {
        Attribution::Ignited {
            igniter: self.igniter.clone(),
        }
    }

    fn tick(&self) {
        self.base.increment_tick_count();
        if self.fuse.fetch_sub(1, Ordering::Relaxed) <= 1 {
            self.base.discard();
        }
    }
}
