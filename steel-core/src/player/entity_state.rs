//! Physical state of a player: posture and what rides on their shoulders.

use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::atomic::AtomicCell;
use steel_registry::EntityTypeRef;

/// Which shoulder a perched entity sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shoulder {
    /// Left shoulder.
    Left,
    /// Right shoulder.
    Right,
}

/// Posture flags and shoulder passengers for a player entity.
pub struct EntityState {
    on_ground: AtomicBool,
    crouching: AtomicBool,
    sprinting: AtomicBool,
    shoulder_left: AtomicCell<Option<EntityTypeRef>>,
    shoulder_right: AtomicCell<Option<EntityTypeRef>>,
}

impl EntityState {
    /// Standing, not on the ground yet, nothing perched.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on_ground: AtomicBool::new(false),
            crouching: AtomicBool::new(false),
            sprinting: AtomicBool::new(false),
            shoulder_left: AtomicCell::new(None),
            shoulder_right: AtomicCell::new(None),
        }
    }

    /// Whether the player is on the ground.
    #[inline]
    pub fn is_on_ground(&self) -> bool {
        self.on_ground.load(Ordering::Relaxed)
    }

    /// Sets the on-ground flag.
    #[inline]
    pub fn set_on_ground(&self, on_ground: bool) {
        self.on_ground.store(on_ground, Ordering::Relaxed);
    }

    /// Whether the player is sneaking (shift key down).
    #[inline]
    pub fn is_crouching(&self) -> bool {
        self.crouching.load(Ordering::Relaxed)
    }

    /// Sets the sneaking flag.
    #[inline]
    pub fn set_crouching(&self, crouching: bool) {
        self.crouching.store(crouching, Ordering::Relaxed);
    }

    /// Whether the player is sprinting.
    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.sprinting.load(Ordering::Relaxed)
    }

    /// Sets the sprinting flag.
    #[inline]
    pub fn set_sprinting(&self, sprinting: bool) {
        self.sprinting.store(sprinting, Ordering::Relaxed);
    }

    /// The entity perched on `shoulder`.
    pub fn shoulder_entity(&self, shoulder: Shoulder) -> Option<EntityTypeRef> {
        match shoulder {
            Shoulder::Left => self.shoulder_left.load(),
            Shoulder::Right => self.shoulder_right.load(),
        }
    }

    /// Perches an entity on `shoulder`, or clears it with `None`.
    pub fn set_shoulder_entity(&self, shoulder: Shoulder, entity: Option<EntityTypeRef>) {
        match shoulder {
            Shoulder::Left => self.shoulder_left.store(entity),
            Shoulder::Right => self.shoulder_right.store(entity),
        }
    }
}

impl Default for EntityState {
    fn default() -> Self {
        Self::new()
    }
}
