//! Arrows, fireballs and other thrown or shot entities.

use std::any::Any;
use std::sync::{Arc, Weak};

use steel_registry::EntityTypeRef;
use steel_utils::math::Vector3;

use crate::entity::{Entity, EntityBase};

/// A projectile in flight.
///
/// Projectiles carry no attribution of their own. A player-shot arrow is
/// not credited as a player hit.
pub struct Projectile {
    base: EntityBase,
    owner: Option<Weak<dyn Entity>>,
}

impl Projectile {
    /// Creates a projectile of `entity_type` fired by `owner`.
    #[must_use]
    pub fn new(
        entity_type: EntityTypeRef,
        position: Vector3<f64>,
        owner: Option<Weak<dyn Entity>>,
    ) -> Self {
        Self {
            base: EntityBase::new(entity_type, position),
            owner,
        }
    }

    /// The shooter, if it still exists.
    #[must_use]
    pub fn owner(&self) -> Option<Arc<dyn Entity>> {
        self.owner.as_ref().and_then(Weak::upgrade)
    }
}

impl Entity for Projectile {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
