//! Experience orbs.

use std::any::Any;

use steel_registry::vanilla_entity_types::EXPERIENCE_ORB;
use steel_utils::math::Vector3;
use uuid::Uuid;

use crate::entity::{Entity, EntityBase};

/// An experience orb waiting to be picked up.
pub struct ExperienceOrb {
    base: EntityBase,
    value: i32,
    source: Option<Uuid>,
    trigger: Option<Uuid>,
}

impl ExperienceOrb {
    /// Creates an orb worth `value` experience. `source` is the entity that
    /// dropped it and `trigger` the entity that caused the drop.
    #[must_use]
    pub fn new(
        position: Vector3<f64>,
        value: i32,
        source: Option<Uuid>,
        trigger: Option<Uuid>,
    ) -> Self {
        Self {
            base: EntityBase::new(EXPERIENCE_ORB, position),
            value,
            source,
            trigger,
        }
    }

    /// Experience points carried.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// UUID of the entity that dropped the orb.
    #[must_use]
    pub const fn source(&self) -> Option<Uuid> {
        self.source
    }

    /// UUID of the entity that caused the drop.
    #[must_use]
    pub const fn trigger(&self) -> Option<Uuid> {
        self.trigger
    }
}

impl Entity for ExperienceOrb {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
