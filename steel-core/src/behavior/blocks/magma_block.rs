//! Magma block behaviour.
//!
//! Burns whatever stands on it unless the entity is sneaking. Follows vanilla
//! `MagmaBlock.stepOn`: `hotFloor` damage of 1.0, skipped when
//! `Entity.isSteppingCarefully`. The cause is `HotFloor` rather than `Fire`,
//! so fire-immune mobs ignore it and fire resistance absorbs it.

use steel_utils::Identifier;

use crate::behavior::block::BlockBehaviour;
use crate::combat::CombatContext;
use crate::combat::hurt::hurt;
use crate::entity::LivingEntity;
use crate::entity::damage::{DamageCause, DamageRequest};

/// Damage dealt per step.
pub const MAGMA_DAMAGE: f32 = 1.0;

/// Behaviour for `minecraft:magma_block`.
pub struct MagmaBlock;

impl MagmaBlock {
    /// The block's id.
    pub const KEY: Identifier = Identifier::vanilla_static("magma_block");

    /// Vanilla `Entity.isSteppingCarefully`: only sneaking players are careful.
    fn is_stepping_carefully(entity: &dyn LivingEntity) -> bool {
        entity
            .as_player()
            .is_some_and(|player| player.entity_state.is_crouching())
    }
}

impl BlockBehaviour for MagmaBlock {
    fn step_on(&self, entity: &dyn LivingEntity, ctx: &CombatContext<'_>) {
        if Self::is_stepping_carefully(entity) {
            return;
        }
        hurt(
            entity,
            &DamageRequest::environment(DamageCause::HotFloor, MAGMA_DAMAGE),
            ctx,
        );
    }
}
