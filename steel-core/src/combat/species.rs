//! Per-species death behaviour, looked up by entity type.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use steel_registry::EntityTypeRef;
use steel_registry::vanilla_entity_types::{MAGMA_CUBE, SLIME};
use steel_utils::Identifier;
use steel_utils::math::Vector3;
use steel_utils::random::Random;

use crate::combat::CombatContext;
use crate::entity::{Entity, LivingEntity};
use crate::entity::mob::Mob;
use crate::event::SlimeSplitEvent;

/// Runs after loot when an entity of the registered type dies.
pub type DeathHook = fn(&dyn LivingEntity, &CombatContext<'_>);

/// Death hooks keyed by entity type.
#[derive(Clone, Default)]
pub struct SpeciesDeathRules {
    hooks: FxHashMap<Identifier, DeathHook>,
}

impl SpeciesDeathRules {
    /// No hooks.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slimes and magma cubes split on death.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut rules = Self::empty();
        rules.register(SLIME, split_on_death);
        rules.register(MAGMA_CUBE, split_on_death);
        rules
    }

    /// Registers `hook` for `entity_type`, replacing any earlier hook.
    pub fn register(&mut self, entity_type: EntityTypeRef, hook: DeathHook) {
        self.hooks.insert(entity_type.key.clone(), hook);
    }

    /// The hook for `entity_type`, if any.
    #[must_use]
    pub fn get(&self, entity_type: EntityTypeRef) -> Option<DeathHook> {
        self.hooks.get(&entity_type.key).copied()
    }
}

/// Splits a dead slime larger than size 1 into 2 to 4 half-size offspring
/// of the same species.
pub fn split_on_death(entity: &dyn LivingEntity, ctx: &CombatContext<'_>) {
    let Some(mob) = entity.as_mob() else {
        return;
    };
    let size = mob.size();
    if size <= 1 {
        return;
    }

    let count = 2 + ctx.random.lock().next_i32_bounded(3);
    let event = ctx.events.slime_split(SlimeSplitEvent {
        entity_id: entity.id(),
        count,
        cancelled: false,
    });
    if event.cancelled || event.count <= 0 {
        return;
    }

    let position = entity.position();
    let name = entity.custom_name().filter(|name| !name.is_empty());
    for _ in 0..event.count {
        let offset = {
            let mut random = ctx.random.lock();
            Vector3::new(
                random.next_f64_between(0.5, 3.0),
                0.0,
                random.next_f64_between(0.5, 3.0),
            )
        };
        let offspring = Mob::new(entity.entity_type(), position + offset);
        offspring.entity_base().set_custom_name(name.clone());
        offspring
            .living_base()
            .set_max_invulnerable_time(ctx.config.invulnerability_ticks);
        offspring.set_size(size / 2);
        ctx.world.add_entity(Arc::new(offspring));
    }
    log::debug!("{} split into {} at size {}", entity.name(), event.count, size / 2);
}
