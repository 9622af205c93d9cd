//! Health changes and the alive/dead transition.

use steel_registry::vanilla_sound_events::ITEM_TOTEM_USE;
use steel_utils::entity_events::EntityStatus;

use crate::combat::death::die;
use crate::combat::{CombatContext, play_entity_sound};
use crate::entity::LivingEntity;
use crate::entity::effects::{MobEffect, MobEffectInstance};
use crate::event::EntityResurrectEvent;
use crate::scoreboard::criteria;

/// What a health change did to the entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthChange {
    /// Health is positive.
    Alive,
    /// Health reached zero on an entity that had already died. Nothing ran.
    AlreadyDead,
    /// A totem of undying saved the entity.
    Resurrected,
    /// The entity died and death handling ran.
    Died,
}

/// Clamps a requested health value into `[0, max_health]`. NaN becomes 0.
#[must_use]
pub fn clamp_health(raw: f32, max_health: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, max_health.max(0.0))
}

/// Sets an entity's health, mirrors it to `health` objectives and runs death
/// handling when it reaches zero.
///
/// Positive health brings a dead entity back, so every drop from positive to
/// zero health runs death handling exactly once.
pub fn set_health(entity: &dyn LivingEntity, raw: f32, ctx: &CombatContext<'_>) -> HealthChange {
    let living = entity.living_base();
    let health = clamp_health(raw, living.max_health());
    store_health(entity, health, ctx);

    if health > 0.0 {
        if living.revive() {
            log::debug!("{} #{} is alive again", entity.name(), entity.id());
        }
        return HealthChange::Alive;
    }
    if living.is_dead() {
        return HealthChange::AlreadyDead;
    }
    if try_use_totem(entity, ctx) {
        return HealthChange::Resurrected;
    }
    if !living.mark_dead() {
        return HealthChange::AlreadyDead;
    }

    die(entity, ctx);
    HealthChange::Died
}

fn store_health(entity: &dyn LivingEntity, health: f32, ctx: &CombatContext<'_>) {
    entity.living_base().store_health(health);

    let objectives = ctx.scoreboard.objectives_by_criteria(criteria::HEALTH);
    if objectives.is_empty() {
        return;
    }
    let name = entity.name();
    for objective in objectives {
        ctx.scoreboard.set_score(&objective, &name, health as i32);
    }
}

/// Spends a held totem of undying to keep `entity` alive at 1 health.
/// Returns `false` when there is no totem or a listener cancels the rescue.
pub fn try_use_totem(entity: &dyn LivingEntity, ctx: &CombatContext<'_>) -> bool {
    if !entity.holds_totem() {
        return false;
    }

    let event = ctx.events.entity_resurrect(EntityResurrectEvent {
        entity_id: entity.id(),
        cancelled: false,
    });
    if event.cancelled {
        return false;
    }

    entity.consume_totem();
    {
        let mut effects = entity.living_base().effects.lock();
        effects.clear();
        effects.add(MobEffectInstance::new(MobEffect::Regeneration, 900, 1));
        effects.add(MobEffectInstance::new(MobEffect::Absorption, 100, 1));
        effects.add(MobEffectInstance::new(MobEffect::FireResistance, 800, 0));
    }
    store_health(entity, 1.0, ctx);

    ctx.world
        .broadcast_entity_event(entity.id(), EntityStatus::TotemOfUndying);
    play_entity_sound(entity, Some(ITEM_TOTEM_USE), ctx);
    log::debug!("{} was saved by a totem of undying", entity.name());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_health() {
        assert!((clamp_health(-5.0, 20.0)).abs() < f32::EPSILON);
        assert!((clamp_health(25.0, 20.0) - 20.0).abs() < f32::EPSILON);
        assert!((clamp_health(7.5, 20.0) - 7.5).abs() < f32::EPSILON);
        assert!((clamp_health(f32::NAN, 20.0)).abs() < f32::EPSILON);
        assert!((clamp_health(f32::NEG_INFINITY, 20.0)).abs() < f32::EPSILON);
    }
}
