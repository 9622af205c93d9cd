//! Damage requests against living entities.
//!
//! Order of side effects, which listeners and tests can observe:
//! 1. gate (window, no health, immunity, invulnerable flag)
//! 2. arm the no-damage window
//! 3. armor reduction
//! 4. fire resistance
//! 5. `EntityDamageEvent`
//! 6. last hurt amount, player credit, kill statistic
//! 7. hurt sound and entity event
//! 8. health change, possibly death
//! 9. last damager
//! 10. melee knockback
//!
//! The window is armed before the resistance and cancellation checks, so a
//! resisted or cancelled hit still grants invulnerability.

use std::sync::Arc;

use steel_utils::entity_events::EntityStatus;
use steel_utils::math::Vector3;

use crate::combat::armor::ArmorSnapshot;
use crate::combat::health::{HealthChange, set_health};
use crate::combat::invulnerability::is_blocked;
use crate::combat::{CombatContext, play_entity_sound};
use crate::entity::damage::DamageRequest;
use crate::entity::effects::MobEffect;
use crate::entity::living_base::LivingEntityBase;
use crate::entity::{Entity, LivingEntity};
use crate::event::EntityDamageEvent;
use crate::stats::Stat;

/// How a damage request ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HurtOutcome {
    /// The entity was already resolving another request. Nothing changed.
    Rejected,
    /// The gate turned the request away. Nothing changed.
    Blocked,
    /// Fire resistance absorbed the hit. Only the window was armed.
    Resisted,
    /// A listener cancelled the damage event. Only the window was armed.
    Cancelled,
    /// Damage was applied.
    Applied {
        /// Health removed.
        damage: f32,
        /// Whether the hit killed the entity.
        killed: bool,
    },
}

impl HurtOutcome {
    /// Whether damage reached the entity's health.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Releases the entity's pipeline claim when the request finishes.
struct ResolvingGuard<'a>(&'a LivingEntityBase);

impl Drop for ResolvingGuard<'_> {
    fn drop(&mut self) {
        self.0.finish_resolving_damage();
    }
}

/// Applies `request` to `entity`.
///
/// A second request against the same entity while this one is still running
/// (from a listener, a death hook, ...) is rejected.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(entity = entity.id(), cause = ?request.cause, amount = request.amount)
)]
pub fn hurt(entity: &dyn LivingEntity, request: &DamageRequest, ctx: &CombatContext<'_>) -> HurtOutcome {
    let living = entity.living_base();
    if !living.begin_resolving_damage() {
        log::debug!("Rejected nested damage against {} #{}", entity.name(), entity.id());
        return HurtOutcome::Rejected;
    }
    let _guard = ResolvingGuard(living);
    resolve(entity, request, ctx)
}

fn resolve(entity: &dyn LivingEntity, request: &DamageRequest, ctx: &CombatContext<'_>) -> HurtOutcome {
    if is_blocked(entity, request.cause) {
        return HurtOutcome::Blocked;
    }

    let living = entity.living_base();
    living.set_invulnerable_time(living.get_max_invulnerable_time());

    let amount = ArmorSnapshot::of(entity, ctx.attributes).reduce(request.amount);

    if fire_resistance_applies(entity, request) {
        return HurtOutcome::Resisted;
    }

    let event = ctx.events.entity_damage(EntityDamageEvent {
        entity_id: entity.id(),
        entity_type: entity.entity_type(),
        cause: request.cause,
        source_id: request.source.as_ref().map(|source| source.id()),
        damage: amount,
        final_damage: amount,
        cancelled: false,
    });
    if event.cancelled {
        return HurtOutcome::Cancelled;
    }

    let final_damage = event.final_damage;
    let resulting = living.get_health() - final_damage;
    living.set_last_hurt(final_damage);

    if let Some(source) = &request.source {
        credit_player(entity, source.as_ref(), resulting, ctx);
    }

    play_entity_sound(entity, entity.hurt_sound(), ctx);
    ctx.world
        .broadcast_entity_event(entity.id(), EntityStatus::Hurt);

    let change = set_health(entity, resulting, ctx);
    living.set_last_damager(request.source.as_ref());

    if request.cause.is_melee()
        && let Some(source) = &request.source
    {
        apply_knockback(entity, source, event.damage);
    }

    HurtOutcome::Applied {
        damage: final_damage,
        killed: change == HealthChange::Died,
    }
}

/// Fire resistance stops fire-class causes and fireball hits.
fn fire_resistance_applies(entity: &dyn LivingEntity, request: &DamageRequest) -> bool {
    if !entity.living_base().has_effect(MobEffect::FireResistance) {
        return false;
    }
    request.cause.is_fire()
        || request
            .source
            .as_ref()
            .is_some_and(|source| source.is_fireball())
}

/// Stamps the player-hurt tick for creditable sources and, on a lethal hit,
/// records the killer and their kill statistic.
fn credit_player(entity: &dyn LivingEntity, source: &dyn Entity, resulting: f32, ctx: &CombatContext<'_>) {
    let attribution = source.attribution();
    if !attribution.is_creditable() {
        return;
    }

    let living = entity.living_base();
    living.set_last_hurt_by_player_tick(entity.tick_count());
    if resulting > 0.0 {
        return;
    }
    if let Some(player) = attribution.credited_player() {
        living.set_killer(&player);
        ctx.stats
            .increment(&player, Stat::KillEntity(entity.entity_type().key.clone()));
    }
}

/// Pushes the victim along the ray toward the attacker's eyes, starting from
/// the attacker's own velocity.
fn apply_knockback(entity: &dyn LivingEntity, source: &Arc<dyn Entity>, damage: f32) {
    let direction = (source.eye_position() - entity.position()).normalize();
    let strength = (f64::from(damage) + 1.0) / 2.0;
    let velocity: Vector3<f64> = source.velocity() + direction * strength;
    entity.set_velocity(velocity);
}
