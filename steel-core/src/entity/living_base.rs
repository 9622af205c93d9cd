//! Shared fields for all living entities.
//!
//! Mirrors the fields that vanilla defines on `LivingEntity` (and `Entity` for
//! `invulnerableTime`). Entities that implement `LivingEntity` embed this
//! struct and expose it via `LivingEntity::living_base()`, just like
//! `EntityBase` is used for core `Entity` fields.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Weak};

use crossbeam::atomic::AtomicCell;
use steel_utils::locks::SyncMutex;

use crate::entity::Entity;
use crate::entity::attributes::{Attribute, AttributeMap};
use crate::entity::effects::{MobEffect, MobEffects};
use crate::player::Player;

/// Duration in ticks of the death animation before entity removal.
pub const DEATH_DURATION: i32 = 20;

/// Default length of the no-damage window armed by every hit.
pub const DEFAULT_INVULNERABLE_TIME: i32 = 20;

/// Common fields shared by all living entities.
pub struct LivingEntityBase {
    /// if the entity is dead or not.
    dead: AtomicBool,
    /// Current health, kept within `[0, max_health]` by the health mutator.
    health: AtomicCell<f32>,
    /// The time where the entity can't be hurt and is invulnerable.
    invulnerable_time: AtomicI32,
    /// The window armed on every hit. Bukkit: `maximumNoDamageTicks`.
    max_invulnerable_time: AtomicI32,
    /// When the entity was last hurt.
    last_hurt: AtomicCell<f32>,
    /// Ticks since the entity died. Incremented each tick while dead/dying.
    death_time: AtomicI32,
    /// Entity tick of the last hit from a creditable player.
    last_hurt_by_player_tick: AtomicCell<Option<i32>>,
    /// Player credited with the kill.
    killer: SyncMutex<Option<Weak<Player>>>,
    /// Whatever dealt the most recent applied hit.
    last_damager: SyncMutex<Option<Weak<dyn Entity>>>,
    /// Set while a damage request is being resolved against this entity.
    resolving_damage: AtomicBool,
    /// Attribute instances (max health, armor, ...).
    pub attributes: SyncMutex<AttributeMap>,
    /// Active mob effects.
    pub effects: SyncMutex<MobEffects>,
}

impl LivingEntityBase {
    /// Creates a new `LivingEntityBase` at full health with no invulnerability and no hurt.
    #[must_use]
    pub fn new(max_health: f32) -> Self {
        let mut attributes = AttributeMap::default();
        attributes.set_base(Attribute::MaxHealth, f64::from(max_health));
        Self {
            dead: AtomicBool::new(false),
            health: AtomicCell::new(max_health),
            invulnerable_time: AtomicI32::new(0),
            max_invulnerable_time: AtomicI32::new(DEFAULT_INVULNERABLE_TIME),
            last_hurt: AtomicCell::new(0.0),
            death_time: AtomicI32::new(0),
            last_hurt_by_player_tick: AtomicCell::new(None),
            killer: SyncMutex::new(None),
            last_damager: SyncMutex::new(None),
            resolving_damage: AtomicBool::new(false),
            attributes: SyncMutex::new(attributes),
            effects: SyncMutex::new(MobEffects::default()),
        }
    }

    /// Whether the entity has been killed. Vanilla: `LivingEntity.dead` (L230).
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead.load(Ordering::Relaxed)
    }

    /// Flags the entity as dead. Returns `false` if it already was, so only
    /// one caller ever runs death handling.
    #[inline]
    pub(crate) fn mark_dead(&self) -> bool {
        !self.dead.swap(true, Ordering::AcqRel)
    }

    /// Clears the dead flag and the death animation so the next time health
    /// reaches zero the entity dies again. Returns `false` if it was alive.
    #[inline]
    pub(crate) fn revive(&self) -> bool {
        if !self.dead.swap(false, Ordering::AcqRel) {
            return false;
        }
        self.death_time.store(0, Ordering::Relaxed);
        true
    }

    /// Current health.
    #[inline]
    pub fn get_health(&self) -> f32 {
        self.health.load()
    }

    /// Stores a health value that has already been clamped.
    #[inline]
    pub(crate) fn store_health(&self, health: f32) {
        self.health.store(health);
    }

    /// Maximum health, from the max health attribute.
    pub fn max_health(&self) -> f32 {
        self.attributes.lock().get_value(Attribute::MaxHealth) as f32
    }

    /// Remaining invulnerability ticks. Vanilla: `Entity.invulnerableTime` (L256).
    #[inline]
    pub fn get_invulnerable_time(&self) -> i32 {
        self.invulnerable_time.load(Ordering::Relaxed)
    }

    /// Sets invulnerability ticks.
    #[inline]
    pub fn set_invulnerable_time(&self, ticks: i32) {
        self.invulnerable_time.store(ticks, Ordering::Relaxed);
    }

    /// The window armed by every damage request.
    #[inline]
    pub fn get_max_invulnerable_time(&self) -> i32 {
        self.max_invulnerable_time.load(Ordering::Relaxed)
    }

    /// Sets the window armed by every damage request.
    #[inline]
    pub fn set_max_invulnerable_time(&self, ticks: i32) {
        self.max_invulnerable_time.store(ticks, Ordering::Relaxed);
    }

    /// Last damage amount for invulnerability-frame comparison. Vanilla: `LivingEntity.lastHurt` (L232).
    #[inline]
    pub fn get_last_hurt(&self) -> f32 {
        self.last_hurt.load()
    }

    /// Sets the last hurt amount.
    #[inline]
    pub fn set_last_hurt(&self, amount: f32) {
        self.last_hurt.store(amount);
    }

    /// Ticks since the entity died. Vanilla: `LivingEntity.deathTime` (L217).
    #[inline]
    pub fn get_death_time(&self) -> i32 {
        self.death_time.load(Ordering::Relaxed)
    }

    /// Increments `death_time` by 1 and returns the new value.
    #[inline]
    pub fn increment_death_time(&self) -> i32 {
        self.death_time.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Entity tick of the last hit from a creditable player.
    #[inline]
    pub fn get_last_hurt_by_player_tick(&self) -> Option<i32> {
        self.last_hurt_by_player_tick.load()
    }

    /// Records a hit from a creditable player.
    #[inline]
    pub fn set_last_hurt_by_player_tick(&self, tick: i32) {
        self.last_hurt_by_player_tick.store(Some(tick));
    }

    /// The player credited with killing this entity, if still online.
    pub fn get_killer(&self) -> Option<Arc<Player>> {
        self.killer.lock().as_ref().and_then(Weak::upgrade)
    }

    /// Credits `player` with the kill.
    pub fn set_killer(&self, player: &Arc<Player>) {
        *self.killer.lock() = Some(Arc::downgrade(player));
    }

    /// The source of the most recent applied hit, if it still exists.
    pub fn get_last_damager(&self) -> Option<Arc<dyn Entity>> {
        self.last_damager.lock().as_ref().and_then(Weak::upgrade)
    }

    /// Records the source of an applied hit. `None` for environmental damage.
    pub fn set_last_damager(&self, source: Option<&Arc<dyn Entity>>) {
        *self.last_damager.lock() = source.map(Arc::downgrade);
    }

    /// Claims the damage pipeline for this entity. Returns `false` if a
    /// request is already in flight.
    #[inline]
    pub(crate) fn begin_resolving_damage(&self) -> bool {
        self.resolving_damage
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Releases the damage pipeline.
    #[inline]
    pub(crate) fn finish_resolving_damage(&self) {
        self.resolving_damage.store(false, Ordering::Release);
    }

    /// Whether the given effect is active.
    pub fn has_effect(&self, effect: MobEffect) -> bool {
        self.effects.lock().has(effect)
    }

    /// Per-tick upkeep: counts down the no-damage window and effect
    /// durations, and advances the death animation.
    pub fn base_tick(&self) {
        if self.get_invulnerable_time() > 0 {
            self.invulnerable_time.fetch_sub(1, Ordering::Relaxed);
        }
        self.effects.lock().tick();
        if self.is_dead() {
            self.increment_death_time();
        }
    }
}
