//! Entities and the shared state every entity carries.
//!
//! Every entity embeds an [`EntityBase`] and exposes it through
//! [`Entity::entity_base`]. Living entities additionally embed a
//! [`LivingEntityBase`] exposed through [`LivingEntity::living_base`].

pub mod attributes;
pub mod damage;
pub mod effects;
pub mod experience_orb;
pub mod item_entity;
pub mod living_base;
pub mod mob;
pub mod primed_tnt;
pub mod projectile;

use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crossbeam::atomic::AtomicCell;
use steel_registry::{EntityTypeRef, SoundEventRef};
use steel_utils::locks::SyncMutex;
use steel_utils::math::Vector3;
use uuid::Uuid;

use crate::combat::attribution::Attribution;
use crate::entity::damage::DamageCause;
use crate::entity::living_base::LivingEntityBase;
use crate::entity::mob::Mob;
use crate::player::Player;

static ENTITY_COUNTER: AtomicI32 = AtomicI32::new(1);

/// Allocates a new network-unique entity id.
pub fn next_entity_id() -> i32 {
    ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Fields shared by every entity.
pub struct EntityBase {
    /// Network id, unique for the lifetime of the process.
    pub id: i32,
    /// Persistent identity.
    pub uuid: Uuid,
    /// The entity's type.
    pub entity_type: EntityTypeRef,
    position: AtomicCell<Vector3<f64>>,
    velocity: AtomicCell<Vector3<f64>>,
    custom_name: SyncMutex<Option<String>>,
    silent: AtomicBool,
    invulnerable: AtomicBool,
    removed: AtomicBool,
    /// Ticks this entity has been alive. Vanilla: `Entity.tickCount`.
    tick_count: AtomicI32,
}

impl EntityBase {
    /// Creates the base for a fresh entity at `position`.
    #[must_use]
    pub fn new(entity_type: EntityTypeRef, position: Vector3<f64>) -> Self {
        Self::with_uuid(entity_type, position, Uuid::new_v4())
    }

    /// Creates the base with a known identity (players keep their profile id).
    #[must_use]
    pub fn with_uuid(entity_type: EntityTypeRef, position: Vector3<f64>, uuid: Uuid) -> Self {
        Self {
            id: next_entity_id(),
            uuid,
            entity_type,
            position: AtomicCell::new(position),
            velocity: AtomicCell::new(Vector3::ZERO),
            custom_name: SyncMutex::new(None),
            silent: AtomicBool::new(false),
            invulnerable: AtomicBool::new(false),
            removed: AtomicBool::new(false),
            tick_count: AtomicI32::new(0),
        }
    }

    /// Current position of the entity's feet.
    #[inline]
    pub fn position(&self) -> Vector3<f64> {
        self.position.load()
    }

    /// Moves the entity.
    #[inline]
    pub fn set_position(&self, position: Vector3<f64>) {
        self.position.store(position);
    }

    /// Current velocity in blocks per tick.
    #[inline]
    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity.load()
    }

    /// Sets the velocity.
    #[inline]
    pub fn set_velocity(&self, velocity: Vector3<f64>) {
        self.velocity.store(velocity);
    }

    /// The custom name, if one was given.
    pub fn custom_name(&self) -> Option<String> {
        self.custom_name.lock().clone()
    }

    /// Sets or clears the custom name.
    pub fn set_custom_name(&self, name: Option<String>) {
        *self.custom_name.lock() = name;
    }

    /// Whether the entity makes no sounds.
    #[inline]
    pub fn is_silent(&self) -> bool {
        self.silent.load(Ordering::Relaxed)
    }

    /// Sets the silent flag.
    #[inline]
    pub fn set_silent(&self, silent: bool) {
        self.silent.store(silent, Ordering::Relaxed);
    }

    /// Whether the entity ignores all damage.
    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable.load(Ordering::Relaxed)
    }

    /// Sets the global invulnerability flag.
    #[inline]
    pub fn set_invulnerable(&self, invulnerable: bool) {
        self.invulnerable.store(invulnerable, Ordering::Relaxed);
    }

    /// Whether the entity has been removed from its world.
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::Relaxed)
    }

    /// Flags the entity for removal on the next world tick.
    #[inline]
    pub fn discard(&self) {
        self.removed.store(true, Ordering::Relaxed);
    }

    /// Ticks lived.
    #[inline]
    pub fn tick_count(&self) -> i32 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Increments the tick counter and returns the new value.
    #[inline]
    pub fn increment_tick_count(&self) -> i32 {
        self.tick_count.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Anything that lives in a world.
pub trait Entity: Send + Sync {
    /// Shared entity fields.
    fn entity_base(&self) -> &EntityBase;

    /// Used by callers that need the concrete type back.
    fn as_any(&self) -> &dyn Any;

    /// Network id.
    fn id(&self) -> i32 {
        self.entity_base().id
    }

    /// Persistent identity.
    fn uuid(&self) -> Uuid {
        self.entity_base().uuid
    }

    /// The entity's type.
    fn entity_type(&self) -> EntityTypeRef {
        self.entity_base().entity_type
    }

    /// Position of the entity's feet.
    fn position(&self) -> Vector3<f64> {
        self.entity_base().position()
    }

    /// Position of the entity's eyes.
    fn eye_position(&self) -> Vector3<f64> {
        self.position() + Vector3::new(0.0, self.entity_type().eye_height, 0.0)
    }

    /// Velocity in blocks per tick.
    fn velocity(&self) -> Vector3<f64> {
        self.entity_base().velocity()
    }

    /// Sets the velocity.
    fn set_velocity(&self, velocity: Vector3<f64>) {
        self.entity_base().set_velocity(velocity);
    }

    /// The custom name, if one was given.
    fn custom_name(&self) -> Option<String> {
        self.entity_base().custom_name()
    }

    /// The name used for scoreboards and messages: the custom name if set,
    /// otherwise the type name.
    fn name(&self) -> String {
        self.custom_name()
            .unwrap_or_else(|| self.entity_type().key.path.to_string())
    }

    /// Ticks lived.
    fn tick_count(&self) -> i32 {
        self.entity_base().tick_count()
    }

    /// Which player, if any, this entity acts on behalf of when it deals damage.
    fn attribution(&self) -> Attribution {
        Attribution::None
    }

    /// Whether this entity is a fireball-style projectile.
    fn is_fireball(&self) -> bool {
        self.entity_type().fireball
    }

    /// Per-tick upkeep.
    fn tick(&self) {
        self.entity_base().increment_tick_count();
    }

    /// Returns this entity as a living entity, if it is one.
    fn as_living(&self) -> Option<&dyn LivingEntity> {
        None
    }
}

/// An entity with health that can be hurt and die.
pub trait LivingEntity: Entity {
    /// Shared living entity fields.
    fn living_base(&self) -> &LivingEntityBase;

    /// Cause-specific immunity. Fire-immune types ignore fire, lava and hot floors.
    fn can_take_damage(&self, cause: DamageCause) -> bool {
        !(self.entity_type().fire_immune && cause.is_fire())
    }

    /// Sound played when hurt.
    fn hurt_sound(&self) -> Option<SoundEventRef> {
        self.entity_type().hurt_sound
    }

    /// Sound played on death.
    fn death_sound(&self) -> Option<SoundEventRef> {
        self.entity_type().death_sound
    }

    /// Whether a totem of undying is held in either hand.
    fn holds_totem(&self) -> bool {
        false
    }

    /// Removes one held totem of undying.
    fn consume_totem(&self) {}

    /// Returns this entity as a player, if it is one.
    fn as_player(&self) -> Option<&Player> {
        None
    }

    /// Returns this entity as a mob, if it is one.
    fn as_mob(&self) -> Option<&Mob> {
        None
    }
}
