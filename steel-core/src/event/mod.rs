//! Cancellable gameplay events and the dispatcher seam listeners plug into.
//!
//! Events are plain values. The pipeline builds one, hands it to the
//! [`EventDispatcher`] and continues with whatever comes back, so a listener
//! edits an event by returning a modified copy. How listeners are registered
//! is up to the dispatcher implementation.

use steel_registry::EntityTypeRef;

use crate::entity::damage::DamageCause;
use crate::item::ItemStack;

/// Fired before damage is applied to a living entity.
#[derive(Clone, Debug)]
pub struct EntityDamageEvent {
    /// The victim.
    pub entity_id: i32,
    /// The victim's type.
    pub entity_type: EntityTypeRef,
    /// Why the damage happens.
    pub cause: DamageCause,
    /// Id of the entity dealing the damage, if any.
    pub source_id: Option<i32>,
    /// Damage after armor. Drives knockback strength.
    pub damage: f32,
    /// Damage that will be subtracted from health.
    pub final_damage: f32,
    /// Stops the damage when set.
    pub cancelled: bool,
}

impl EntityDamageEvent {
    /// Sets both the base and final damage.
    pub const fn set_damage(&mut self, damage: f32) {
        self.damage = damage;
        self.final_damage = damage;
    }
}

/// Fired when a non-player living entity dies.
#[derive(Clone, Debug)]
pub struct EntityDeathEvent {
    /// The entity that died.
    pub entity_id: i32,
    /// Its type.
    pub entity_type: EntityTypeRef,
    /// Items dropped at the death location, in order.
    pub drops: Vec<ItemStack>,
    /// Experience released as orbs.
    pub dropped_exp: i32,
    /// Suppresses the item drops when set.
    pub cancelled: bool,
}

/// Fired when a player dies.
#[derive(Clone, Debug)]
pub struct PlayerDeathEvent {
    /// The player that died.
    pub player_id: i32,
    /// Items dropped at the death location. Empty with `keepInventory`.
    pub drops: Vec<ItemStack>,
    /// Broadcast to every player.
    pub death_message: String,
    /// Carried for listeners. Death handling continues either way.
    pub cancelled: bool,
}

/// Fired when a large slime dies and is about to split.
#[derive(Clone, Debug)]
pub struct SlimeSplitEvent {
    /// The dying slime.
    pub entity_id: i32,
    /// Number of offspring.
    pub count: i32,
    /// Prevents the split when set.
    pub cancelled: bool,
}

/// Fired when a totem of undying is about to save an entity.
#[derive(Clone, Debug)]
pub struct EntityResurrectEvent {
    /// The entity being saved.
    pub entity_id: i32,
    /// Lets the entity die when set.
    pub cancelled: bool,
}

/// Delivers events to listeners and returns the (possibly edited) event.
///
/// Every method defaults to passing the event through untouched, so an
/// implementation only overrides the events it listens to.
pub trait EventDispatcher: Send + Sync {
    /// See [`EntityDamageEvent`].
    fn entity_damage(&self, event: EntityDamageEvent) -> EntityDamageEvent {
        event
    }

    /// See [`EntityDeathEvent`].
    fn entity_death(&self, event: EntityDeathEvent) -> EntityDeathEvent {
        event
    }

    /// See [`PlayerDeathEvent`].
    fn player_death(&self, event: PlayerDeathEvent) -> PlayerDeathEvent {
        event
    }

    /// See [`SlimeSplitEvent`].
    fn slime_split(&self, event: SlimeSplitEvent) -> SlimeSplitEvent {
        event
    }

    /// See [`EntityResurrectEvent`].
    fn entity_resurrect(&self, event: EntityResurrectEvent) -> EntityResurrectEvent {
        event
    }
}

/// A dispatcher with no listeners.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoListeners;

impl EventDispatcher for NoListeners {}
