//! The world: entity registry, game rules and client-facing broadcasts.
//!
//! The combat pipeline only talks to a world through [`WorldService`]. The
//! in-memory [`World`] implements it for the server and for tests, recording
//! every broadcast so callers can inspect what clients would have seen.

use std::mem;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use steel_registry::{GameRuleRef, GameRuleValue, SoundEventRef};
use steel_utils::Identifier;
use steel_utils::entity_events::EntityStatus;
use steel_utils::locks::{SyncMutex, SyncRwLock};
use steel_utils::math::Vector3;
use steel_utils::random::Random;
use steel_utils::random::legacy_random::LegacyRandom;

use crate::entity::Entity;
use crate::entity::item_entity::ItemEntity;
use crate::entity::living_base::DEATH_DURATION;
use crate::item::ItemStack;

/// What the combat pipeline needs from the world it runs in.
pub trait WorldService: Send + Sync {
    /// Plays a sound to everyone near `position`.
    fn play_sound(&self, sound: SoundEventRef, position: Vector3<f64>, volume: f32, pitch: f32);

    /// Sends an entity status (hurt flash, death animation, totem) to clients.
    fn broadcast_entity_event(&self, entity_id: i32, status: EntityStatus);

    /// Spawns `stack` as an item entity near `position`.
    fn drop_item_naturally(&self, position: Vector3<f64>, stack: ItemStack);

    /// Registers a freshly created entity.
    fn add_entity(&self, entity: Arc<dyn Entity>);

    /// Current value of a game rule.
    fn get_game_rule(&self, rule: GameRuleRef) -> GameRuleValue;

    /// Sends a chat message to every player.
    fn broadcast_message(&self, message: &str);

    /// Current value of a boolean game rule. Non-boolean rules read as `false`.
    fn game_rule_bool(&self, rule: GameRuleRef) -> bool {
        self.get_game_rule(rule) == GameRuleValue::Bool(true)
    }
}

/// Something the world sent to its clients.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldBroadcast {
    /// A positioned sound.
    Sound {
        /// The sound event.
        sound: SoundEventRef,
        /// Where it plays.
        position: Vector3<f64>,
        /// Volume.
        volume: f32,
        /// Pitch.
        pitch: f32,
    },
    /// An entity status.
    EntityEvent {
        /// The entity the status applies to.
        entity_id: i32,
        /// The status.
        status: EntityStatus,
    },
    /// A chat message.
    Message(String),
}

/// An in-memory world.
pub struct World {
    entities: SyncRwLock<FxHashMap<i32, Arc<dyn Entity>>>,
    game_rules: SyncRwLock<FxHashMap<Identifier, GameRuleValue>>,
    broadcasts: SyncMutex<Vec<WorldBroadcast>>,
    random: SyncMutex<LegacyRandom>,
}

impl World {
    /// Creates an empty world. `seed` drives item drop scatter.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            entities: SyncRwLock::new(FxHashMap::default()),
            game_rules: SyncRwLock::new(FxHashMap::default()),
            broadcasts: SyncMutex::new(Vec::new()),
            random: SyncMutex::new(LegacyRandom::from_seed(seed)),
        }
    }

    /// Overrides a game rule.
    pub fn set_game_rule(&self, rule: GameRuleRef, value: GameRuleValue) {
        self.game_rules.write().insert(rule.key.clone(), value);
    }

    /// Looks up an entity by network id.
    pub fn get_entity(&self, id: i32) -> Option<Arc<dyn Entity>> {
        self.entities.read().get(&id).cloned()
    }

    /// Every entity currently in the world.
    pub fn entities(&self) -> Vec<Arc<dyn Entity>> {
        self.entities.read().values().cloned().collect()
    }

    /// Entities matching `filter`.
    pub fn entities_where(&self, filter: impl Fn(&dyn Entity) -> bool) -> Vec<Arc<dyn Entity>> {
        self.entities
            .read()
            .values()
            .filter(|entity| filter(entity.as_ref()))
            .cloned()
            .collect()
    }

    /// Number of entities in the world.
    pub fn entity_count(&self) -> usize {
        self.entities.read().len()
    }

    /// Drains everything broadcast since the last call.
    pub fn take_broadcasts(&self) -> Vec<WorldBroadcast> {
        mem::take(&mut *self.broadcasts.lock())
    }

    /// Ticks every entity, then removes discarded entities and living
    /// entities whose death animation has finished.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&self) -> usize {
        let entities = self.entities();
        for entity in &entities {
            entity.tick();
        }

        let mut map = self.entities.write();
        let before = map.len();
        map.retain(|_, entity| {
            if entity.entity_base().is_removed() {
                return false;
            }
            entity.as_living().is_none_or(|living| {
                !living.living_base().is_dead()
                    || living.living_base().get_death_time() < DEATH_DURATION
            })
        });
        let removed = before - map.len();
        drop(map);
        if removed > 0 {
            log::debug!("Removed {removed} entities");
        }
        removed
    }

    fn push(&self, broadcast: WorldBroadcast) {
        self.broadcasts.lock().push(broadcast);
    }
}

impl WorldService for World {
    fn play_sound(&self, sound: SoundEventRef, position: Vector3<f64>, volume: f32, pitch: f32) {
        self.push(WorldBroadcast::Sound {
            sound,
            position,
            volume,
            pitch,
        });
    }

    fn broadcast_entity_event(&self, entity_id: i32, status: EntityStatus) {
        self.push(WorldBroadcast::EntityEvent { entity_id, status });
    }

    fn drop_item_naturally(&self, position: Vector3<f64>, stack: ItemStack) {
        if stack.is_empty() {
            return;
        }
        let offset = {
            let mut random = self.random.lock();
            Vector3::new(
                random.next_f64_between(0.25, 0.75),
                random.next_f64_between(0.25, 0.75),
                random.next_f64_between(0.25, 0.75),
            )
        };
        self.add_entity(Arc::new(ItemEntity::new(position + offset, stack)));
    }

    fn add_entity(&self, entity: Arc<dyn Entity>) {
        log::debug!(
            "Adding {} #{} at {:?}",
            entity.entity_type().key,
            entity.id(),
            entity.position()
        );
        self.entities.write().insert(entity.id(), entity);
    }

    fn get_game_rule(&self, rule: GameRuleRef) -> GameRuleValue {
        self.game_rules
            .read()
            .get(&rule.key)
            .copied()
            .unwrap_or(rule.default_value)
    }

    fn broadcast_message(&self, message: &str) {
        log::info!("{message}");
        self.push(WorldBroadcast::Message(message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use steel_registry::vanilla_game_rules::{DO_MOB_LOOT, KEEP_INVENTORY};

    use super::*;
    use crate::item::items;

    #[test]
    fn test_game_rule_defaults_and_overrides() {
        let world = World::new(0);
        assert!(world.game_rule_bool(DO_MOB_LOOT));
        assert!(!world.game_rule_bool(KEEP_INVENTORY));
        world.set_game_rule(DO_MOB_LOOT, GameRuleValue::Bool(false));
        assert!(!world.game_rule_bool(DO_MOB_LOOT));
    }

    #[test]
    fn test_drop_item_scatter() {
        let world = World::new(7);
        let origin = Vector3::new(10.0, 64.0, -3.0);
        world.drop_item_naturally(origin, ItemStack::new(items::BEEF, 2));
        world.drop_item_naturally(origin, ItemStack::empty());
        let entities = world.entities();
        assert_eq!(entities.len(), 1);
        let offset = entities[0].position() - origin;
        for axis in [offset.x, offset.y, offset.z] {
            assert!((0.25..0.75).contains(&axis), "offset {axis} out of range");
        }
        let item = entities[0].as_any().downcast_ref::<ItemEntity>();
        assert!(item.is_some_and(|item| item.stack().is(&items::BEEF)));
    }

    #[test]
    fn test_tick_removes_discarded() {
        let world = World::new(0);
        let item: Arc<dyn Entity> =
            Arc::new(ItemEntity::new(Vector3::ZERO, ItemStack::new(items::BEEF, 1)));
        world.add_entity(item.clone());
        assert_eq!(world.tick(), 0);
        item.entity_base().discard();
        assert_eq!(world.tick(), 1);
        assert_eq!(world.entity_count(), 0);
    }
}
