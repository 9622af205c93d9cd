//! Shared fixtures for the combat integration tests.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::atomic::AtomicCell;
use steel_core::config::SteelConfig;
use steel_core::entity::experience_orb::ExperienceOrb;
use steel_core::entity::item_entity::ItemEntity;
use steel_core::entity::{Entity, LivingEntity};
use steel_core::event::{
    EntityDamageEvent, EntityDeathEvent, EntityResurrectEvent, EventDispatcher, PlayerDeathEvent,
    SlimeSplitEvent,
};
use steel_core::item::ItemStack;
use steel_core::player::{GameProfile, Player};
use steel_core::server::Server;
use steel_utils::locks::SyncMutex;
use steel_utils::math::Vector3;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// A dispatcher whose listeners are scripted through flags and which records
/// every event it sees.
#[derive(Default)]
pub struct ScriptedEvents {
    pub cancel_damage: AtomicBool,
    pub cancel_death: AtomicBool,
    pub cancel_player_death: AtomicBool,
    pub cancel_split: AtomicBool,
    pub cancel_resurrect: AtomicBool,
    pub final_damage: AtomicCell<Option<f32>>,
    pub split_count: AtomicCell<Option<i32>>,
    pub death_message: SyncMutex<Option<String>>,
    pub damage_events: SyncMutex<Vec<EntityDamageEvent>>,
    pub death_events: SyncMutex<Vec<EntityDeathEvent>>,
    pub player_death_events: SyncMutex<Vec<PlayerDeathEvent>>,
    pub split_events: SyncMutex<Vec<SlimeSplitEvent>>,
    pub resurrect_events: SyncMutex<Vec<EntityResurrectEvent>>,
}

impl ScriptedEvents {
    pub fn damage_count(&self) -> usize {
        self.damage_events.lock().len()
    }

    pub fn death_count(&self) -> usize {
        self.death_events.lock().len()
    }
}

impl EventDispatcher for ScriptedEvents {
    fn entity_damage(&self, mut event: EntityDamageEvent) -> EntityDamageEvent {
        if let Some(damage) = self.final_damage.load() {
            event.final_damage = damage;
        }
        event.cancelled = self.cancel_damage.load(Ordering::Relaxed);
        self.damage_events.lock().push(event.clone());
        event
    }

    fn entity_death(&self, mut event: EntityDeathEvent) -> EntityDeathEvent {
        event.cancelled = self.cancel_death.load(Ordering::Relaxed);
        self.death_events.lock().push(event.clone());
        event
    }

    fn player_death(&self, mut event: PlayerDeathEvent) -> PlayerDeathEvent {
        if let Some(message) = self.death_message.lock().clone() {
            event.death_message = message;
        }
        event.cancelled = self.cancel_player_death.load(Ordering::Relaxed);
        self.player_death_events.lock().push(event.clone());
        event
    }

    fn slime_split(&self, mut event: SlimeSplitEvent) -> SlimeSplitEvent {
        if let Some(count) = self.split_count.load() {
            event.count = count;
        }
        event.cancelled = self.cancel_split.load(Ordering::Relaxed);
        self.split_events.lock().push(event.clone());
        event
    }

    fn entity_resurrect(&self, mut event: EntityResurrectEvent) -> EntityResurrectEvent {
        event.cancelled = self.cancel_resurrect.load(Ordering::Relaxed);
        self.resurrect_events.lock().push(event.clone());
        event
    }
}

pub struct Harness {
    pub server: Server,
    pub events: Arc<ScriptedEvents>,
}

pub fn config() -> SteelConfig {
    SteelConfig {
        seed: "42".to_string(),
        ..SteelConfig::default()
    }
}

pub fn harness() -> Harness {
    harness_with(|_| {})
}

pub fn harness_with(configure: impl FnOnce(&mut Server)) -> Harness {
    let events = Arc::new(ScriptedEvents::default());
    let mut server = Server::new(config(), events.clone(), CancellationToken::new());
    configure(&mut server);
    Harness { server, events }
}

impl Harness {
    pub fn player(&self, name: &str) -> Arc<Player> {
        self.server
            .spawn_player(GameProfile::offline(name), Vector3::new(0.5, 64.0, 0.5))
    }
}

/// Ends the no-damage window so the next request is not gated.
pub fn reset_window(entity: &dyn LivingEntity) {
    entity.living_base().set_invulnerable_time(0);
}

/// Ticks a single entity `ticks` times.
pub fn advance(entity: &dyn Entity, ticks: i32) {
    for _ in 0..ticks {
        entity.tick();
    }
}

pub struct OrbInfo {
    pub position: Vector3<f64>,
    pub value: i32,
    pub source: Option<Uuid>,
    pub trigger: Option<Uuid>,
}

pub fn orbs(server: &Server) -> Vec<OrbInfo> {
    server
        .world
        .entities()
        .iter()
        .filter_map(|entity| {
            entity
                .as_any()
                .downcast_ref::<ExperienceOrb>()
                .map(|orb| OrbInfo {
                    position: orb.position(),
                    value: orb.value(),
                    source: orb.source(),
                    trigger: orb.trigger(),
                })
        })
        .collect()
}

pub fn dropped_items(server: &Server) -> Vec<ItemStack> {
    server
        .world
        .entities()
        .iter()
        .filter_map(|entity| {
            entity
                .as_any()
                .downcast_ref::<ItemEntity>()
                .map(|item| item.stack().clone())
        })
        .collect()
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
