//! This module contains the `Server` struct, which owns the world and every
//! service the combat pipeline reports into, and drives the tick loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use steel_registry::EntityTypeRef;
use steel_utils::Identifier;
use steel_utils::locks::SyncMutex;
use steel_utils::math::Vector3;
use steel_utils::random::legacy_random::LegacyRandom;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::behavior::BlockBehaviors;
use crate::combat::CombatContext;
use crate::combat::experience::VanillaExperienceSplitter;
use crate::combat::hurt::{HurtOutcome, hurt};
use crate::combat::loot::LootTables;
use crate::combat::species::SpeciesDeathRules;
use crate::config::SteelConfig;
use crate::entity::LivingEntity;
use crate::entity::attributes::EntityAttributes;
use crate::entity::damage::DamageRequest;
use crate::entity::mob::Mob;
use crate::event::EventDispatcher;
use crate::player::{GameProfile, Player};
use crate::scoreboard::Scoreboard;
use crate::stats::ServerStatsCounter;
use crate::world::{World, WorldService};

/// Ticks slower than this are logged.
const SLOW_TICK: Duration = Duration::from_millis(50);

/// The main server struct.
pub struct Server {
    /// The configuration the server was started with.
    pub config: SteelConfig,
    /// The cancellation token for graceful shutdown.
    pub cancel_token: CancellationToken,
    /// The only world.
    pub world: World,
    /// The main scoreboard.
    pub scoreboard: Scoreboard,
    /// Player statistics.
    pub stats: ServerStatsCounter,
    /// Mob loot tables.
    pub loot_tables: LootTables,
    /// Per-species death hooks.
    pub death_rules: SpeciesDeathRules,
    /// Block behaviours.
    pub block_behaviors: BlockBehaviors,
    splitter: VanillaExperienceSplitter,
    attributes: EntityAttributes,
    events: Arc<dyn EventDispatcher>,
    random: SyncMutex<LegacyRandom>,
    tick_count: AtomicU64,
}

impl Server {
    /// Creates a server with vanilla loot, death hooks and block behaviours.
    #[must_use]
    pub fn new(
        config: SteelConfig,
        events: Arc<dyn EventDispatcher>,
        cancel_token: CancellationToken,
    ) -> Self {
        let seed = config.numeric_seed();
        log::info!("Starting with seed {seed}");
        Self {
            cancel_token,
            world: World::new(seed),
            scoreboard: Scoreboard::new(),
            stats: ServerStatsCounter::new(),
            loot_tables: LootTables::vanilla(),
            death_rules: SpeciesDeathRules::vanilla(),
            block_behaviors: BlockBehaviors::vanilla(),
            splitter: VanillaExperienceSplitter,
            attributes: EntityAttributes,
            events,
            random: SyncMutex::new(LegacyRandom::from_seed(seed.rotate_left(17))),
            tick_count: AtomicU64::new(0),
            config,
        }
    }

    /// Collaborators for one pipeline run.
    #[must_use]
    pub fn combat_context(&self) -> CombatContext<'_> {
        CombatContext {
            config: &self.config.combat,
            world: &self.world,
            events: self.events.as_ref(),
            attributes: &self.attributes,
            scoreboard: &self.scoreboard,
            loot: &self.loot_tables,
            experience: &self.splitter,
            stats: &self.stats,
            death_rules: &self.death_rules,
            random: &self.random,
        }
    }

    /// Spawns a survival player.
    pub fn spawn_player(&self, gameprofile: GameProfile, position: Vector3<f64>) -> Arc<Player> {
        let player = Player::new(gameprofile, position);
        player
            .living_base()
            .set_max_invulnerable_time(self.config.combat.invulnerability_ticks);
        log::info!("{} joined the game", player.gameprofile.name);
        self.world.add_entity(player.clone());
        player
    }

    /// Spawns a mob at full health.
    pub fn spawn_mob(&self, entity_type: EntityTypeRef, position: Vector3<f64>) -> Arc<Mob> {
        let mob = Arc::new(Mob::new(entity_type, position));
        mob.living_base()
            .set_max_invulnerable_time(self.config.combat.invulnerability_ticks);
        self.world.add_entity(mob.clone());
        mob
    }

    /// Applies a damage request through the combat pipeline.
    pub fn hurt(&self, entity: &dyn LivingEntity, request: &DamageRequest) -> HurtOutcome {
        hurt(entity, request, &self.combat_context())
    }

    /// Runs the step behaviour of `block` for an entity standing on it.
    pub fn step_on(&self, block: &Identifier, entity: &dyn LivingEntity) {
        self.block_behaviors
            .step_on(block, entity, &self.combat_context());
    }

    /// Ticks completed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Advances the simulation by one tick.
    #[tracing::instrument(level = "trace", skip(self), name = "tick")]
    pub fn tick(&self) -> u64 {
        self.world.tick();
        self.tick_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Runs the tick loop at `config.tick_rate` until the cancel token fires.
    /// `on_tick` runs after every tick.
    pub async fn run(&self, mut on_tick: impl FnMut(&Self, u64)) {
        let tick_rate = if self.config.tick_rate > 0.0 {
            self.config.tick_rate
        } else {
            20.0
        };
        let tick_duration = Duration::from_secs_f64(1.0 / f64::from(tick_rate));
        let mut next_tick_time = Instant::now();

        loop {
            if self.cancel_token.is_cancelled() {
                break;
            }

            let now = Instant::now();
            if now < next_tick_time {
                tokio::select! {
                    () = self.cancel_token.cancelled() => break,
                    () = sleep(next_tick_time - now) => {}
                }
            }
            next_tick_time += tick_duration;

            let tick_start = Instant::now();
            let tick_count = self.tick();
            on_tick(self, tick_count);

            let elapsed = tick_start.elapsed();
            if elapsed >= SLOW_TICK {
                tracing::warn!(
                    ?elapsed,
                    tick_count,
                    entities = self.world.entity_count(),
                    "Server tick slow"
                );
            }
        }
        log::info!("Tick loop stopped after {} ticks", self.tick_count());
    }
}
