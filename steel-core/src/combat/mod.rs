//! The damage → health → death pipeline.
//!
//! Entry point is [`hurt::hurt`] for damage requests and
//! [`health::set_health`] for direct health changes. Everything the pipeline
//! reports into (world, events, scoreboard, loot, statistics) is reached
//! through the [`CombatContext`] passed down the call chain.

pub mod armor;
pub mod attribution;
pub mod death;
pub mod experience;
pub mod health;
pub mod hurt;
pub mod invulnerability;
pub mod loot;
pub mod species;

use steel_registry::SoundEventRef;
use steel_utils::locks::SyncMutex;
use steel_utils::random::Random;
use steel_utils::random::legacy_random::LegacyRandom;

use crate::combat::experience::ExperienceSplitter;
use crate::combat::loot::LootGenerator;
use crate::combat::species::SpeciesDeathRules;
use crate::config::CombatConfig;
use crate::entity::LivingEntity;
use crate::entity::attributes::AttributeProvider;
use crate::event::EventDispatcher;
use crate::scoreboard::ScoreboardService;
use crate::stats::StatisticTracker;
use crate::world::WorldService;

/// Collaborators of one pipeline run.
#[derive(Clone, Copy)]
pub struct CombatContext<'a> {
    /// Tuning values.
    pub config: &'a CombatConfig,
    /// Sounds, broadcasts, spawning and game rules.
    pub world: &'a dyn WorldService,
    /// Listener dispatch.
    pub events: &'a dyn EventDispatcher,
    /// Armor and toughness lookup.
    pub attributes: &'a dyn AttributeProvider,
    /// Health objectives.
    pub scoreboard: &'a dyn ScoreboardService,
    /// Mob drops.
    pub loot: &'a dyn LootGenerator,
    /// Experience orb sizing.
    pub experience: &'a dyn ExperienceSplitter,
    /// Kill and death statistics.
    pub stats: &'a dyn StatisticTracker,
    /// Per-species death behaviour.
    pub death_rules: &'a SpeciesDeathRules,
    /// Gameplay rolls: pitch, scatter, split counts, loot.
    pub random: &'a SyncMutex<LegacyRandom>,
}

/// Plays `sound` at `entity` unless the entity is silent. Pitch varies by up
/// to ±0.2 around 1.
pub fn play_entity_sound(
    entity: &dyn LivingEntity,
    sound: Option<SoundEventRef>,
    ctx: &CombatContext<'_>,
) {
    let Some(sound) = sound else {
        return;
    };
    if entity.entity_base().is_silent() {
        return;
    }
    let pitch = {
        let mut random = ctx.random.lock();
        (random.next_f32() - random.next_f32()) * 0.2 + 1.0
    };
    ctx.world
        .play_sound(sound, entity.position(), ctx.config.sound_volume, pitch);
}
