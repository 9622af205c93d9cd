//! Mob loot and experience drops.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use steel_registry::vanilla_entity_types::{BLAZE, COW, MAGMA_CUBE, SLIME, WOLF, ZOMBIE};
use steel_registry::vanilla_game_rules::DO_MOB_LOOT;
use steel_utils::Identifier;
use steel_utils::math::Vector3;
use steel_utils::random::Random;
use thiserror::Error;

use crate::combat::CombatContext;
use crate::entity::LivingEntity;
use crate::entity::experience_orb::ExperienceOrb;
use crate::event::EntityDeathEvent;
use crate::item::{ItemStack, items};

/// What a loot table rolled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LootData {
    /// Items to drop, in order.
    pub items: Vec<ItemStack>,
    /// Experience to release.
    pub experience: i32,
}

/// A loot table that cannot be rolled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LootError {
    /// A count range with `min > max`.
    #[error("Invalid range {min}..={max} in loot table {table}")]
    InvalidRange {
        /// The broken table.
        table: Identifier,
        /// Lower bound.
        min: i32,
        /// Upper bound.
        max: i32,
    },
}

/// Rolls loot for dying entities.
pub trait LootGenerator: Send + Sync {
    /// Loot for `entity`. Entities without a table get nothing.
    fn generate(&self, entity: &dyn LivingEntity, random: &mut dyn Random) -> Result<LootData, LootError>;
}

/// One possible drop.
#[derive(Clone, Debug)]
pub struct LootEntry {
    /// The dropped item.
    pub item: Identifier,
    /// Minimum count, may be 0.
    pub min: i32,
    /// Maximum count.
    pub max: i32,
}

impl LootEntry {
    /// A drop of `min..=max` items.
    #[must_use]
    pub const fn new(item: Identifier, min: i32, max: i32) -> Self {
        Self { item, min, max }
    }
}

/// How much experience a table releases.
#[derive(Clone, Copy, Debug)]
pub enum ExperienceReward {
    /// Uniform in `min..=max`.
    Range(i32, i32),
    /// Equal to the slime size.
    SlimeSize,
}

/// Drops and experience for one entity type.
#[derive(Clone, Debug)]
pub struct LootTable {
    /// Possible drops.
    pub entries: Vec<LootEntry>,
    /// Experience reward.
    pub experience: ExperienceReward,
}

/// Loot tables keyed by entity type.
#[derive(Clone, Debug, Default)]
pub struct LootTables {
    tables: FxHashMap<Identifier, LootTable>,
}

impl LootTables {
    /// No tables: every entity drops nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tables for the vanilla mobs this crate knows about.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut tables = Self::empty();
        tables.insert(
            ZOMBIE.key.clone(),
            LootTable {
                entries: vec![LootEntry::new(items::ROTTEN_FLESH, 0, 2)],
                experience: ExperienceReward::Range(5, 5),
            },
        );
        tables.insert(
            COW.key.clone(),
            LootTable {
                entries: vec![
                    LootEntry::new(items::LEATHER, 0, 2),
                    LootEntry::new(items::BEEF, 1, 3),
                ],
                experience: ExperienceReward::Range(1, 3),
            },
        );
        tables.insert(
            SLIME.key.clone(),
            LootTable {
                entries: vec![LootEntry::new(items::SLIME_BALL, 0, 2)],
                experience: ExperienceReward::SlimeSize,
            },
        );
        tables.insert(
            MAGMA_CUBE.key.clone(),
            LootTable {
                entries: vec![LootEntry::new(items::MAGMA_CREAM, 0, 1)],
                experience: ExperienceReward::SlimeSize,
            },
        );
        tables.insert(
            WOLF.key.clone(),
            LootTable {
                entries: Vec::new(),
                experience: ExperienceReward::Range(1, 3),
            },
        );
        tables.insert(
            BLAZE.key.clone(),
            LootTable {
                entries: vec![LootEntry::new(items::BLAZE_ROD, 0, 1)],
                experience: ExperienceReward::Range(10, 10),
            },
        );
        tables
    }

    /// Adds or replaces the table for an entity type key.
    pub fn insert(&mut self, entity_type: Identifier, table: LootTable) {
        self.tables.insert(entity_type, table);
    }
}

fn roll(
    table: &Identifier,
    min: i32,
    max: i32,
    random: &mut dyn Random,
) -> Result<i32, LootError> {
    if min > max {
        return Err(LootError::InvalidRange {
            table: table.clone(),
            min,
            max,
        });
    }
    Ok(random.next_i32_between_inclusive(min, max))
}

impl LootGenerator for LootTables {
    fn generate(&self, entity: &dyn LivingEntity, random: &mut dyn Random) -> Result<LootData, LootError> {
        let key = &entity.entity_type().key;
        let Some(table) = self.tables.get(key) else {
            return Ok(LootData::default());
        };

        let mut items = Vec::with_capacity(table.entries.len());
        for entry in &table.entries {
            let count = roll(key, entry.min, entry.max, random)?;
            if count > 0 {
                items.push(ItemStack::new(entry.item.clone(), count));
            }
        }

        let experience = match table.experience {
            ExperienceReward::Range(min, max) => roll(key, min, max, random)?,
            ExperienceReward::SlimeSize => entity.as_mob().map_or(1, |mob| mob.size()),
        };

        Ok(LootData { items, experience })
    }
}

/// Whether a creditable player hurt `entity` within the last `window` ticks.
pub fn recently_hurt_by_player(entity: &dyn LivingEntity, window: i32) -> bool {
    entity
        .living_base()
        .get_last_hurt_by_player_tick()
        .is_some_and(|tick| entity.tick_count() - tick <= window)
}

/// Rolls loot, releases experience orbs when a player earned them, fires the
/// death event and drops the items that survive it.
///
/// A failing loot generator is logged and treated as empty loot.
pub fn drop_loot_and_experience(entity: &dyn LivingEntity, ctx: &CombatContext<'_>) {
    let mut drops = Vec::new();
    let mut dropped_exp = 0;

    if ctx.world.game_rule_bool(DO_MOB_LOOT) {
        let loot = {
            let mut random = ctx.random.lock();
            ctx.loot.generate(entity, &mut *random)
        }
        .unwrap_or_else(|err| {
            log::warn!("Loot generation failed for {}: {err}", entity.name());
            LootData::default()
        });

        drops = loot.items;
        if loot.experience > 0
            && recently_hurt_by_player(entity, ctx.config.player_damage_window)
        {
            dropped_exp = loot.experience;
            spawn_experience_orbs(entity, loot.experience, ctx);
        }
    }

    let event = ctx.events.entity_death(EntityDeathEvent {
        entity_id: entity.id(),
        entity_type: entity.entity_type(),
        drops,
        dropped_exp,
        cancelled: false,
    });
    if event.cancelled {
        log::debug!("Death drops of {} cancelled", entity.name());
        return;
    }

    let position = entity.position();
    for stack in event.drops {
        ctx.world.drop_item_naturally(position, stack);
    }
}

/// Spawns orbs worth `total` around the centre of the entity's block.
fn spawn_experience_orbs(entity: &dyn LivingEntity, total: i32, ctx: &CombatContext<'_>) {
    let position = entity.position();
    let block = position.block_coords();
    let source = Some(entity.uuid());
    let trigger = entity
        .living_base()
        .get_last_damager()
        .map(|damager| damager.uuid());

    for value in ctx.experience.split(total) {
        let (dx, dz) = {
            let mut random = ctx.random.lock();
            (random.next_f64() - 0.5, random.next_f64() - 0.5)
        };
        let orb_position = Vector3::new(
            f64::from(block.x) + 0.5 + dx,
            position.y,
            f64::from(block.z) + 0.5 + dz,
        );
        ctx.world
            .add_entity(Arc::new(ExperienceOrb::new(orb_position, value, source, trigger)));
    }
}
