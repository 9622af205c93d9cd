//! Vanilla game rules consulted by the death pipeline.

use steel_utils::Identifier;

use crate::game_rules::{GameRule, GameRuleValue};

/// Players keep their inventory on death.
pub static KEEP_INVENTORY: &GameRule = &GameRule {
    key: Identifier::vanilla_static("keep_inventory"),
    default_value: GameRuleValue::Bool(false),
};

/// Mobs drop loot and experience on death.
pub static DO_MOB_LOOT: &GameRule = &GameRule {
    key: Identifier::vanilla_static("do_mob_loot"),
    default_value: GameRuleValue::Bool(true),
};

/// All game rules known to the registry.
pub static ALL: &[&GameRule] = &[KEEP_INVENTORY, DO_MOB_LOOT];
