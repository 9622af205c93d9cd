//! Death handling: sounds, player drops and messages, mob loot and species hooks.

use steel_registry::vanilla_game_rules::KEEP_INVENTORY;
use steel_utils::entity_events::EntityStatus;

use crate::combat::loot::drop_loot_and_experience;
use crate::combat::{CombatContext, play_entity_sound};
use crate::entity::{Entity, LivingEntity};
use crate::event::PlayerDeathEvent;
use crate::player::Player;
use crate::stats::Stat;

/// Runs once per death, right after the entity was flagged dead.
pub fn die(entity: &dyn LivingEntity, ctx: &CombatContext<'_>) {
    log::debug!("{} #{} died", entity.name(), entity.id());
    play_entity_sound(entity, entity.death_sound(), ctx);
    ctx.world
        .broadcast_entity_event(entity.id(), EntityStatus::Death);

    if let Some(player) = entity.as_player() {
        player_death(player, ctx);
        return;
    }

    drop_loot_and_experience(entity, ctx);
    if let Some(hook) = ctx.death_rules.get(entity.entity_type()) {
        hook(entity, ctx);
    }
}

/// Drops the inventory (unless `keepInventory`), announces the death and
/// counts it.
///
/// The event's `cancelled` flag is not consulted: the message is broadcast
/// and the items dropped regardless.
pub fn player_death(player: &Player, ctx: &CombatContext<'_>) {
    let keep_inventory = ctx.world.game_rule_bool(KEEP_INVENTORY);
    let drops = if keep_inventory {
        Vec::new()
    } else {
        player.inventory.lock().take_non_empty()
    };

    let event = ctx.events.player_death(PlayerDeathEvent {
        player_id: player.id(),
        drops,
        death_message: format!("{} died.", player.display_name()),
        cancelled: false,
    });
    ctx.world.broadcast_message(&event.death_message);

    if !keep_inventory {
        let position = player.position();
        for stack in event.drops {
            ctx.world.drop_item_naturally(position, stack);
        }
    }

    player.clear_shoulder_entities();
    ctx.stats.increment(player, Stat::Deaths);
}
