//! An event dispatcher that narrates the arena instead of changing anything.

use steel_core::event::{
    EntityDamageEvent, EntityDeathEvent, EntityResurrectEvent, EventDispatcher, PlayerDeathEvent,
    SlimeSplitEvent,
};

/// Logs every event and returns it unchanged.
pub struct LoggingEvents;

impl EventDispatcher for LoggingEvents {
    fn entity_damage(&self, event: EntityDamageEvent) -> EntityDamageEvent {
        log::debug!(
            "{} #{} takes {:.2} ({:?})",
            event.entity_type.key,
            event.entity_id,
            event.final_damage,
            event.cause
        );
        event
    }

    fn entity_death(&self, event: EntityDeathEvent) -> EntityDeathEvent {
        log::info!(
            "{} #{} died, dropping {} stacks and {} xp",
            event.entity_type.key,
            event.entity_id,
            event.drops.len(),
            event.dropped_exp
        );
        event
    }

    fn player_death(&self, event: PlayerDeathEvent) -> PlayerDeathEvent {
        log::info!("Player #{} died with {} stacks", event.player_id, event.drops.len());
        event
    }

    fn slime_split(&self, event: SlimeSplitEvent) -> SlimeSplitEvent {
        log::info!("#{} splits into {}", event.entity_id, event.count);
        event
    }

    fn entity_resurrect(&self, event: EntityResurrectEvent) -> EntityResurrectEvent {
        log::info!("#{} cheats death", event.entity_id);
        event
    }
}
