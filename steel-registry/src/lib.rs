//! Static vanilla registry data used by the simulation: entity types, sound
//! events and game rules.
//!
//! Entries are `'static` and compared by pointer or key; nothing here is
//! mutable at runtime.

pub mod entity_type;
pub mod game_rules;
pub mod sound_events;
pub mod vanilla_entity_types;
pub mod vanilla_game_rules;
pub mod vanilla_sound_events;

pub use entity_type::{EntityType, EntityTypeRef};
pub use game_rules::{GameRule, GameRuleRef, GameRuleValue};
pub use sound_events::{SoundEvent, SoundEventRef};
