//! Entity type registry entries.

use steel_utils::Identifier;

use crate::sound_events::SoundEventRef;

/// Static data shared by every entity of one type.
#[derive(Debug)]
pub struct EntityType {
    /// The type's resource key, e.g. `minecraft:slime`.
    pub key: Identifier,
    /// Height of the eyes above the feet, used for knockback rays.
    pub eye_height: f64,
    /// Base value of the max health attribute. Zero for non-living entities.
    pub max_health: f32,
    /// Whether the type is unaffected by fire, lava and hot floors.
    pub fire_immune: bool,
    /// Whether the type can be tamed by a player.
    pub tameable: bool,
    /// Whether the type is a fireball-style projectile.
    pub fireball: bool,
    /// Sound played when an entity of this type is hurt.
    pub hurt_sound: Option<SoundEventRef>,
    /// Sound played when an entity of this type dies.
    pub death_sound: Option<SoundEventRef>,
}

impl EntityType {
    /// Whether this type is a living entity with health.
    #[must_use]
    pub fn is_living(&self) -> bool {
        self.max_health > 0.0
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for EntityType {}

/// A reference to a registered entity type.
pub type EntityTypeRef = &'static EntityType;
