//! Vanilla entity types used by the simulation.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use steel_utils::Identifier;

use crate::entity_type::{EntityType, EntityTypeRef};
use crate::vanilla_sound_events as sounds;

const fn non_living(path: &'static str, fireball: bool) -> EntityType {
    EntityType {
        key: Identifier::vanilla_static(path),
        eye_height: 0.0,
        max_health: 0.0,
        fire_immune: false,
        tameable: false,
        fireball,
        hurt_sound: None,
        death_sound: None,
    }
}

#[allow(missing_docs, reason = "entity type names are self describing")]
pub static PLAYER: &EntityType = &EntityType {
    key: Identifier::vanilla_static("player"),
    eye_height: 1.62,
    max_health: 20.0,
    fire_immune: false,
    tameable: false,
    fireball: false,
    hurt_sound: Some(sounds::ENTITY_PLAYER_HURT),
    death_sound: Some(sounds::ENTITY_PLAYER_DEATH),
};

#[allow(missing_docs, reason = "entity type names are self describing")]
pub static ZOMBIE: &EntityType = &EntityType {
    key: Identifier::vanilla_static("zombie"),
    eye_height: 1.74,
    max_health: 20.0,
    fire_immune: false,
    tameable: false,
    fireball: false,
    hurt_sound: Some(sounds::ENTITY_ZOMBIE_HURT),
    death_sound: Some(sounds::ENTITY_ZOMBIE_DEATH),
};

#[allow(missing_docs, reason = "entity type names are self describing")]
pub static COW: &EntityType = &EntityType {
    key: Identifier::vanilla_static("cow"),
    eye_height: 1.3,
    max_health: 10.0,
    fire_immune: false,
    tameable: false,
    fireball: false,
    hurt_sound: Some(sounds::ENTITY_COW_HURT),
    death_sound: Some(sounds::ENTITY_COW_DEATH),
};

/// Slimes start at 1 health per size step; the real value is set from size.
pub static SLIME: &EntityType = &EntityType {
    key: Identifier::vanilla_static("slime"),
    eye_height: 0.325,
    max_health: 1.0,
    fire_immune: false,
    tameable: false,
    fireball: false,
    hurt_sound: Some(sounds::ENTITY_SLIME_HURT),
    death_sound: Some(sounds::ENTITY_SLIME_DEATH),
};

#[allow(missing_docs, reason = "entity type names are self describing")]
pub static MAGMA_CUBE: &EntityType = &EntityType {
    key: Identifier::vanilla_static("magma_cube"),
    eye_height: 0.325,
    max_health: 1.0,
    fire_immune: true,
    tameable: false,
    fireball: false,
    hurt_sound: Some(sounds::ENTITY_MAGMA_CUBE_HURT),
    death_sound: Some(sounds::ENTITY_MAGMA_CUBE_DEATH),
};

#[allow(missing_docs, reason = "entity type names are self describing")]
pub static WOLF: &EntityType = &EntityType {
    key: Identifier::vanilla_static("wolf"),
    eye_height: 0.68,
    max_health: 8.0,
    fire_immune: false,
    tameable: true,
    fireball: false,
    hurt_sound: Some(sounds::ENTITY_WOLF_HURT),
    death_sound: Some(sounds::ENTITY_WOLF_DEATH),
};

#[allow(missing_docs, reason = "entity type names are self describing")]
pub static BLAZE: &EntityType = &EntityType {
    key: Identifier::vanilla_static("blaze"),
    eye_height: 1.53,
    max_health: 20.0,
    fire_immune: true,
    tameable: false,
    fireball: false,
    hurt_sound: Some(sounds::ENTITY_BLAZE_HURT),
    death_sound: Some(sounds::ENTITY_BLAZE_DEATH),
};

#[allow(missing_docs, reason = "entity type names are self describing")]
pub static TNT: &EntityType = &non_living("tnt", false);
#[allow(missing_docs, reason = "entity type names are self describing")]
pub static ARROW: &EntityType = &non_living("arrow", false);
#[allow(missing_docs, reason = "entity type names are self describing")]
pub static FIREBALL: &EntityType = &non_living("fireball", true);
#[allow(missing_docs, reason = "entity type names are self describing")]
pub static SMALL_FIREBALL: &EntityType = &non_living("small_fireball", true);
#[allow(missing_docs, reason = "entity type names are self describing")]
pub static DRAGON_FIREBALL: &EntityType = &non_living("dragon_fireball", true);
#[allow(missing_docs, reason = "entity type names are self describing")]
pub static WITHER_SKULL: &EntityType = &non_living("wither_skull", true);
#[allow(missing_docs, reason = "entity type names are self describing")]
pub static EXPERIENCE_ORB: &EntityType = &non_living("experience_orb", false);
#[allow(missing_docs, reason = "entity type names are self describing")]
pub static ITEM: &EntityType = &non_living("item", false);

/// Every entity type known to the registry.
pub static ALL: &[EntityTypeRef] = &[
    PLAYER,
    ZOMBIE,
    COW,
    SLIME,
    MAGMA_CUBE,
    WOLF,
    BLAZE,
    TNT,
    ARROW,
    FIREBALL,
    SMALL_FIREBALL,
    DRAGON_FIREBALL,
    WITHER_SKULL,
    EXPERIENCE_ORB,
    ITEM,
];

static BY_KEY: LazyLock<FxHashMap<&'static Identifier, EntityTypeRef>> =
    LazyLock::new(|| ALL.iter().map(|entity_type| (&entity_type.key, *entity_type)).collect());

/// Looks up an entity type by key.
#[must_use]
pub fn by_key(key: &Identifier) -> Option<EntityTypeRef> {
    BY_KEY.get(key).copied()
}
