//! Vanilla hurt and death sounds for the entity types this crate knows about.

use steel_utils::Identifier;

use crate::sound_events::SoundEvent;

macro_rules! sound {
    ($name:ident, $path:literal) => {
        #[allow(missing_docs, reason = "sound keys are self describing")]
        pub static $name: &SoundEvent = &SoundEvent {
            key: Identifier::vanilla_static($path),
        };
    };
}

sound!(ENTITY_PLAYER_HURT, "entity.player.hurt");
sound!(ENTITY_PLAYER_DEATH, "entity.player.death");
sound!(ENTITY_ZOMBIE_HURT, "entity.zombie.hurt");
sound!(ENTITY_ZOMBIE_DEATH, "entity.zombie.death");
sound!(ENTITY_COW_HURT, "entity.cow.hurt");
sound!(ENTITY_COW_DEATH, "entity.cow.death");
sound!(ENTITY_SLIME_HURT, "entity.slime.hurt");
sound!(ENTITY_SLIME_DEATH, "entity.slime.death");
sound!(ENTITY_MAGMA_CUBE_HURT, "entity.magma_cube.hurt");
sound!(ENTITY_MAGMA_CUBE_DEATH, "entity.magma_cube.death");
sound!(ENTITY_WOLF_HURT, "entity.wolf.hurt");
sound!(ENTITY_WOLF_DEATH, "entity.wolf.death");
sound!(ENTITY_BLAZE_HURT, "entity.blaze.hurt");
sound!(ENTITY_BLAZE_DEATH, "entity.blaze.death");
sound!(ITEM_TOTEM_USE, "item.totem.use");
