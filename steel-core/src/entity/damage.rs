//! Damage requests and their causes.

use std::sync::Arc;

use crate::entity::Entity;

/// Why an entity is being damaged. Follows the Bukkit `DamageCause` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageCause {
    /// Touching a cactus, berry bush, ...
    Contact,
    /// A melee hit from another entity.
    EntityAttack,
    /// A sweeping melee hit.
    EntitySweepAttack,
    /// Arrows, tridents and other projectiles.
    Projectile,
    /// Stuck inside a block.
    Suffocation,
    /// Falling.
    Fall,
    /// Standing in fire.
    Fire,
    /// Burning after leaving fire.
    FireTick,
    /// Snow golems in warm biomes.
    Melting,
    /// Standing in lava.
    Lava,
    /// Running out of air.
    Drowning,
    /// A block exploding (beds, respawn anchors).
    BlockExplosion,
    /// An entity exploding (creepers, primed TNT).
    EntityExplosion,
    /// Falling out of the world.
    Void,
    /// Lightning strikes.
    Lightning,
    /// Killed by a command.
    Suicide,
    /// Hunger.
    Starvation,
    /// Poison effect.
    Poison,
    /// Instant damage and similar.
    Magic,
    /// Wither effect.
    Wither,
    /// Anvils and other falling blocks.
    FallingBlock,
    /// Thorns enchantment.
    Thorns,
    /// Dragon's breath clouds.
    DragonBreath,
    /// Plugin defined damage.
    Custom,
    /// Gliding into a wall.
    FlyIntoWall,
    /// Standing on a magma block.
    HotFloor,
    /// Too many entities in one space.
    Cramming,
}

impl DamageCause {
    /// Whether fire resistance and fire immunity protect against this cause.
    #[must_use]
    pub const fn is_fire(self) -> bool {
        matches!(self, Self::Fire | Self::FireTick | Self::HotFloor | Self::Lava)
    }

    /// Whether this is a direct melee hit, the only cause that knocks back.
    #[must_use]
    pub const fn is_melee(self) -> bool {
        matches!(self, Self::EntityAttack)
    }

    /// Whether this cause still hurts players in creative and spectator mode.
    #[must_use]
    pub const fn bypasses_invulnerability(self) -> bool {
        matches!(self, Self::Void)
    }
}

/// A request to damage a living entity.
#[derive(Clone)]
pub struct DamageRequest {
    /// Raw damage before armor.
    pub amount: f32,
    /// The entity that dealt the damage, `None` for environmental causes.
    pub source: Option<Arc<dyn Entity>>,
    /// Why the damage happens.
    pub cause: DamageCause,
}

impl DamageRequest {
    /// Environmental damage with no entity context (lava, void, hot floors, ...).
    #[must_use]
    pub const fn environment(cause: DamageCause, amount: f32) -> Self {
        Self {
            amount,
            source: None,
            cause,
        }
    }

    /// Damage dealt by `source`.
    #[must_use]
    pub fn by_entity(source: Arc<dyn Entity>, cause: DamageCause, amount: f32) -> Self {
        Self {
            amount,
            source: Some(source),
            cause,
        }
    }

    /// A melee hit from `attacker`.
    #[must_use]
    pub fn melee(attacker: Arc<dyn Entity>, amount: f32) -> Self {
        Self::by_entity(attacker, DamageCause::EntityAttack, amount)
    }
}
