//! Whether a damage request is ignored outright.

use crate::entity::LivingEntity;
use crate::entity::damage::DamageCause;

/// True when the entity cannot be hurt by `cause` right now: its no-damage
/// window is still running, it has no health left, it is immune to the cause,
/// or it is flagged invulnerable.
pub fn is_blocked(entity: &dyn LivingEntity, cause: DamageCause) -> bool {
    let living = entity.living_base();
    living.get_invulnerable_time() > 0
        || living.get_health() <= 0.0
        || !entity.can_take_damage(cause)
        || entity.entity_base().is_invulnerable()
}

#[cfg(test)]
mod tests {
    use steel_registry::vanilla_entity_types::{BLAZE, ZOMBIE};
    use steel_utils::math::Vector3;

    use super::*;
    use crate::entity::Entity;
    use crate::entity::mob::Mob;

    #[test]
    fn test_window_blocks() {
        let zombie = Mob::new(ZOMBIE, Vector3::ZERO);
        assert!(!is_blocked(&zombie, DamageCause::EntityAttack));
        zombie.living_base().set_invulnerable_time(5);
        assert!(is_blocked(&zombie, DamageCause::EntityAttack));
    }

    #[test]
    fn test_fire_immune_species() {
        let blaze = Mob::new(BLAZE, Vector3::ZERO);
        assert!(is_blocked(&blaze, DamageCause::Lava));
        assert!(is_blocked(&blaze, DamageCause::HotFloor));
        assert!(!is_blocked(&blaze, DamageCause::Drowning));
    }

    #[test]
    fn test_invulnerable_flag() {
        let zombie = Mob::new(ZOMBIE, Vector3::ZERO);
        zombie.entity_base().set_invulnerable(true);
        assert!(is_blocked(&zombie, DamageCause::Void));
    }
}
