//! Players: a living entity bound to a game profile.

pub mod entity_state;
pub mod inventory;

use std::any::Any;
use std::sync::{Arc, Weak};

use crossbeam::atomic::AtomicCell;
use steel_registry::vanilla_entity_types::PLAYER;
use steel_utils::locks::SyncMutex;
use steel_utils::math::Vector3;
use steel_utils::types::GameType;
use uuid::Uuid;

use crate::combat::attribution::Attribution;
use crate::entity::damage::DamageCause;
use crate::entity::living_base::LivingEntityBase;
use crate::entity::{Entity, EntityBase, LivingEntity};
use crate::item::items;
use crate::player::entity_state::{EntityState, Shoulder};
use crate::player::inventory::{OFFHAND_SLOT, PlayerInventory};

/// Account identity of a player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameProfile {
    /// Account UUID, reused as the entity UUID.
    pub id: Uuid,
    /// Account name.
    pub name: String,
}

impl GameProfile {
    /// Creates a profile with a random id, for offline play and tests.
    #[must_use]
    pub fn offline(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A player in the world.
pub struct Player {
    this: Weak<Player>,
    base: EntityBase,
    living: LivingEntityBase,
    /// The player's account.
    pub gameprofile: GameProfile,
    display_name: SyncMutex<Option<String>>,
    /// Current game mode.
    pub game_mode: AtomicCell<GameType>,
    /// The player's items.
    pub inventory: SyncMutex<PlayerInventory>,
    /// Posture and shoulder passengers.
    pub entity_state: EntityState,
}

impl Player {
    /// Creates a survival player at `position`.
    #[must_use]
    pub fn new(gameprofile: GameProfile, position: Vector3<f64>) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            base: EntityBase::with_uuid(PLAYER, position, gameprofile.id),
            living: LivingEntityBase::new(PLAYER.max_health),
            gameprofile,
            display_name: SyncMutex::new(None),
            game_mode: AtomicCell::new(GameType::Survival),
            inventory: SyncMutex::new(PlayerInventory::new()),
            entity_state: EntityState::new(),
        })
    }

    /// The name shown in chat and death messages. Defaults to the account name.
    pub fn display_name(&self) -> String {
        self.display_name
            .lock()
            .clone()
            .unwrap_or_else(|| self.gameprofile.name.clone())
    }

    /// Overrides the display name.
    pub fn set_display_name(&self, name: Option<String>) {
        *self.display_name.lock() = name;
    }

    /// Changes the game mode.
    pub fn set_game_mode(&self, game_mode: GameType) {
        self.game_mode.store(game_mode);
    }

    /// Drops whatever sits on either shoulder.
    pub fn clear_shoulder_entities(&self) {
        self.entity_state.set_shoulder_entity(Shoulder::Right, None);
        self.entity_state.set_shoulder_entity(Shoulder::Left, None);
    }
}

impl Entity for Player {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> String {
        self.gameprofile.name.clone()
    }

    fn attribution(&self) -> Attribution {
        Attribution::Direct(self.this.clone())
    }

    fn tick(&self) {
        self.base.increment_tick_count();
        self.living.base_tick();
    }

    fn as_living(&self) -> Option<&dyn LivingEntity> {
        Some(self)
    }
}

impl LivingEntity for Player {
    fn living_base(&self) -> &LivingEntityBase {
        &self.living
    }

    fn can_take_damage(&self, cause: DamageCause) -> bool {
        self.game_mode.load().is_survival_like() || cause.bypasses_invulnerability()
    }

    fn holds_totem(&self) -> bool {
        let inventory = self.inventory.lock();
        inventory.main_hand().is(&items::TOTEM_OF_UNDYING)
            || inventory.off_hand().is(&items::TOTEM_OF_UNDYING)
    }

    fn consume_totem(&self) {
        let mut inventory = self.inventory.lock();
        if inventory.main_hand().is(&items::TOTEM_OF_UNDYING) {
            inventory.shrink_main_hand();
        } else if inventory.off_hand().is(&items::TOTEM_OF_UNDYING) {
            inventory.shrink(OFFHAND_SLOT);
        }
    }

    fn as_player(&self) -> Option<&Player> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemStack;

    #[test]
    fn test_creative_only_takes_void() {
        let player = Player::new(GameProfile::offline("Steve"), Vector3::ZERO);
        assert!(player.can_take_damage(DamageCause::Lava));
        player.set_game_mode(GameType::Creative);
        assert!(!player.can_take_damage(DamageCause::Lava));
        assert!(!player.can_take_damage(DamageCause::EntityAttack));
        assert!(player.can_take_damage(DamageCause::Void));
    }

    #[test]
    fn test_offhand_totem_is_consumed() {
        let player = Player::new(GameProfile::offline("Alex"), Vector3::ZERO);
        assert!(!player.holds_totem());
        player
            .inventory
            .lock()
            .set_item(OFFHAND_SLOT, ItemStack::new(items::TOTEM_OF_UNDYING, 1));
        assert!(player.holds_totem());
        player.consume_totem();
        assert!(!player.holds_totem());
    }

    #[test]
    fn test_attribution_points_back_at_player() {
        let player = Player::new(GameProfile::offline("Steve"), Vector3::ZERO);
        let Attribution::Direct(weak) = player.attribution() else {
            panic!("players attribute directly");
        };
        assert!(weak.upgrade().is_some_and(|p| Arc::ptr_eq(&p, &player)));
    }
}
