//! Which player, if any, gets credit for a hit.
//!
//! Attribution is decided from what the damaging entity reports about itself
//! through [`Entity::attribution`](crate::entity::Entity::attribution), never
//! from its concrete type.

use std::sync::{Arc, Weak};

use crate::player::Player;

/// How a damaging entity relates to a player.
#[derive(Clone, Debug)]
pub enum Attribution {
    /// The entity is a player.
    Direct(Weak<Player>),
    /// A primed explosive and whoever lit it.
    Ignited {
        /// The player that lit the fuse, if a player did.
        igniter: Option<Weak<Player>>,
    },
    /// A tameable creature.
    Owned {
        /// Whether it has been tamed.
        tamed: bool,
        /// The taming player.
        owner: Option<Weak<Player>>,
    },
    /// Acts for nobody.
    None,
}

impl Attribution {
    /// Whether hits from this source count as player hits (for experience
    /// drops and kill credit).
    ///
    /// Players always count. Explosives count only when lit by a player in
    /// survival or adventure. Tameable creatures count once tamed.
    #[must_use]
    pub fn is_creditable(&self) -> bool {
        match self {
            Self::Direct(_) => true,
            Self::Ignited { igniter } => igniter
                .as_ref()
                .and_then(Weak::upgrade)
                .is_some_and(|player| player.game_mode.load().is_survival_like()),
            Self::Owned { tamed, .. } => *tamed,
            Self::None => false,
        }
    }

    /// The player credited with a kill by this source.
    #[must_use]
    pub fn credited_player(&self) -> Option<Arc<Player>> {
        if !self.is_creditable() {
            return None;
        }
        match self {
            Self::Direct(player) => player.upgrade(),
            Self::Ignited { igniter } => igniter.as_ref().and_then(Weak::upgrade),
            Self::Owned { owner, .. } => owner.as_ref().and_then(Weak::upgrade),
            Self::None => None,
        }
    }
}
