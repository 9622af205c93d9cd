//! Small shared game types.

use serde::{Deserialize, Serialize};

/// A player's game mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i8)]
pub enum GameType {
    /// Normal play.
    #[default]
    Survival = 0,
    /// Unlimited resources, immune to everything but the void.
    Creative = 1,
    /// Survival without block breaking.
    Adventure = 2,
    /// Free-flying observer.
    Spectator = 3,
}

impl GameType {
    /// Whether the mode plays by survival rules (survival or adventure).
    #[must_use]
    pub const fn is_survival_like(self) -> bool {
        matches!(self, Self::Survival | Self::Adventure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survival_like() {
        assert!(GameType::Survival.is_survival_like());
        assert!(GameType::Adventure.is_survival_like());
        assert!(!GameType::Creative.is_survival_like());
        assert!(!GameType::Spectator.is_survival_like());
    }
}
