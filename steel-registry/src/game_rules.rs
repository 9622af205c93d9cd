//! Game rule definitions.

use steel_utils::Identifier;

/// The value of a game rule in a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameRuleValue {
    /// A boolean rule such as `keepInventory`.
    Bool(bool),
    /// An integer rule such as `randomTickSpeed`.
    Int(i32),
}

/// A registered game rule and its default.
#[derive(Debug)]
pub struct GameRule {
    /// The rule's key.
    pub key: Identifier,
    /// The value a fresh world starts with.
    pub default_value: GameRuleValue,
}

/// A reference to a registered game rule.
pub type GameRuleRef = &'static GameRule;
