//! Scoreboard objectives and scores.

use rustc_hash::FxHashMap;
use steel_utils::locks::SyncRwLock;

/// Objective criteria the server updates by itself.
pub mod criteria {
    /// Mirrors each entity's health, rounded down.
    pub const HEALTH: &str = "health";
    /// Updated only by commands and plugins.
    pub const DUMMY: &str = "dummy";
}

/// The scoreboard operations the combat pipeline needs.
pub trait ScoreboardService: Send + Sync {
    /// Names of every objective tracking `criteria`.
    fn objectives_by_criteria(&self, criteria: &str) -> Vec<String>;

    /// Sets `entry`'s score in `objective`.
    fn set_score(&self, objective: &str, entry: &str, score: i32);
}

struct Objective {
    criteria: String,
    scores: FxHashMap<String, i32>,
}

/// The main scoreboard.
#[derive(Default)]
pub struct Scoreboard {
    objectives: SyncRwLock<FxHashMap<String, Objective>>,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an objective. Returns `false` if the name is taken.
    pub fn add_objective(&self, name: &str, criteria: &str) -> bool {
        let mut objectives = self.objectives.write();
        if objectives.contains_key(name) {
            return false;
        }
        objectives.insert(
            name.to_owned(),
            Objective {
                criteria: criteria.to_owned(),
                scores: FxHashMap::default(),
            },
        );
        true
    }

    /// Removes an objective and its scores.
    pub fn remove_objective(&self, name: &str) {
        self.objectives.write().remove(name);
    }

    /// `entry`'s score in `objective`, if set.
    pub fn get_score(&self, objective: &str, entry: &str) -> Option<i32> {
        self.objectives
            .read()
            .get(objective)
            .and_then(|objective| objective.scores.get(entry).copied())
    }
}

impl ScoreboardService for Scoreboard {
    fn objectives_by_criteria(&self, criteria: &str) -> Vec<String> {
        self.objectives
            .read()
            .iter()
            .filter(|(_, objective)| objective.criteria == criteria)
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn set_score(&self, objective: &str, entry: &str, score: i32) {
        if let Some(objective) = self.objectives.write().get_mut(objective) {
            objective.scores.insert(entry.to_owned(), score);
        }
    }
}
