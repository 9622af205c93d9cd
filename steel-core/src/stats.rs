//! Per-player statistics.

use rustc_hash::FxHashMap;
use steel_utils::Identifier;
use steel_utils::locks::SyncMutex;
use uuid::Uuid;

use crate::player::Player;

/// A statistic the combat pipeline increments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Kills of the given entity type. Vanilla: `minecraft:killed`.
    KillEntity(Identifier),
    /// Times the player died. Vanilla: `minecraft:deaths`.
    Deaths,
}

/// Records statistics for players.
pub trait StatisticTracker: Send + Sync {
    /// Adds one to `stat` for `player`.
    fn increment(&self, player: &Player, stat: Stat);
}

/// In-memory statistics keyed by player UUID.
#[derive(Default)]
pub struct ServerStatsCounter {
    values: SyncMutex<FxHashMap<(Uuid, Stat), i32>>,
}

impl ServerStatsCounter {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of `stat` for the player with `uuid`.
    pub fn get(&self, uuid: Uuid, stat: &Stat) -> i32 {
        self.values
            .lock()
            .get(&(uuid, stat.clone()))
            .copied()
            .unwrap_or(0)
    }
}

impl StatisticTracker for ServerStatsCounter {
    fn increment(&self, player: &Player, stat: Stat) {
        log::debug!("{} stat {stat:?} +1", player.gameprofile.name);
        *self
            .values
            .lock()
            .entry((player.gameprofile.id, stat))
            .or_insert(0) += 1;
    }
}
