use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RobotConfig {
    /// Take the top discard when the hand holds at least this many of its rank.
    pub take_discard_min_matches: usize,
    /// Keep singletons whose rank already lies in someone's down cards.
    pub avoid_down_ranks: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            take_discard_min_matches: 1,
            avoid_down_ranks: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub robot: RobotConfig,
    pub max_turns: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            robot: RobotConfig::default(),
            max_turns: 1_000,
        }
    }
}
