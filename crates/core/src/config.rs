use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeldMode {
    /// Ask each turn whether to meld automatically.
    #[default]
    Ask,
    Auto,
    Manual,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeatColor {
    Red,
    Pink,
    Blue,
    Orange,
    Green,
    Cyan,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpponentSpec {
    pub name: String,
    pub color: SeatColor,
}

impl OpponentSpec {
    pub fn new(name: &str, color: SeatColor) -> Self {
        Self {
            name: name.to_string(),
            color,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub decks: usize,
    pub hand_size: usize,
    pub round: u8,
    /// Fixed shuffle seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub player_name: String,
    pub opponents: Vec<OpponentSpec>,
    pub meld_mode: MeldMode,
    /// Show the whole discard pile instead of just its top card.
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            decks: 2,
            hand_size: 11,
            round: 1,
            seed: None,
            player_name: "You".to_string(),
            opponents: vec![
                OpponentSpec::new("Blinky", SeatColor::Red),
                OpponentSpec::new("Pinky", SeatColor::Pink),
                OpponentSpec::new("Inky", SeatColor::Blue),
                OpponentSpec::new("Clyde", SeatColor::Orange),
            ],
            meld_mode: MeldMode::Ask,
            verbose: false,
        }
    }
}

impl GameConfig {
    pub fn seats(&self) -> usize {
        self.opponents.len() + 1
    }

    /// Cards needed to deal every seat and turn up the first discard.
    pub fn cards_needed(&self) -> usize {
        self.seats() * self.hand_size + 1
    }
}
