use crate::AutoplayError;
use mayi_core::{Card, DrawSource, SeatScore, TurnReport};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    WentOut,
    MaxTurns,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn: u32,
    pub seat: usize,
    pub source: DrawSource,
    pub drew: Card,
    #[serde(default)]
    pub went_down: Vec<Card>,
    #[serde(default)]
    pub melded: Vec<Card>,
    pub discarded: Option<Card>,
}

impl TurnRecord {
    pub fn from_report(turn: u32, report: &TurnReport) -> Self {
        Self {
            turn,
            seat: report.seat,
            source: report.source,
            drew: report.drew,
            went_down: report
                .went_down
                .as_ref()
                .map(|down| down.cards.clone())
                .unwrap_or_default(),
            melded: report.melded.iter().map(|meld| meld.card).collect(),
            discarded: report.discarded,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub status: RoundStatus,
    pub seed: u64,
    pub round: u8,
    pub winner: Option<usize>,
    pub scores: Vec<SeatScore>,
    pub turns: Vec<TurnRecord>,
}

impl RoundReport {
    /// Turn on which each seat went down, if it did.
    pub fn down_turns(&self) -> Vec<Option<u32>> {
        let seats = self.scores.len();
        (0..seats)
            .map(|seat| {
                self.turns
                    .iter()
                    .find(|record| record.seat == seat && !record.went_down.is_empty())
                    .map(|record| record.turn)
            })
            .collect()
    }

    pub fn to_text_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "round {} seed {} status {:?} after {} turns\n",
            self.round,
            self.seed,
            self.status,
            self.turns.len()
        ));
        let down_turns = self.down_turns();
        for score in &self.scores {
            let marker = if self.winner == Some(score.seat) {
                " (went out)"
            } else {
                ""
            };
            let down = match down_turns.get(score.seat).copied().flatten() {
                Some(turn) => format!("down on turn {turn}"),
                None => "never down".to_string(),
            };
            out.push_str(&format!(
                "  {:<8} {:>4} points, {}{}\n",
                score.name, score.points, down, marker
            ));
        }
        out
    }
}

pub fn write_json(path: &Path, report: &RoundReport) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, report: &RoundReport) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report.to_text_report())?;
    Ok(())
}
