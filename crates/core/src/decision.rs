//! Decision points a player is asked about during a turn.
//!
//! The core never reads input itself; a [`Decider`] answers each
//! [`Question`] and the round re-asks whenever the reply is invalid.

use crate::{Card, MeldCandidate, Rank, RankGroup};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Yes,
    No,
}

impl Decision {
    pub fn is_yes(self) -> bool {
        self == Decision::Yes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<T> {
    Valid(T),
    /// Unparsable, empty or out-of-range input. Re-asked in place.
    Invalid,
    /// The player left the table.
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub enum Question<'a> {
    /// Choose 0 for the deck or 1 for the discard pile.
    DrawSource {
        hand: &'a [Card],
        top_discard: Option<&'a Card>,
        /// False once the deck is empty and nothing lies under the top discard.
        deck_available: bool,
    },
    GoDown {
        victory: &'a [Card],
    },
    /// Pick one group by index; `pick` counts from 1.
    DownGroup {
        groups: &'a [RankGroup],
        picked: &'a [usize],
        pick: usize,
        needed: usize,
    },
    AddWilds {
        wilds: &'a [Card],
    },
    /// Yes melds every candidate, No asks about each one.
    MeldAll {
        candidates: &'a [MeldCandidate],
    },
    Meld {
        candidate: &'a MeldCandidate,
    },
    /// Choose the hand index to discard.
    Discard {
        hand: &'a [Card],
        down_ranks: &'a BTreeSet<Rank>,
    },
}

pub trait Decider {
    fn confirm(&mut self, question: &Question<'_>) -> Reply<Decision>;

    fn choose(&mut self, question: &Question<'_>) -> Reply<usize>;
}
