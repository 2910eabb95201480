use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawSource {
    Deck,
    DiscardPile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u8,
        name: String,
        seed: u64,
    },
    TurnStarted {
        seat: usize,
    },
    Drew {
        seat: usize,
        source: DrawSource,
        card: Card,
    },
    DeckReshuffled {
        cards: usize,
    },
    WentDown {
        seat: usize,
        cards: Vec<Card>,
        auto: bool,
    },
    Melded {
        seat: usize,
        card: Card,
        onto: usize,
    },
    Discarded {
        seat: usize,
        card: Card,
    },
    WentOut {
        seat: usize,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
