use crate::{Card, Rank, SeatColor, Stack};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Draw,
    Discard,
    Over,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// `None` for the human seat.
    pub color: Option<SeatColor>,
    pub hand: Stack,
    pub down_cards: Stack,
    pub down: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Option<SeatColor>) -> Self {
        Self {
            name: name.into(),
            color,
            hand: Stack::new(),
            down_cards: Stack::new(),
            down: false,
        }
    }

    pub fn hand_points(&self) -> u32 {
        self.hand.points()
    }

    pub fn card_count(&self) -> usize {
        self.hand.len() + self.down_cards.len()
    }

    /// Moves every hand card matching `pred` onto the down stack.
    pub(crate) fn lay_down_where(&mut self, pred: impl FnMut(&Card) -> bool) -> Vec<Card> {
        let moved = self.hand.take_where(pred);
        self.down_cards.add_all(moved.iter().copied());
        moved
    }
}

/// Ranks lying in any player's down cards, recomputed from the stacks on
/// every call.
pub fn down_ranks(players: &[Player]) -> BTreeSet<Rank> {
    players
        .iter()
        .flat_map(|player| player.down_cards.iter())
        .map(|card| card.rank)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    #[test]
    fn down_ranks_unions_every_stack() {
        let mut me = Player::new("You", None);
        let mut them = Player::new("Blinky", Some(SeatColor::Red));
        me.down_cards.add(Card::new(Rank::Five, Suit::Clubs));
        them.down_cards.add(Card::new(Rank::Jack, Suit::Hearts));
        them.down_cards.add(Card::new(Rank::Five, Suit::Hearts));
        let ranks = down_ranks(&[me, them]);
        assert_eq!(ranks, BTreeSet::from([Rank::Five, Rank::Jack]));
        assert!(down_ranks(&[]).is_empty());
    }

    #[test]
    fn lay_down_moves_matching_cards() {
        let mut player = Player::new("You", None);
        player.hand.add_all([
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Five, Suit::Hearts),
        ]);
        let moved = player.lay_down_where(|card| card.rank == Rank::Five);
        assert_eq!(moved.len(), 2);
        assert_eq!(player.hand.cards(), &[Card::new(Rank::Six, Suit::Clubs)]);
        assert_eq!(player.down_cards.len(), 2);
        assert_eq!(player.card_count(), 3);
    }
}
