use crate::{Card, Player};
use serde::{Deserialize, Serialize};

pub fn hand_points(cards: &[Card]) -> u32 {
    cards.iter().map(Card::points).sum()
}

/// Points still held by one seat when the round ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatScore {
    pub seat: usize,
    pub name: String,
    pub points: u32,
}

pub fn round_scores(players: &[Player]) -> Vec<SeatScore> {
    players
        .iter()
        .enumerate()
        .map(|(seat, player)| SeatScore {
            seat,
            name: player.name.clone(),
            points: player.hand_points(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn sums_card_points() {
        let cards = [
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        assert_eq!(hand_points(&cards), 54);
        assert_eq!(hand_points(&[]), 0);
    }

    #[test]
    fn empty_hand_scores_zero() {
        let mut winner = Player::new("You", None);
        let mut loser = Player::new("Clyde", None);
        loser.hand.add(Card::new(Rank::Queen, Suit::Clubs));
        winner.down_cards.add(Card::new(Rank::Ace, Suit::Clubs));
        let scores = round_scores(&[winner, loser]);
        assert_eq!(scores[0].points, 0);
        assert_eq!(scores[1].points, 10);
        assert_eq!(scores[1].name, "Clyde");
    }
}
