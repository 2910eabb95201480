use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Ranks in sort order. `Two` is the wild rank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const WILD: Rank = Rank::Two;

    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn is_wild(self) -> bool {
        self == Rank::WILD
    }

    /// Penalty value of a card of this rank left in hand.
    pub fn points(self) -> u32 {
        match self {
            Rank::Two => 20,
            Rank::Ace => 15,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field order gives the rank-then-suit ordering used by `Stack::sort`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    pub fn points(&self) -> u32 {
        self.rank.points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} of {:?}", self.suit.symbol(), self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_sort_by_rank_then_suit() {
        let mut cards = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        cards.sort();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Two, Suit::Hearts),
                Card::new(Rank::Three, Suit::Spades),
                Card::new(Rank::Three, Suit::Clubs),
                Card::new(Rank::Ace, Suit::Spades),
            ]
        );
    }

    #[test]
    fn wild_and_face_cards_score_high() {
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).points(), 20);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).points(), 15);
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).points(), 10);
        assert_eq!(Card::new(Rank::Seven, Suit::Clubs).points(), 7);
    }

    #[test]
    fn display_uses_suit_symbol() {
        let card = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(card.to_string(), "♥ Queen of Hearts");
    }
}
