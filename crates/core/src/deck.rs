use crate::{Card, Rank, Suit};
use rand::{rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered multiset of cards. The top of the stack is the last element.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    cards: Vec<Card>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` full 52-card decks, unshuffled.
    pub fn standard_decks(count: usize) -> Self {
        let mut cards = Vec::with_capacity(52 * count);
        for _ in 0..count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn shuffle(&mut self, rng: &mut StdRng) {
        self.cards.shuffle(rng);
    }

    /// Takes up to `count` cards off the top.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.cards.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Removes one card equal to `card`, returning whether one was present.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|held| held == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Removes every card matching `pred`, preserving order of both halves.
    pub fn take_where(&mut self, mut pred: impl FnMut(&Card) -> bool) -> Vec<Card> {
        let mut taken = Vec::new();
        let mut kept = Vec::with_capacity(self.cards.len());
        for card in self.cards.drain(..) {
            if pred(&card) {
                taken.push(card);
            } else {
                kept.push(card);
            }
        }
        self.cards = kept;
        taken
    }

    /// Everything except the top card, leaving the top in place.
    pub fn take_all_but_top(&mut self) -> Vec<Card> {
        match self.cards.pop() {
            Some(top) => {
                let rest = std::mem::take(&mut self.cards);
                self.cards.push(top);
                rest
            }
            None => Vec::new(),
        }
    }

    /// Stable sort by rank then suit.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    pub fn count_by<K: Ord>(&self, key: impl Fn(&Card) -> K) -> BTreeMap<K, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(key(card)).or_insert(0) += 1;
        }
        counts
    }

    /// Multiset equality, ignoring order.
    pub fn same_cards(&self, other: &[Card]) -> bool {
        let mut mine = self.cards.clone();
        let mut theirs = other.to_vec();
        mine.sort();
        theirs.sort();
        mine == theirs
    }

    pub fn points(&self) -> u32 {
        crate::hand_points(&self.cards)
    }
}

impl From<Vec<Card>> for Stack {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
