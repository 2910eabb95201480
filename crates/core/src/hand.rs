use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Rank frequency table for a set of cards. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankCounts {
    counts: BTreeMap<Rank, usize>,
}

impl RankCounts {
    pub fn of(cards: &[Card]) -> Self {
        let mut counts = BTreeMap::new();
        for card in cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, rank: Rank) -> usize {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    pub fn wilds(&self) -> usize {
        self.get(Rank::WILD)
    }

    /// Non-wild ranks held at least `min` times.
    pub fn natural_at_least(&self, min: usize) -> BTreeSet<Rank> {
        self.counts
            .iter()
            .filter(|(rank, &count)| !rank.is_wild() && count >= min)
            .map(|(rank, _)| *rank)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, usize)> + '_ {
        self.counts.iter().map(|(rank, count)| (*rank, *count))
    }
}

/// Outcome of checking a hand against a round's pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    pub satisfied: bool,
    /// Ranks taking part in the satisfying groups, wild rank included.
    pub ranks: BTreeSet<Rank>,
    /// Every hand card whose rank is in `ranks`, in hand order.
    pub cards: Vec<Card>,
}

impl Victory {
    pub fn unsatisfied() -> Self {
        Self::default()
    }

    fn from_ranks(hand: &[Card], ranks: BTreeSet<Rank>) -> Self {
        let cards = hand
            .iter()
            .filter(|card| ranks.contains(&card.rank))
            .copied()
            .collect();
        Self {
            satisfied: true,
            ranks,
            cards,
        }
    }

    pub fn has_wild(&self) -> bool {
        self.ranks.contains(&Rank::WILD)
    }

    /// Victory cards grouped by rank, lowest rank first.
    pub fn groups(&self) -> Vec<RankGroup> {
        self.ranks
            .iter()
            .map(|rank| RankGroup {
                rank: *rank,
                cards: self
                    .cards
                    .iter()
                    .filter(|card| card.rank == *rank)
                    .copied()
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankGroup {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

impl RankGroup {
    /// Wild groups cannot be picked on their own when going down.
    pub fn selectable(&self) -> bool {
        !self.rank.is_wild()
    }
}

/// Round 1: two disjoint three-of-a-kinds, twos wild.
///
/// Over-selects: every card of a qualifying rank is returned, not just three.
pub fn two_three_of_a_kind(hand: &[Card]) -> Victory {
    let counts = RankCounts::of(hand);
    let wilds = counts.wilds();
    let triples = counts.natural_at_least(3);
    let pairs = counts.natural_at_least(2);

    let ranks = if wilds == 0 {
        (triples.len() >= 2).then_some(triples)
    } else if pairs.is_empty() {
        None
    } else if !triples.is_empty() && triples != pairs {
        // one natural triple plus a separate pair completed by a wild
        let mut ranks: BTreeSet<Rank> = pairs.union(&triples).copied().collect();
        ranks.insert(Rank::WILD);
        Some(ranks)
    } else if pairs.len() >= 2 && wilds >= 2 {
        let mut ranks = pairs;
        ranks.insert(Rank::WILD);
        Some(ranks)
    } else {
        None
    };

    let victory = match ranks {
        Some(ranks) => Victory::from_ranks(hand, ranks),
        None => Victory::unsatisfied(),
    };
    log::debug!(
        "two_three_of_a_kind: satisfied={} ranks={:?} cards={}",
        victory.satisfied,
        victory.ranks,
        victory.cards.len()
    );
    victory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    #[test]
    fn counts_ranks_and_wilds() {
        let hand = [
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Nine, Suit::Hearts),
        ];
        let counts = RankCounts::of(&hand);
        assert_eq!(counts.wilds(), 1);
        assert_eq!(counts.get(Rank::Five), 3);
        assert_eq!(counts.get(Rank::King), 0);
        assert_eq!(
            counts.natural_at_least(2),
            BTreeSet::from([Rank::Five, Rank::Nine])
        );
        assert_eq!(counts.natural_at_least(3), BTreeSet::from([Rank::Five]));
    }

    #[test]
    fn groups_follow_rank_order() {
        let hand = [
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Three, Suit::Spades),
        ];
        let victory = two_three_of_a_kind(&hand);
        let groups = victory.groups();
        let ranks: Vec<Rank> = groups.iter().map(|group| group.rank).collect();
        assert_eq!(ranks, vec![Rank::Two, Rank::Three, Rank::Four]);
        assert!(!groups[0].selectable());
        assert_eq!(groups[1].cards.len(), 3);
    }
}
