use crate::RobotConfig;
use mayi_core::{Card, Decider, Decision, Question, Rank, RankCounts, RankGroup, Reply};
use std::collections::BTreeSet;

/// Computer opponent. Goes down and melds whenever it can; draw and discard
/// follow the heuristics below.
#[derive(Debug, Clone, Copy, Default)]
pub struct Robot {
    pub config: RobotConfig,
}

impl Robot {
    pub fn new(config: RobotConfig) -> Self {
        Self { config }
    }
}

/// Whether the top discard is worth taking over a blind draw.
pub fn wants_discard(hand: &[Card], top: Option<&Card>, config: &RobotConfig) -> bool {
    let Some(top) = top else {
        return false;
    };
    let matches = hand.iter().filter(|card| card.rank == top.rank).count();
    matches >= config.take_discard_min_matches.max(1)
}

/// Picks the hand index to throw away.
///
/// Prefers the highest-placed non-wild singleton whose rank nobody has down,
/// then any non-wild singleton, then the last non-wild card. Wilds only go
/// when nothing else is left.
pub fn choose_discard(
    hand: &[Card],
    down_ranks: &BTreeSet<Rank>,
    config: &RobotConfig,
) -> Option<usize> {
    if hand.is_empty() {
        return None;
    }
    let counts = RankCounts::of(hand);
    let singleton = |skip_down: bool| {
        hand.iter()
            .enumerate()
            .filter(|(_, card)| !card.is_wild() && counts.get(card.rank) == 1)
            .filter(|(_, card)| !(skip_down && down_ranks.contains(&card.rank)))
            .map(|(idx, _)| idx)
            .max()
    };
    let safe = if config.avoid_down_ranks {
        singleton(true)
    } else {
        None
    };
    safe.or_else(|| singleton(false))
        .or_else(|| hand.iter().rposition(|card| !card.is_wild()))
        .or(Some(hand.len() - 1))
}

/// Largest selectable group not yet taken; ties go to the lower index.
fn choose_group(groups: &[RankGroup], picked: &[usize]) -> Option<usize> {
    groups
        .iter()
        .enumerate()
        .filter(|(idx, group)| group.selectable() && !picked.contains(idx))
        .max_by(|(a_idx, a), (b_idx, b)| {
            a.cards
                .len()
                .cmp(&b.cards.len())
                .then_with(|| b_idx.cmp(a_idx))
        })
        .map(|(idx, _)| idx)
}

impl Decider for Robot {
    fn confirm(&mut self, question: &Question<'_>) -> Reply<Decision> {
        match question {
            Question::GoDown { .. }
            | Question::AddWilds { .. }
            | Question::MeldAll { .. }
            | Question::Meld { .. } => Reply::Valid(Decision::Yes),
            _ => Reply::Invalid,
        }
    }

    fn choose(&mut self, question: &Question<'_>) -> Reply<usize> {
        let choice = match question {
            Question::DrawSource {
                hand,
                top_discard,
                deck_available,
            } => Some(usize::from(
                !*deck_available || wants_discard(hand, *top_discard, &self.config),
            )),
            Question::DownGroup { groups, picked, .. } => choose_group(groups, picked),
            Question::Discard { hand, down_ranks } => {
                choose_discard(hand, down_ranks, &self.config)
            }
            _ => None,
        };
        match choice {
            Some(index) => Reply::Valid(index),
            None => Reply::Invalid,
        }
    }
}
