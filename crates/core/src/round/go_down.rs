use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoDown {
    /// True when the cards were picked without asking.
    pub auto: bool,
    pub cards: Vec<Card>,
}

impl RoundState {
    /// Lays down a satisfied hand and marks the seat as down.
    ///
    /// A hand with at most `groups_needed` qualifying ranks, or with exactly
    /// three cards per needed group, goes down whole. Anything else asks the
    /// decider to pick the groups, then offers to add the wild cards.
    pub fn attempt_go_down(
        &mut self,
        seat: usize,
        decider: &mut dyn Decider,
        events: &mut EventBus,
    ) -> Result<GoDown, RoundError> {
        self.ensure_open()?;
        if self.player(seat)?.down {
            return Err(RoundError::AlreadyDown(seat));
        }
        let victory = self.evaluate(seat)?;
        if !victory.satisfied {
            return Err(RoundError::NotSatisfied);
        }
        assert!(
            subset_of(&victory.cards, self.players[seat].hand.cards()),
            "victory cards must come from the evaluated hand"
        );

        let needed = self.def.groups_needed;
        let full_size = needed * 3;
        let auto = victory.ranks.len() <= needed || victory.cards.len() == full_size;
        let cards = if auto {
            self.players[seat].lay_down_where(|card| victory.ranks.contains(&card.rank))
        } else {
            self.pick_down_groups(seat, &victory, decider)?
        };

        let player = &mut self.players[seat];
        player.down = true;
        log::info!(
            "{} went down with {} cards (auto={})",
            player.name,
            cards.len(),
            auto
        );
        events.push(Event::WentDown {
            seat,
            cards: cards.clone(),
            auto,
        });
        self.go_out_if_empty(seat, events);
        Ok(GoDown { auto, cards })
    }

    /// Asks for every group and the wild decision before any card moves, so
    /// a quit leaves the hand untouched.
    fn pick_down_groups(
        &mut self,
        seat: usize,
        victory: &Victory,
        decider: &mut dyn Decider,
    ) -> Result<Vec<Card>, RoundError> {
        let needed = self.def.groups_needed;
        let groups = victory.groups();
        assert!(
            groups.iter().filter(|group| group.selectable()).count() >= needed,
            "a satisfied hand has enough natural groups"
        );

        let mut picked: Vec<usize> = Vec::with_capacity(needed);
        for pick in 1..=needed {
            let question = Question::DownGroup {
                groups: &groups,
                picked: &picked,
                pick,
                needed,
            };
            let index = ask_choice(decider, &question, |index| {
                groups.get(index).is_some_and(|group| group.selectable())
                    && !picked.contains(&index)
            })?;
            picked.push(index);
        }
        let ranks: BTreeSet<Rank> = picked.iter().map(|index| groups[*index].rank).collect();

        let hand = &self.players[seat].hand;
        let going_down = hand.iter().filter(|card| ranks.contains(&card.rank)).count();
        let mut add_wilds = false;
        if victory.has_wild() && going_down <= needed * 3 {
            let wilds: Vec<Card> = hand.iter().filter(|c| c.is_wild()).copied().collect();
            add_wilds = !wilds.is_empty()
                && ask_confirm(decider, &Question::AddWilds { wilds: &wilds })?.is_yes();
        }

        Ok(self.players[seat]
            .lay_down_where(|card| ranks.contains(&card.rank) || (add_wilds && card.is_wild())))
    }
}
