use super::*;
use crate::{MeldMode, RankCounts};
use serde::{Deserialize, Serialize};

/// A hand card that can be attached to the down stack of seat `onto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldCandidate {
    pub card: Card,
    pub onto: usize,
}

impl RoundState {
    /// Seats to try when placing a card from `seat`: itself, then the rest in order.
    fn meld_targets(&self, seat: usize) -> impl Iterator<Item = usize> {
        let seats = self.players.len();
        std::iter::once(seat).chain((0..seats).filter(move |other| *other != seat))
    }

    /// Hand cards of `seat` whose rank already lies in some down stack.
    ///
    /// Ranks the hand still holds as a full natural group are left out.
    pub fn meld_candidates(&self, seat: usize) -> Result<Vec<MeldCandidate>, RoundError> {
        let hand = &self.player(seat)?.hand;
        let counts = RankCounts::of(hand.cards());
        let candidates = hand
            .iter()
            .filter(|card| card.is_wild() || counts.get(card.rank) < 3)
            .filter_map(|card| {
                self.meld_targets(seat)
                    .find(|target| {
                        self.players[*target]
                            .down_cards
                            .iter()
                            .any(|down| down.rank == card.rank)
                    })
                    .map(|onto| MeldCandidate { card: *card, onto })
            })
            .collect();
        Ok(candidates)
    }

    /// Attaches matching hand cards to down stacks. Candidates are fixed
    /// before the first card moves.
    pub fn meld(
        &mut self,
        seat: usize,
        mode: MeldMode,
        decider: &mut dyn Decider,
        events: &mut EventBus,
    ) -> Result<Vec<MeldCandidate>, RoundError> {
        self.ensure_open()?;
        if !self.player(seat)?.down {
            return Err(RoundError::NotDown(seat));
        }
        let candidates = self.meld_candidates(seat)?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let auto = match mode {
            MeldMode::Auto => true,
            MeldMode::Manual => false,
            MeldMode::Ask => ask_confirm(
                decider,
                &Question::MeldAll {
                    candidates: &candidates,
                },
            )?
            .is_yes(),
        };

        let mut melded = Vec::new();
        for candidate in &candidates {
            if !auto
                && !ask_confirm(decider, &Question::Meld { candidate })?.is_yes()
            {
                continue;
            }
            if !self.players[seat].hand.remove(&candidate.card) {
                continue;
            }
            self.players[candidate.onto].down_cards.add(candidate.card);
            log::debug!(
                "seat {} melded {} onto seat {}",
                seat,
                candidate.card,
                candidate.onto
            );
            events.push(Event::Melded {
                seat,
                card: candidate.card,
                onto: candidate.onto,
            });
            melded.push(*candidate);
        }
        self.go_out_if_empty(seat, events);
        Ok(melded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::testing::*;
    use crate::{Reply, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    /// Seat 0 and seat 2 are down; seat 1 is not.
    fn table() -> RoundState {
        let mut me = Player::new("You", None);
        me.down = true;
        me.down_cards = Stack::from(vec![
            card(Rank::Six, Suit::Clubs),
            card(Rank::Six, Suit::Hearts),
            card(Rank::Six, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
        ]);
        me.hand = Stack::from(vec![
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Jack, Suit::Diamonds),
            card(Rank::Queen, Suit::Diamonds),
        ]);
        let idle = Player::new("Blinky", None);
        let mut other = Player::new("Pinky", None);
        other.down = true;
        other.down_cards = Stack::from(vec![
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Jack, Suit::Clubs),
            card(Rank::Jack, Suit::Hearts),
            card(Rank::Jack, Suit::Spades),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
        ]);
        RoundState::from_table(
            GameConfig::default(),
            vec![me, idle, other],
            Stack::standard_decks(1),
            Stack::from(vec![card(Rank::Four, Suit::Clubs)]),
        )
        .unwrap()
    }

    #[test]
    fn candidates_prefer_own_stack() {
        let round = table();
        let candidates = round.meld_candidates(0).unwrap();
        assert_eq!(
            candidates,
            vec![
                MeldCandidate {
                    card: card(Rank::Six, Suit::Diamonds),
                    onto: 0
                },
                MeldCandidate {
                    card: card(Rank::Jack, Suit::Diamonds),
                    onto: 2
                },
            ]
        );
    }

    #[test]
    fn full_groups_in_hand_are_not_candidates() {
        let mut round = table();
        round.players[0].hand.add_all([
            card(Rank::Jack, Suit::Clubs),
            card(Rank::Jack, Suit::Hearts),
        ]);
        let candidates = round.meld_candidates(0).unwrap();
        assert!(candidates.iter().all(|c| c.card.rank != Rank::Jack));
    }

    #[test]
    fn auto_meld_moves_every_candidate() {
        let mut round = table();
        let before = round.card_count();
        let mut decider = ScriptedDecider::default();
        let melded = round
            .meld(0, MeldMode::Auto, &mut decider, &mut EventBus::default())
            .unwrap();
        assert_eq!(melded.len(), 2);
        assert_eq!(decider.asked, 0);
        assert_eq!(round.players[0].hand.cards(), &[card(Rank::Queen, Suit::Diamonds)]);
        assert_eq!(round.players[0].down_cards.len(), 7);
        assert_eq!(round.players[2].down_cards.len(), 7);
        assert_eq!(round.card_count(), before);
    }

    #[test]
    fn manual_meld_asks_per_card() {
        let mut round = table();
        let mut decider = ScriptedDecider::new([
            no(),
            Scripted::Confirm(Reply::Invalid),
            no(),
            yes(),
        ]);
        let melded = round
            .meld(0, MeldMode::Ask, &mut decider, &mut EventBus::default())
            .unwrap();
        assert_eq!(
            melded,
            vec![MeldCandidate {
                card: card(Rank::Jack, Suit::Diamonds),
                onto: 2
            }]
        );
        assert!(round.players[0].hand.iter().any(|c| c.rank == Rank::Six));
        assert_eq!(round.players[0].down_cards.len(), 6);
    }

    #[test]
    fn manual_mode_skips_the_meld_all_question() {
        let mut round = table();
        // a MeldAll question would take the first yes and meld both cards
        let mut decider = ScriptedDecider::new([yes(), no()]);
        let mut events = EventBus::default();
        let melded = round
            .meld(0, MeldMode::Manual, &mut decider, &mut events)
            .unwrap();
        assert_eq!(decider.asked, 2);
        assert!(decider.replies.is_empty());
        assert_eq!(
            melded,
            vec![MeldCandidate {
                card: card(Rank::Six, Suit::Diamonds),
                onto: 0
            }]
        );
        assert_eq!(round.players[0].down_cards.len(), 7);
        assert_eq!(round.players[2].down_cards.len(), 6);
        assert_eq!(events.drain().count(), 1);
    }

    #[test]
    fn melding_the_last_card_goes_out() {
        let mut round = table();
        round.players[0].hand = Stack::from(vec![card(Rank::Nine, Suit::Diamonds)]);
        let mut events = EventBus::default();
        round
            .meld(0, MeldMode::Auto, &mut ScriptedDecider::default(), &mut events)
            .unwrap();
        assert!(round.is_over());
        assert_eq!(round.winner, Some(0));
    }

    #[test]
    fn only_down_players_meld() {
        let mut round = table();
        round.players[1].hand.add(card(Rank::Six, Suit::Spades));
        let err = round
            .meld(1, MeldMode::Auto, &mut ScriptedDecider::default(), &mut EventBus::default())
            .unwrap_err();
        assert!(matches!(err, RoundError::NotDown(1)));
        assert_eq!(round.players[1].hand.len(), 1);
    }

    #[test]
    fn no_candidates_asks_nothing() {
        let mut round = table();
        round.players[0].hand = Stack::from(vec![card(Rank::Ace, Suit::Spades)]);
        let mut decider = ScriptedDecider::default();
        let melded = round
            .meld(0, MeldMode::Ask, &mut decider, &mut EventBus::default())
            .unwrap();
        assert!(melded.is_empty());
        assert_eq!(decider.asked, 0);
    }
}
