use super::*;
use crate::{DrawSource, MeldMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub seat: usize,
    pub source: DrawSource,
    pub drew: Card,
    pub went_down: Option<GoDown>,
    pub melded: Vec<MeldCandidate>,
    pub discarded: Option<Card>,
    pub went_out: bool,
}

impl RoundState {
    /// Draws one card for the seat whose turn it is.
    pub fn draw(&mut self, source: DrawSource, events: &mut EventBus) -> Result<Card, RoundError> {
        if self.phase != Phase::Draw {
            return Err(RoundError::InvalidPhase(self.phase));
        }
        let card = match source {
            DrawSource::Deck => {
                if self.deck.is_empty() {
                    self.refill_deck(events)?;
                }
                self.deck.deal_one().ok_or(RoundError::DeckExhausted)?
            }
            DrawSource::DiscardPile => self
                .discard_pile
                .deal_one()
                .ok_or(RoundError::EmptyDiscardPile)?,
        };
        let seat = self.current;
        let hand = &mut self.players[seat].hand;
        hand.add(card);
        hand.sort();
        log::debug!("seat {} drew {} from {:?}", seat, card, source);
        events.push(Event::Drew { seat, source, card });
        self.phase = Phase::Discard;
        Ok(card)
    }

    /// Moves hand card `index` of the current seat onto the discard pile
    /// and passes the turn.
    pub fn discard(&mut self, index: usize, events: &mut EventBus) -> Result<Card, RoundError> {
        if self.phase != Phase::Discard {
            return Err(RoundError::InvalidPhase(self.phase));
        }
        let seat = self.current;
        let card = self.players[seat]
            .hand
            .remove_at(index)
            .ok_or(RoundError::InvalidSelection)?;
        self.discard_pile.add(card);
        log::debug!("seat {} discarded {}", seat, card);
        events.push(Event::Discarded { seat, card });
        if !self.go_out_if_empty(seat, events) {
            self.current = (seat + 1) % self.players.len();
            self.phase = Phase::Draw;
        }
        Ok(card)
    }

    /// The deck has a card, or can be refilled from under the top discard.
    fn can_draw_from_deck(&self) -> bool {
        !self.deck.is_empty() || self.discard_pile.len() > 1
    }

    /// Shuffles everything under the top discard back into the deck.
    fn refill_deck(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        let cards = self.discard_pile.take_all_but_top();
        if cards.is_empty() {
            return Err(RoundError::DeckExhausted);
        }
        let count = cards.len();
        self.deck.add_all(cards);
        self.deck.shuffle(&mut self.rng);
        log::warn!("deck ran out, reshuffled {} discards", count);
        events.push(Event::DeckReshuffled { cards: count });
        Ok(())
    }

    /// Plays one full turn for the current seat: draw, go down or meld, discard.
    ///
    /// Melding only happens for a seat that was already down when its turn began.
    pub fn play_turn(
        &mut self,
        decider: &mut dyn Decider,
        meld_mode: MeldMode,
        events: &mut EventBus,
    ) -> Result<TurnReport, RoundError> {
        if self.phase != Phase::Draw {
            return Err(RoundError::InvalidPhase(self.phase));
        }
        let seat = self.current;
        events.push(Event::TurnStarted { seat });
        let was_down = self.players[seat].down;

        let deck_available = self.can_draw_from_deck();
        let discard_available = !self.discard_pile.is_empty();
        if !deck_available && !discard_available {
            return Err(RoundError::DeckExhausted);
        }
        let source = {
            let question = Question::DrawSource {
                hand: self.players[seat].hand.cards(),
                top_discard: self.discard_pile.top(),
                deck_available,
            };
            match ask_choice(decider, &question, |index| {
                (index == 0 && deck_available) || (index == 1 && discard_available)
            })? {
                0 => DrawSource::Deck,
                _ => DrawSource::DiscardPile,
            }
        };
        let drew = self.draw(source, events)?;

        let mut report = TurnReport {
            seat,
            source,
            drew,
            went_down: None,
            melded: Vec::new(),
            discarded: None,
            went_out: false,
        };

        if was_down {
            report.melded = self.meld(seat, meld_mode, decider, events)?;
        } else {
            let victory = self.evaluate(seat)?;
            if victory.satisfied
                && ask_confirm(
                    decider,
                    &Question::GoDown {
                        victory: &victory.cards,
                    },
                )?
                .is_yes()
            {
                report.went_down = Some(self.attempt_go_down(seat, decider, events)?);
            }
        }

        if !self.is_over() {
            let down_ranks = self.down_ranks();
            let hand_len = self.players[seat].hand.len();
            let question = Question::Discard {
                hand: self.players[seat].hand.cards(),
                down_ranks: &down_ranks,
            };
            let index = ask_choice(decider, &question, |index| index < hand_len)?;
            report.discarded = Some(self.discard(index, events)?);
        }
        report.went_out = self.is_over();
        Ok(report)
    }
}
