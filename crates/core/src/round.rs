use crate::{
    down_ranks, round_def, Card, Decider, Decision, Event, EventBus, GameConfig, Phase, Player,
    Question, Rank, Reply, RoundDef, Stack, Victory,
};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::BTreeSet;
use thiserror::Error;

mod go_down;
mod meld;
mod turn;

pub use go_down::GoDown;
pub use meld::MeldCandidate;
pub use turn::TurnReport;

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("round {0} does not exist")]
    UnknownRound(u8),
    #[error("round {0} is not implemented")]
    UnsupportedRound(u8),
    #[error("need {needed} cards to deal, deck has {available}")]
    NotEnoughCards { needed: usize, available: usize },
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("invalid seat {0}")]
    InvalidSeat(usize),
    #[error("seat {0} is already down")]
    AlreadyDown(usize),
    #[error("seat {0} is not down")]
    NotDown(usize),
    #[error("hand does not satisfy the round")]
    NotSatisfied,
    #[error("discard pile is empty")]
    EmptyDiscardPile,
    #[error("no cards left to draw")]
    DeckExhausted,
    #[error("invalid card selection")]
    InvalidSelection,
    #[error("player left the table")]
    Abandoned,
}

#[derive(Debug)]
pub struct RoundState {
    pub config: GameConfig,
    pub def: &'static RoundDef,
    pub seed: u64,
    rng: StdRng,
    pub deck: Stack,
    pub discard_pile: Stack,
    /// Seat 0 is the human player.
    pub players: Vec<Player>,
    pub current: usize,
    pub phase: Phase,
    pub winner: Option<usize>,
}

impl RoundState {
    /// Shuffles, deals every seat and turns up the first discard.
    pub fn new(config: GameConfig, events: &mut EventBus) -> Result<Self, RoundError> {
        let def = playable_round(config.round)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Stack::standard_decks(config.decks);
        deck.shuffle(&mut rng);
        let needed = config.cards_needed();
        if deck.len() < needed {
            return Err(RoundError::NotEnoughCards {
                needed,
                available: deck.len(),
            });
        }

        let mut players = Vec::with_capacity(config.seats());
        players.push(Player::new(config.player_name.clone(), None));
        for opponent in &config.opponents {
            players.push(Player::new(opponent.name.clone(), Some(opponent.color)));
        }
        for player in &mut players {
            player.hand.add_all(deck.deal(config.hand_size));
            player.hand.sort();
        }
        let mut discard_pile = Stack::new();
        discard_pile.add_all(deck.deal(1));

        log::info!(
            "round {} started: seed={} seats={} deck={}",
            def.ordinal,
            seed,
            players.len(),
            deck.len()
        );
        events.push(Event::RoundStarted {
            round: def.ordinal,
            name: def.name.to_string(),
            seed,
        });
        Ok(Self {
            config,
            def,
            seed,
            rng,
            deck,
            discard_pile,
            players,
            current: 0,
            phase: Phase::Draw,
            winner: None,
        })
    }

    /// Builds a round around a prepared table. Seat 0 moves first.
    pub fn from_table(
        config: GameConfig,
        players: Vec<Player>,
        deck: Stack,
        discard_pile: Stack,
    ) -> Result<Self, RoundError> {
        if players.is_empty() {
            return Err(RoundError::InvalidSeat(0));
        }
        let def = playable_round(config.round)?;
        let seed = config.seed.unwrap_or_default();
        Ok(Self {
            config,
            def,
            seed,
            rng: StdRng::seed_from_u64(seed),
            deck,
            discard_pile,
            players,
            current: 0,
            phase: Phase::Draw,
            winner: None,
        })
    }

    pub fn player(&self, seat: usize) -> Result<&Player, RoundError> {
        self.players.get(seat).ok_or(RoundError::InvalidSeat(seat))
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Runs the round's pattern against a seat's current hand.
    pub fn evaluate(&self, seat: usize) -> Result<Victory, RoundError> {
        let evaluator = self.def.evaluator()?;
        Ok(evaluator(self.player(seat)?.hand.cards()))
    }

    pub fn down_ranks(&self) -> BTreeSet<Rank> {
        down_ranks(&self.players)
    }

    /// Cards across the deck, the discard pile, every hand and down stack.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.discard_pile.len()
            + self
                .players
                .iter()
                .map(Player::card_count)
                .sum::<usize>()
    }

    fn ensure_open(&self) -> Result<(), RoundError> {
        if self.phase == Phase::Over {
            return Err(RoundError::InvalidPhase(self.phase));
        }
        Ok(())
    }

    fn go_out_if_empty(&mut self, seat: usize, events: &mut EventBus) -> bool {
        if !self.players[seat].hand.is_empty() {
            return false;
        }
        log::info!("{} went out", self.players[seat].name);
        self.phase = Phase::Over;
        self.winner = Some(seat);
        events.push(Event::WentOut { seat });
        true
    }
}

fn playable_round(ordinal: u8) -> Result<&'static RoundDef, RoundError> {
    let def = round_def(ordinal)?;
    def.evaluator()?;
    Ok(def)
}

fn ask_confirm(decider: &mut dyn Decider, question: &Question<'_>) -> Result<Decision, RoundError> {
    loop {
        match decider.confirm(question) {
            Reply::Valid(decision) => return Ok(decision),
            Reply::Invalid => log::debug!("invalid reply, asking again"),
            Reply::Quit => return Err(RoundError::Abandoned),
        }
    }
}

fn ask_choice(
    decider: &mut dyn Decider,
    question: &Question<'_>,
    valid: impl Fn(usize) -> bool,
) -> Result<usize, RoundError> {
    loop {
        match decider.choose(question) {
            Reply::Valid(index) if valid(index) => return Ok(index),
            Reply::Valid(index) => log::debug!("rejected choice {index}, asking again"),
            Reply::Invalid => log::debug!("invalid reply, asking again"),
            Reply::Quit => return Err(RoundError::Abandoned),
        }
    }
}

fn subset_of(cards: &[Card], hand: &[Card]) -> bool {
    let mut remaining = hand.to_vec();
    cards.iter().all(|card| match remaining.iter().position(|held| held == card) {
        Some(index) => {
            remaining.swap_remove(index);
            true
        }
        None => false,
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::{Decider, Decision, Question, Reply};
    use std::collections::VecDeque;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Scripted {
        Confirm(Reply<Decision>),
        Choose(Reply<usize>),
    }

    /// Replays a fixed queue of replies and records how many were used.
    #[derive(Debug, Default)]
    pub struct ScriptedDecider {
        pub replies: VecDeque<Scripted>,
        pub asked: usize,
    }

    impl ScriptedDecider {
        pub fn new(replies: impl IntoIterator<Item = Scripted>) -> Self {
            Self {
                replies: replies.into_iter().collect(),
                asked: 0,
            }
        }
    }

    impl Decider for ScriptedDecider {
        fn confirm(&mut self, question: &Question<'_>) -> Reply<Decision> {
            self.asked += 1;
            match self.replies.pop_front() {
                Some(Scripted::Confirm(reply)) => reply,
                other => panic!("expected a confirm reply for {question:?}, got {other:?}"),
            }
        }

        fn choose(&mut self, question: &Question<'_>) -> Reply<usize> {
            self.asked += 1;
            match self.replies.pop_front() {
                Some(Scripted::Choose(reply)) => reply,
                other => panic!("expected a choose reply for {question:?}, got {other:?}"),
            }
        }
    }

    pub fn yes() -> Scripted {
        Scripted::Confirm(Reply::Valid(Decision::Yes))
    }

    pub fn no() -> Scripted {
        Scripted::Confirm(Reply::Valid(Decision::No))
    }

    pub fn pick(index: usize) -> Scripted {
        Scripted::Choose(Reply::Valid(index))
    }
}
