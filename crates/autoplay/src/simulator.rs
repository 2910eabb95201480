use crate::{AutoplayError, RoundReport, RoundStatus, Robot, SimulationConfig, TurnRecord};
use mayi_core::{round_scores, EventBus, GameConfig, MeldMode, RoundState, TurnReport};

/// Plays a round with a robot in every seat, the human seat included.
#[derive(Debug)]
pub struct Simulator {
    pub round: RoundState,
    pub events: EventBus,
    robot: Robot,
    turns: Vec<TurnRecord>,
}

impl Simulator {
    pub fn new(config: GameConfig, sim: &SimulationConfig) -> Result<Self, AutoplayError> {
        let mut events = EventBus::default();
        let round = RoundState::new(config, &mut events)?;
        Ok(Self::from_round(round, events, sim))
    }

    pub fn from_round(round: RoundState, events: EventBus, sim: &SimulationConfig) -> Self {
        Self {
            round,
            events,
            robot: Robot::new(sim.robot),
            turns: Vec::new(),
        }
    }

    pub fn step(&mut self) -> Result<TurnReport, AutoplayError> {
        let turn = self.turns.len() as u32 + 1;
        let report = self
            .round
            .play_turn(&mut self.robot, MeldMode::Auto, &mut self.events)?;
        self.turns.push(TurnRecord::from_report(turn, &report));
        Ok(report)
    }

    /// Steps until someone goes out or `max_turns` turns have been played.
    pub fn run(&mut self, max_turns: u32) -> Result<RoundReport, AutoplayError> {
        while !self.round.is_over() && (self.turns.len() as u32) < max_turns {
            self.step()?;
        }
        let status = if self.round.is_over() {
            RoundStatus::WentOut
        } else {
            RoundStatus::MaxTurns
        };
        log::info!(
            "simulation finished: status={:?} turns={} winner={:?}",
            status,
            self.turns.len(),
            self.round.winner
        );
        Ok(RoundReport {
            status,
            seed: self.round.seed,
            round: self.round.def.ordinal,
            winner: self.round.winner,
            scores: round_scores(&self.round.players),
            turns: self.turns.clone(),
        })
    }
}

/// Builds and plays a whole robot round.
pub fn simulate(config: GameConfig, sim: &SimulationConfig) -> Result<RoundReport, AutoplayError> {
    let mut simulator = Simulator::new(config, sim)?;
    simulator.run(sim.max_turns)
}
