use mayi_autoplay::{simulate, RoundStatus, SimulationConfig, Simulator};
use mayi_core::{EventBus, GameConfig, Event};

fn seeded(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

#[test]
fn cards_are_conserved_every_turn() {
    for seed in 0..8 {
        let mut sim = Simulator::new(seeded(seed), &SimulationConfig::default()).expect("sim");
        let total = sim.round.card_count();
        assert_eq!(total, 104);
        for _ in 0..300 {
            if sim.round.is_over() {
                break;
            }
            sim.step().expect("step");
            assert_eq!(sim.round.card_count(), total);
        }
    }
}

#[test]
fn report_matches_round_outcome() {
    for seed in [3, 17, 2024] {
        let report = simulate(seeded(seed), &SimulationConfig::default()).expect("simulate");
        assert_eq!(report.seed, seed);
        assert_eq!(report.round, 1);
        assert_eq!(report.scores.len(), 5);
        match report.status {
            RoundStatus::WentOut => {
                let winner = report.winner.expect("winner");
                assert_eq!(report.scores[winner].points, 0);
                let last = report.turns.last().expect("turns");
                assert_eq!(last.seat, winner);
            }
            RoundStatus::MaxTurns => assert!(report.winner.is_none()),
        }
    }
}

#[test]
fn same_seed_plays_the_same_round() {
    let a = simulate(seeded(77), &SimulationConfig::default()).expect("simulate");
    let b = simulate(seeded(77), &SimulationConfig::default()).expect("simulate");
    assert_eq!(a.turns, b.turns);
    assert_eq!(a.winner, b.winner);
}

#[test]
fn turn_limit_stops_the_round() {
    let sim = SimulationConfig {
        max_turns: 3,
        ..SimulationConfig::default()
    };
    let report = simulate(seeded(1), &sim).expect("simulate");
    assert!(report.turns.len() <= 3);
    if report.status == RoundStatus::MaxTurns {
        assert_eq!(report.turns.len(), 3);
    }
}

#[test]
fn down_stacks_only_grow() {
    let mut sim = Simulator::new(seeded(9), &SimulationConfig::default()).expect("sim");
    let mut sizes = vec![0; sim.round.players.len()];
    for _ in 0..400 {
        if sim.round.is_over() {
            break;
        }
        sim.step().expect("step");
        for (seat, player) in sim.round.players.iter().enumerate() {
            assert!(player.down_cards.len() >= sizes[seat]);
            if !player.down_cards.is_empty() {
                assert!(player.down);
            }
            sizes[seat] = player.down_cards.len();
        }
    }
}

#[test]
fn events_follow_each_turn() {
    let mut events = EventBus::default();
    let round = mayi_core::RoundState::new(seeded(4), &mut events).expect("round");
    let mut sim = Simulator::from_round(round, events, &SimulationConfig::default());
    sim.step().expect("step");
    let drained: Vec<Event> = sim.events.drain().collect();
    assert!(matches!(drained.first(), Some(Event::RoundStarted { .. })));
    assert!(drained.iter().any(|e| matches!(e, Event::Drew { seat: 0, .. })));
    assert!(drained
        .iter()
        .any(|e| matches!(e, Event::Discarded { seat: 0, .. } | Event::WentOut { seat: 0 })));
}
