mod console;
mod render;

use anyhow::Context;
use clap::Parser;
use console::ConsoleDecider;
use log::LevelFilter;
use mayi_autoplay::{simulate, write_json, write_text, Robot, SimulationConfig};
use mayi_core::{EventBus, GameConfig, MeldMode, Player, RoundError, RoundState};
use mayi_data::{load_config_file, load_game_config, validate_config};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

const ASSETS_DIR: &str = "assets";
const HUMAN_SEAT: usize = 0;

/// Play the first round of "May I?" against four computer opponents.
#[derive(Debug, Parser)]
#[command(name = "may-i", version)]
struct Cli {
    /// Config file; `assets/config.json` is used when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Shuffle seed, for replaying a deal.
    #[arg(long)]
    seed: Option<u64>,
    /// Let robots play every seat and print a summary.
    #[arg(long)]
    auto: bool,
    /// Show the whole discard pile and log at debug level.
    #[arg(long, short)]
    verbose: bool,
    /// Write the log to this file.
    #[arg(long)]
    log: Option<PathBuf>,
    /// With `--auto`, also save the round report (`.json` or text).
    #[arg(long, requires = "auto")]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref(), cli.verbose)?;
    let config = load_config(&cli)?;
    if cli.auto {
        run_auto(config, cli.report.as_deref())
    } else {
        run_console(config)
    }
}

/// The console belongs to the game, so logs only ever go to a file.
fn init_logging(path: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let file =
        File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    simplelog::WriteLogger::init(level, config, file).context("initialize logger")?;
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => load_game_config(Path::new(ASSETS_DIR))?,
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.verbose |= cli.verbose;
    validate_config(&config)?;
    Ok(config)
}

fn run_auto(config: GameConfig, report_path: Option<&Path>) -> anyhow::Result<()> {
    let report = simulate(config, &SimulationConfig::default()).context("autoplay round")?;
    print!("{}", report.to_text_report());
    if let Some(path) = report_path {
        let written = if path.extension().is_some_and(|ext| ext == "json") {
            write_json(path, &report)
        } else {
            write_text(path, &report)
        };
        written.with_context(|| format!("write report {}", path.display()))?;
    }
    Ok(())
}

fn run_console(config: GameConfig) -> anyhow::Result<()> {
    let meld_mode = config.meld_mode;
    let verbose = config.verbose;
    let mut events = EventBus::default();
    let mut round = RoundState::new(config, &mut events).context("start round")?;
    print_events(&mut events, &round.players);

    let seats = round.players.iter().map(render::seat_name).collect();
    let stdin = io::stdin();
    let mut human = ConsoleDecider::new(stdin.lock(), io::stdout(), seats);
    let mut robot = Robot::default();

    while !round.is_over() {
        let played = if round.current == HUMAN_SEAT {
            println!("{}", render::table(&round, HUMAN_SEAT, verbose));
            round.play_turn(&mut human, meld_mode, &mut events)
        } else {
            round.play_turn(&mut robot, MeldMode::Auto, &mut events)
        };
        print_events(&mut events, &round.players);
        match played {
            Ok(_) => {}
            Err(RoundError::Abandoned) => {
                println!("Goodbye.");
                return Ok(());
            }
            Err(err) => return Err(err).context("play turn"),
        }
    }
    print!("{}", render::scores(&round));
    Ok(())
}

fn print_events(events: &mut EventBus, players: &[Player]) {
    for event in events.drain() {
        if let Some(line) = render::event_line(&event, players, HUMAN_SEAT) {
            println!("{line}");
        }
    }
}
