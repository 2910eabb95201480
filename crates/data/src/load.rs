use anyhow::{bail, Context};
use mayi_core::{round_def, GameConfig};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

/// Reads `config.json` from an assets directory, falling back to the
/// defaults when the file is absent.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    load_config_file(&path)
}

/// Reads and validates a config file. Missing fields take their defaults.
pub fn load_config_file(path: &Path) -> anyhow::Result<GameConfig> {
    let config: GameConfig = load_json(path)?;
    validate_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

pub fn parse_config(raw: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(raw).context("parse config")?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &GameConfig) -> anyhow::Result<()> {
    if config.decks == 0 {
        bail!("decks must be at least 1");
    }
    if config.hand_size == 0 {
        bail!("hand_size must be at least 1");
    }
    if config.opponents.is_empty() {
        bail!("at least one opponent is required");
    }
    let available = config.decks * 52;
    if available < config.cards_needed() {
        bail!(
            "{} deck(s) hold {} cards but dealing needs {}",
            config.decks,
            available,
            config.cards_needed()
        );
    }
    let mut names = HashSet::new();
    names.insert(config.player_name.as_str());
    for opponent in &config.opponents {
        if opponent.name.trim().is_empty() {
            bail!("opponent names must not be empty");
        }
        if !names.insert(opponent.name.as_str()) {
            bail!("duplicate seat name {}", opponent.name);
        }
    }
    let def = round_def(config.round)?;
    def.evaluator()
        .with_context(|| format!("round {} ({})", def.ordinal, def.name))?;
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
