//! Table configuration: defaults, then a TOML file, then environment.
//!
//! Command-line flags are applied on top by each command.

use std::fs;

use holdem_ai::OpponentKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Seats at the table, the human included
    pub players: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub opponents: String,
    /// Seconds the human may think before being checked or folded
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub starting_stack: ValueSource,
    pub blinds: ValueSource,
    pub seed: ValueSource,
    pub opponents: ValueSource,
    pub timeout_secs: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            starting_stack: ValueSource::Default,
            blinds: ValueSource::Default,
            seed: ValueSource::Default,
            opponents: ValueSource::Default,
            timeout_secs: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 6,
            starting_stack: 1000,
            small_blind: 5,
            big_blind: 10,
            seed: None,
            opponents: "mixed".into(),
            timeout_secs: 300,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {e}"),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.blinds = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.blinds = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.opponents {
            cfg.opponents = v;
            sources.opponents = ValueSource::File;
        }
        if let Some(v) = f.timeout_secs {
            cfg.timeout_secs = v;
            sources.timeout_secs = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("HOLDEM_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(players) = env_value("HOLDEM_PLAYERS") {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid player count".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Some(stack) = env_value("HOLDEM_STACK") {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting stack".into()))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(blinds) = env_value("HOLDEM_BLINDS") {
        let (sb, bb) = crate::validation::parse_blinds(&blinds).map_err(ConfigError::Invalid)?;
        cfg.small_blind = sb;
        cfg.big_blind = bb;
        sources.blinds = ValueSource::Env;
    }
    if let Some(kind) = env_value("HOLDEM_OPPONENTS") {
        cfg.opponents = kind;
        sources.opponents = ValueSource::Env;
    }
    if let Some(secs) = env_value("HOLDEM_TIMEOUT") {
        cfg.timeout_secs = secs
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid timeout".into()))?;
        sources.timeout_secs = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    opponents: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

/// Checks a fully merged configuration, flags included.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(2..=9).contains(&cfg.players) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: players must be between 2 and 9".into(),
        ));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.players as u64 * u64::from(cfg.starting_stack) > u64::from(u32::MAX) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} players x {} chips exceeds the table limit of {}",
            cfg.players,
            cfg.starting_stack,
            u32::MAX
        )));
    }
    if cfg.small_blind == 0 || cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: blinds must satisfy 0 < small_blind <= big_blind".into(),
        ));
    }
    if cfg.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: timeout_secs must be >0".into(),
        ));
    }
    cfg.opponents
        .parse::<OpponentKind>()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {e}")))?;
    Ok(())
}
