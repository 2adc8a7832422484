//! Table configuration resolved from defaults, a TOML file and the
//! environment, in that order of precedence.

use serde::{Deserialize, Serialize};
use std::fs;

use tablestakes_engine::options::GameOptions;
use tablestakes_engine::pot::OddChipRule;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub buy_in: u64,
    pub starting_blind: u64,
    /// Minutes between blind doublings; 0 turns doubling off
    pub raise_delay: u64,
    pub seed: Option<u64>,
    pub odd_chip: OddChipRule,
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
    pub buy_in: ValueSource,
    pub starting_blind: ValueSource,
    pub raise_delay: ValueSource,
    pub seed: ValueSource,
    pub odd_chip: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            buy_in: ValueSource::Default,
            starting_blind: ValueSource::Default,
            raise_delay: ValueSource::Default,
            seed: ValueSource::Default,
            odd_chip: ValueSource::Default,
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
        let options = GameOptions::default();
        Self {
            buy_in: options.buy_in,
            starting_blind: options.starting_blind,
            raise_delay: options.raise_delay,
            seed: None,
            odd_chip: options.odd_chip,
        }
    }
}

impl Config {
    /// Options every new table starts with.
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            blind: self.starting_blind,
            buy_in: self.buy_in,
            raise_delay: self.raise_delay,
            starting_blind: self.starting_blind,
            odd_chip: self.odd_chip,
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub const CONFIG_VAR: &str = "TABLESTAKES_CONFIG";
pub const SEED_VAR: &str = "TABLESTAKES_SEED";
pub const BUY_IN_VAR: &str = "TABLESTAKES_BUY_IN";
pub const BLIND_VAR: &str = "TABLESTAKES_BLIND";
pub const RAISE_DELAY_VAR: &str = "TABLESTAKES_RAISE_DELAY";

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves the configuration, reading variables through `var`.
pub fn load_from<F>(var: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    // empty variables count as unset
    let var = |key: &str| var(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_VAR) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.buy_in {
            cfg.buy_in = v;
            sources.buy_in = ValueSource::File;
        }
        if let Some(v) = f.starting_blind {
            cfg.starting_blind = v;
            sources.starting_blind = ValueSource::File;
        }
        if let Some(v) = f.raise_delay {
            cfg.raise_delay = v;
            sources.raise_delay = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.odd_chip {
            cfg.odd_chip = v;
            sources.odd_chip = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_VAR) {
        cfg.seed = Some(parse_number(&seed, "seed")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(buy_in) = var(BUY_IN_VAR) {
        cfg.buy_in = parse_number(&buy_in, "buy-in")?;
        sources.buy_in = ValueSource::Env;
    }
    if let Some(blind) = var(BLIND_VAR) {
        cfg.starting_blind = parse_number(&blind, "blind")?;
        sources.starting_blind = ValueSource::Env;
    }
    if let Some(delay) = var(RAISE_DELAY_VAR) {
        cfg.raise_delay = parse_number(&delay, "raise delay")?;
        sources.raise_delay = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FileConfig {
    #[serde(default)]
    buy_in: Option<u64>,
    #[serde(default)]
    starting_blind: Option<u64>,
    #[serde(default)]
    raise_delay: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    odd_chip: Option<OddChipRule>,
}

fn parse_number(value: &str, what: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", what, value)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.buy_in == 0 {
        return Err(ConfigError::Invalid("buy-in must be >0".into()));
    }
    Ok(())
}
