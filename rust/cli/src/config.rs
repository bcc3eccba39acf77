//! Layered simulation configuration.
//!
//! Values start from built-in defaults, are overridden by a TOML file named
//! by `CARDSIM_CONFIG`, then by individual `CARDSIM_*` environment variables.
//! Command-line flags are applied on top by the command handlers. The source
//! of every value is tracked so `cfg` can report it.

use cardsim_engine::betting::BettingKind;
use cardsim_engine::player::{DEFAULT_MAX_ROUNDS, DEFAULT_TABLE_LIMIT, STARTING_STAKE};
use cardsim_engine::session::SessionConfig;
use cardsim_engine::strategy::{DEFAULT_HIT_THRESHOLD, DealerRule};
use cardsim_engine::table::TableConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_CONFIG: &str = "CARDSIM_CONFIG";
pub const ENV_DECKS: &str = "CARDSIM_DECKS";
pub const ENV_BURN: &str = "CARDSIM_BURN";
pub const ENV_STAKE: &str = "CARDSIM_STAKE";
pub const ENV_LIMIT: &str = "CARDSIM_LIMIT";
pub const ENV_BETTING: &str = "CARDSIM_BETTING";
pub const ENV_HIT_THRESHOLD: &str = "CARDSIM_HIT_THRESHOLD";
pub const ENV_DEALER_RULE: &str = "CARDSIM_DEALER_RULE";
pub const ENV_ROUNDS: &str = "CARDSIM_ROUNDS";
pub const ENV_SESSIONS: &str = "CARDSIM_SESSIONS";
pub const ENV_SEED: &str = "CARDSIM_SEED";

pub const DEFAULT_SESSIONS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub decks: usize,
    pub burn: bool,
    pub stake: u32,
    pub limit: u32,
    pub betting: BettingKind,
    pub hit_threshold: u32,
    pub dealer_rule: DealerRule,
    pub rounds: u32,
    pub sessions: u64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decks: 1,
            burn: false,
            stake: STARTING_STAKE,
            limit: DEFAULT_TABLE_LIMIT,
            betting: BettingKind::Flat,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
            dealer_rule: DealerRule::Hit17,
            rounds: DEFAULT_MAX_ROUNDS,
            sessions: DEFAULT_SESSIONS,
            seed: None,
        }
    }
}

impl Config {
    /// Session parameters for one session seeded with `seed`.
    pub fn session_config(&self, seed: u64) -> SessionConfig {
        SessionConfig {
            table: TableConfig {
                num_decks: self.decks,
                burn: self.burn,
                seed: Some(seed),
            },
            betting: self.betting,
            hit_threshold: self.hit_threshold,
            dealer_rule: self.dealer_rule,
            stake: self.stake,
            max_rounds: self.rounds,
            limit: Some(self.limit),
        }
    }
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
    pub decks: ValueSource,
    pub burn: ValueSource,
    pub stake: ValueSource,
    pub limit: ValueSource,
    pub betting: ValueSource,
    pub hit_threshold: ValueSource,
    pub dealer_rule: ValueSource,
    pub rounds: ValueSource,
    pub sessions: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            burn: ValueSource::Default,
            stake: ValueSource::Default,
            limit: ValueSource::Default,
            betting: ValueSource::Default,
            hit_threshold: ValueSource::Default,
            dealer_rule: ValueSource::Default,
            rounds: ValueSource::Default,
            sessions: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, toml::from_str(&s)?)?;
    }

    if let Some(v) = env_value(ENV_DECKS)? {
        cfg.decks = v;
        sources.decks = ValueSource::Env;
    }
    if let Some(v) = std::env::var(ENV_BURN).ok().filter(|v| !v.is_empty()) {
        cfg.burn = parse_bool(&v)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid {}: {}", ENV_BURN, v)))?;
        sources.burn = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_STAKE)? {
        cfg.stake = v;
        sources.stake = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_LIMIT)? {
        cfg.limit = v;
        sources.limit = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_BETTING)? {
        cfg.betting = v;
        sources.betting = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_HIT_THRESHOLD)? {
        cfg.hit_threshold = v;
        sources.hit_threshold = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_DEALER_RULE)? {
        cfg.dealer_rule = v;
        sources.dealer_rule = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_ROUNDS)? {
        cfg.rounds = v;
        sources.rounds = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_SESSIONS)? {
        cfg.sessions = v;
        sources.sessions = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_SEED)? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    decks: Option<usize>,
    #[serde(default)]
    burn: Option<bool>,
    #[serde(default)]
    stake: Option<u32>,
    #[serde(default)]
    limit: Option<u32>,
    #[serde(default)]
    betting: Option<String>,
    #[serde(default)]
    hit_threshold: Option<u32>,
    #[serde(default)]
    dealer_rule: Option<String>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    sessions: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn apply_file(
    cfg: &mut Config,
    sources: &mut ConfigSources,
    f: FileConfig,
) -> Result<(), ConfigError> {
    if let Some(v) = f.decks {
        cfg.decks = v;
        sources.decks = ValueSource::File;
    }
    if let Some(v) = f.burn {
        cfg.burn = v;
        sources.burn = ValueSource::File;
    }
    if let Some(v) = f.stake {
        cfg.stake = v;
        sources.stake = ValueSource::File;
    }
    if let Some(v) = f.limit {
        cfg.limit = v;
        sources.limit = ValueSource::File;
    }
    if let Some(v) = f.betting {
        cfg.betting = v
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{}", e)))?;
        sources.betting = ValueSource::File;
    }
    if let Some(v) = f.hit_threshold {
        cfg.hit_threshold = v;
        sources.hit_threshold = ValueSource::File;
    }
    if let Some(v) = f.dealer_rule {
        cfg.dealer_rule = v
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{}", e)))?;
        sources.dealer_rule = ValueSource::File;
    }
    if let Some(v) = f.rounds {
        cfg.rounds = v;
        sources.rounds = ValueSource::File;
    }
    if let Some(v) = f.sessions {
        cfg.sessions = v;
        sources.sessions = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    Ok(())
}

/// Reads and parses an environment variable; unset or empty means `None`.
fn env_value<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Invalid(format!("Invalid {}: {}", name, e))),
        _ => Ok(None),
    }
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.decks == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: decks must be >=1".into(),
        ));
    }
    if cfg.stake == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: stake must be >0".into(),
        ));
    }
    if cfg.limit == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: limit must be >=1".into(),
        ));
    }
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >=1".into(),
        ));
    }
    if cfg.sessions == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: sessions must be >=1".into(),
        ));
    }
    if cfg.hit_threshold > 21 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hit_threshold must be <=21".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const ALL_VARS: &[&str] = &[
        ENV_CONFIG,
        ENV_DECKS,
        ENV_BURN,
        ENV_STAKE,
        ENV_LIMIT,
        ENV_BETTING,
        ENV_HIT_THRESHOLD,
        ENV_DEALER_RULE,
        ENV_ROUNDS,
        ENV_SESSIONS,
        ENV_SEED,
    ];

    fn clear_env() {
        for v in ALL_VARS {
            unsafe {
                std::env::remove_var(v);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.betting, ValueSource::Default);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn file_values_then_env_overrides() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "decks = 6\nbetting = \"Martingale\"\ndealer_rule = \"Stand17\"\nseed = 456"
        )
        .unwrap();
        unsafe {
            std::env::set_var(ENV_CONFIG, file.path());
            std::env::set_var(ENV_SEED, "123");
        }

        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.decks, 6);
        assert_eq!(resolved.sources.decks, ValueSource::File);
        assert_eq!(resolved.config.betting, BettingKind::Martingale);
        assert_eq!(resolved.config.dealer_rule, DealerRule::Stand17);
        assert_eq!(resolved.config.seed, Some(123));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.sources.stake, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn unknown_betting_name_is_invalid() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_BETTING, "labouchere");
        }
        let err = load_with_sources().unwrap_err();
        clear_env();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("labouchere"));
    }

    #[test]
    #[serial]
    fn zero_decks_fails_validation() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_DECKS, "0");
        }
        let err = load().unwrap_err();
        clear_env();
        assert!(err.to_string().contains("decks must be >=1"));
    }

    #[test]
    #[serial]
    fn burn_accepts_boolean_words() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_BURN, "on");
        }
        let cfg = load().unwrap();
        clear_env();
        assert!(cfg.burn);
    }

    #[test]
    #[serial]
    fn limit_from_file_and_env() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "limit = 40").unwrap();
        unsafe {
            std::env::set_var(ENV_CONFIG, file.path());
        }
        let from_file = load_with_sources().unwrap();
        unsafe {
            std::env::set_var(ENV_LIMIT, "12");
        }
        let from_env = load_with_sources().unwrap();
        unsafe {
            std::env::set_var(ENV_LIMIT, "0");
        }
        let zero = load();
        clear_env();

        assert_eq!(from_file.config.limit, 40);
        assert_eq!(from_file.sources.limit, ValueSource::File);
        assert_eq!(from_env.config.limit, 12);
        assert_eq!(from_env.sources.limit, ValueSource::Env);
        assert!(zero.unwrap_err().to_string().contains("limit must be >=1"));
    }

    #[test]
    fn hit_threshold_above_21_is_rejected() {
        let cfg = Config {
            hit_threshold: 22,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn session_config_carries_every_field() {
        let cfg = Config {
            decks: 2,
            burn: true,
            stake: 80,
            limit: 25,
            betting: BettingKind::OneThreeTwoSix,
            hit_threshold: 15,
            dealer_rule: DealerRule::Stand17,
            rounds: 30,
            sessions: 4,
            seed: None,
        };
        let s = cfg.session_config(9);
        assert_eq!(s.table.num_decks, 2);
        assert!(s.table.burn);
        assert_eq!(s.table.seed, Some(9));
        assert_eq!(s.stake, 80);
        assert_eq!(s.betting, BettingKind::OneThreeTwoSix);
        assert_eq!(s.hit_threshold, 15);
        assert_eq!(s.dealer_rule, DealerRule::Stand17);
        assert_eq!(s.max_rounds, 30);
        assert_eq!(s.limit, Some(25));
    }
}
