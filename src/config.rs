//! # Configuration
//!
//! Runtime settings with built-in defaults. Each setting can be overridden by an
//! environment variable; a `.env` file in the working directory is loaded first.

use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::aggregator::DEFAULT_TARGET_SERVINGS;

pub const DATA_DIR_VAR: &str = "COOKSY_DATA_DIR";
pub const DEFAULT_SERVINGS_VAR: &str = "COOKSY_DEFAULT_SERVINGS";
pub const AI_DELAY_VAR: &str = "COOKSY_AI_DELAY_MS";
pub const GENERATOR_DELAY_VAR: &str = "COOKSY_GENERATOR_DELAY_MS";
pub const LOCALE_VAR: &str = "COOKSY_LOCALE";

pub const DEFAULT_DATA_DIR: &str = "cooksy-data";
pub const DEFAULT_AI_DELAY_MS: u64 = 1500;
pub const DEFAULT_GENERATOR_DELAY_MS: u64 = 3000;
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the persisted JSON files
    pub data_dir: PathBuf,
    /// Serving count used by the shopping-list generator
    pub default_servings: u32,
    /// Pause before assistant suggestions are shown
    pub ai_delay: Duration,
    /// Pause before a generated recipe is shown
    pub generator_delay: Duration,
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_servings: DEFAULT_TARGET_SERVINGS,
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
            generator_delay: Duration::from_millis(DEFAULT_GENERATOR_DELAY_MS),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

fn parse_or<T: FromStr>(var: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid value {value:?} for {var}");
            default
        }),
        None => default,
    }
}

impl AppConfig {
    /// Load `.env` if present, then read overrides from the process environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let servings = parse_or(
            DEFAULT_SERVINGS_VAR,
            lookup(DEFAULT_SERVINGS_VAR),
            defaults.default_servings,
        );
        let default_servings = match servings {
            0 => {
                warn!("{DEFAULT_SERVINGS_VAR} must be at least 1, using {DEFAULT_TARGET_SERVINGS}");
                DEFAULT_TARGET_SERVINGS
            }
            n => n,
        };

        Self {
            data_dir: lookup(DATA_DIR_VAR)
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            default_servings,
            ai_delay: Duration::from_millis(parse_or(
                AI_DELAY_VAR,
                lookup(AI_DELAY_VAR),
                DEFAULT_AI_DELAY_MS,
            )),
            generator_delay: Duration::from_millis(parse_or(
                GENERATOR_DELAY_VAR,
                lookup(GENERATOR_DELAY_VAR),
                DEFAULT_GENERATOR_DELAY_MS,
            )),
            locale: lookup(LOCALE_VAR)
                .filter(|locale| !locale.trim().is_empty())
                .unwrap_or(defaults.locale),
        }
    }

    /// Same settings without any artificial delays
    pub fn without_delays(mut self) -> Self {
        self.ai_delay = Duration::ZERO;
        self.generator_delay = Duration::ZERO;
        self
    }
}
