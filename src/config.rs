use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use crate::core::{Matcher, MoodPaletteScorer};
use crate::models::ScoringPolicy;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    /// Upper bound on a JSON request body; garment photos travel inline
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5050 }
fn default_max_payload_bytes() -> usize { 64 * 1024 * 1024 }

/// Which scorer the matcher consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    /// Uniform random selection with fixed score constants
    #[default]
    Fixed,
    /// Prefer garments whose colour suits the mood
    MoodPalette,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_complement_score")]
    pub complement_score: f64,
    #[serde(default = "default_layer_score")]
    pub layer_score: f64,
    #[serde(default = "default_max_wardrobe_items")]
    pub max_wardrobe_items: usize,
    #[serde(default)]
    pub scorer: ScorerKind,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            complement_score: default_complement_score(),
            layer_score: default_layer_score(),
            max_wardrobe_items: default_max_wardrobe_items(),
            scorer: ScorerKind::default(),
        }
    }
}

fn default_complement_score() -> f64 { 0.95 }
fn default_layer_score() -> f64 { 0.88 }
fn default_max_wardrobe_items() -> usize { 2000 }

impl MatchingSettings {
    /// Score constants as a policy, rejecting values outside `[0, 1]`
    pub fn policy(&self) -> Result<ScoringPolicy, ConfigError> {
        for (key, value) in [
            ("matching.complement_score", self.complement_score),
            ("matching.layer_score", self.layer_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Message(format!(
                    "{} must be within [0, 1], got {}",
                    key, value
                )));
            }
        }

        Ok(ScoringPolicy {
            complement: self.complement_score,
            layer: self.layer_score,
        })
    }

    /// Build the matcher described by these settings
    pub fn build_matcher(&self) -> Result<Matcher, ConfigError> {
        let matcher = Matcher::new(self.policy()?);

        Ok(match self.scorer {
            ScorerKind::Fixed => matcher,
            ScorerKind::MoodPalette => matcher.with_scorer(Arc::new(MoodPaletteScorer)),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with OUTFIT__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., OUTFIT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("OUTFIT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
