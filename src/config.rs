use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{ScoringParams, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
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
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 10 }
fn default_max_limit() -> u16 { 100 }

impl MatchingSettings {
    /// Requested limit, or the default, capped at `max_limit`
    pub fn effective_limit(&self, requested: Option<u32>) -> usize {
        requested
            .unwrap_or(u32::from(self.default_limit))
            .min(u32::from(self.max_limit)) as usize
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub params: ParamsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_age_weight")]
    pub age: f64,
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_verified_weight")]
    pub verified: f64,
    #[serde(default = "default_activity_weight")]
    pub activity: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interests: default_interests_weight(),
            age: default_age_weight(),
            distance: default_distance_weight(),
            verified: default_verified_weight(),
            activity: default_activity_weight(),
        }
    }
}

fn default_interests_weight() -> f64 { 0.30 }
fn default_age_weight() -> f64 { 0.20 }
fn default_distance_weight() -> f64 { 0.25 }
fn default_verified_weight() -> f64 { 0.15 }
fn default_activity_weight() -> f64 { 0.10 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(cfg: &WeightsConfig) -> Self {
        Self {
            interests: cfg.interests,
            age: cfg.age,
            distance: cfg.distance,
            verified: cfg.verified,
            activity: cfg.activity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParamsConfig {
    #[serde(default = "default_age_normalizer")]
    pub age_normalizer: f64,
    #[serde(default = "default_distance_fallback")]
    pub distance_fallback: f64,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            age_normalizer: default_age_normalizer(),
            distance_fallback: default_distance_fallback(),
        }
    }
}

fn default_age_normalizer() -> f64 { 20.0 }
fn default_distance_fallback() -> f64 { 0.7 }

impl ParamsConfig {
    /// Reject values that would turn scores into `inf` or `NaN`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.age_normalizer.is_finite() || self.age_normalizer <= 0.0 {
            return Err(ConfigError::Message(format!(
                "scoring.params.age_normalizer must be a positive number, got {}",
                self.age_normalizer
            )));
        }
        if !(0.0..=1.0).contains(&self.distance_fallback) {
            return Err(ConfigError::Message(format!(
                "scoring.params.distance_fallback must be within [0, 1], got {}",
                self.distance_fallback
            )));
        }
        Ok(())
    }
}

impl From<&ParamsConfig> for ScoringParams {
    fn from(cfg: &ParamsConfig) -> Self {
        Self {
            age_normalizer: cfg.age_normalizer,
            distance_fallback: cfg.distance_fallback,
        }
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
    /// 4. Environment variables (prefixed with MATCH_ENGINE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCH_ENGINE__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.scoring.params.validate()?;
        Ok(self)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MATCH_ENGINE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
