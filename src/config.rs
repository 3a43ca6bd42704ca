use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::models::{ScoringParams, ScoringWeights};
use crate::planner::ExplanationPolicy;
use crate::services::FallbackMode;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub explanation: ExplanationSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_budget_floor")]
    pub budget_floor: f64,
    #[serde(default = "default_under_budget_penalty")]
    pub under_budget_penalty: f64,
    #[serde(default = "default_weather_weight")]
    pub weather_weight: f64,
    #[serde(default = "default_crowd_weight")]
    pub crowd_weight: f64,
    #[serde(default = "default_neutral_interest")]
    pub neutral_interest: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            epsilon: default_epsilon(),
            budget_floor: default_budget_floor(),
            under_budget_penalty: default_under_budget_penalty(),
            weather_weight: default_weather_weight(),
            crowd_weight: default_crowd_weight(),
            neutral_interest: default_neutral_interest(),
        }
    }
}

fn default_epsilon() -> f64 { 0.05 }
fn default_budget_floor() -> f64 { 0.05 }
fn default_under_budget_penalty() -> f64 { 0.2 }
fn default_weather_weight() -> f64 { 0.6 }
fn default_crowd_weight() -> f64 { 0.4 }
fn default_neutral_interest() -> f64 { 0.5 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_dna_weight")]
    pub dna: f64,
    #[serde(default = "default_environment_weight")]
    pub environment: f64,
    #[serde(default = "default_interest_weight")]
    pub interest: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            budget: default_budget_weight(),
            dna: default_dna_weight(),
            environment: default_environment_weight(),
            interest: default_interest_weight(),
        }
    }
}

fn default_budget_weight() -> f64 { 0.25 }
fn default_dna_weight() -> f64 { 0.20 }
fn default_environment_weight() -> f64 { 0.30 }
fn default_interest_weight() -> f64 { 0.25 }

/// Which explainer the binary wires in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplainerProvider {
    Template,
    Gemini,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExplanationSettings {
    /// Defaults to `gemini` when an API key is configured
    #[serde(default)]
    pub provider: Option<ExplainerProvider>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_shortlist_size")]
    pub shortlist_size: usize,
    #[serde(default)]
    pub fallback: FallbackMode,
}

impl Default for ExplanationSettings {
    fn default() -> Self {
        Self {
            provider: None,
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            shortlist_size: default_shortlist_size(),
            fallback: FallbackMode::default(),
        }
    }
}

impl ExplanationSettings {
    /// Configured provider, or Gemini if a non-empty key is present
    pub fn effective_provider(&self) -> ExplainerProvider {
        match self.provider {
            Some(provider) => provider,
            None if self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()) => {
                ExplainerProvider::Gemini
            }
            None => ExplainerProvider::Template,
        }
    }
}

fn default_model() -> String { crate::services::gemini::DEFAULT_MODEL.to_string() }
fn default_endpoint() -> String { crate::services::gemini::DEFAULT_ENDPOINT.to_string() }
fn default_timeout_secs() -> u64 { 5 }
fn default_shortlist_size() -> usize { 3 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> usize { 10 }

/// Log line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `voyage_dna=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingSettings {
    pub fn env_filter(&self) -> Result<EnvFilter, SettingsError> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            SettingsError::Invalid(format!("logging.level '{}': {}", self.level, e))
        })
    }
}

fn default_log_level() -> String { "info".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VOYAGE__)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VOYAGE__EXPLANATION__TIMEOUT_SECS -> explanation.timeout_secs
            .add_source(environment())
            .build()?;

        let settings = substitute_env_vars(settings)?;
        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        let settings = substitute_env_vars(settings)?;
        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, SettingsError> {
        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the scoring engine cannot use
    pub fn validate(&self) -> Result<(), SettingsError> {
        let weights = self.scoring_weights();
        if !weights.is_valid() {
            return Err(SettingsError::InvalidWeights(format!(
                "weights must be non-negative and not all zero, got {:?}",
                weights
            )));
        }

        let scoring = &self.scoring;
        if !(scoring.epsilon > 0.0 && scoring.epsilon <= 1.0) {
            return Err(SettingsError::Invalid(format!(
                "scoring.epsilon must be in (0, 1], got {}",
                scoring.epsilon
            )));
        }
        for (name, value) in [
            ("scoring.budget_floor", scoring.budget_floor),
            ("scoring.neutral_interest", scoring.neutral_interest),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::Invalid(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        if scoring.weather_weight < 0.0 || scoring.crowd_weight < 0.0 {
            return Err(SettingsError::Invalid(
                "environment weights must be non-negative".to_string(),
            ));
        }
        if self.explanation.timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "explanation.timeout_secs must be positive".to_string(),
            ));
        }
        if self.ranking.default_limit == 0 {
            return Err(SettingsError::Invalid(
                "ranking.default_limit must be positive".to_string(),
            ));
        }
        self.logging.env_filter()?;
        Ok(())
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        let w = &self.scoring.weights;
        ScoringWeights {
            budget: w.budget,
            dna: w.dna,
            environment: w.environment,
            interest: w.interest,
        }
    }

    pub fn scoring_params(&self) -> ScoringParams {
        let s = &self.scoring;
        ScoringParams {
            epsilon: s.epsilon,
            budget_floor: s.budget_floor,
            under_budget_penalty: s.under_budget_penalty,
            weather_weight: s.weather_weight,
            crowd_weight: s.crowd_weight,
            neutral_interest: s.neutral_interest,
        }
    }

    pub fn explanation_policy(&self) -> ExplanationPolicy {
        ExplanationPolicy {
            timeout: Duration::from_secs(self.explanation.timeout_secs),
            shortlist_size: self.explanation.shortlist_size,
            fallback: self.explanation.fallback,
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("VOYAGE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Pick up well-known variables that do not follow the VOYAGE__ scheme
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    // VOYAGE__EXPLANATION__API_KEY is already covered by the env source
    let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty());
    let catalog_path = env::var("VOYAGE_CATALOG").ok();
    let log_level = env::var("LOG_LEVEL").ok().filter(|v| !v.trim().is_empty());
    let log_format = env::var("LOG_FORMAT").ok().filter(|v| !v.trim().is_empty());

    let mut builder = Config::builder().add_source(settings.clone());

    if settings.get_string("explanation.api_key").is_err() {
        if let Some(api_key) = api_key {
            builder = builder.set_override("explanation.api_key", api_key)?;
        }
    }
    if let Some(path) = catalog_path {
        builder = builder.set_override("catalog.path", path)?;
    }
    if let Some(level) = log_level {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Some(format) = log_format {
        builder = builder.set_override("logging.format", format.to_lowercase())?;
    }

    builder.build()
}
