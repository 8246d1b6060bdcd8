use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{RecommendationSettings, ScoringWeights};

/// Largest combination size the generator is allowed to enumerate
pub const MAX_SUPPORTED_COMBO_SIZE: usize = 3;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_catalog_path() -> String { "data/food_data.json".to_string() }
fn default_cache_ttl_secs() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_budget_share")]
    pub budget_share: f64,
    #[serde(default = "default_min_budget_window_ksh")]
    pub min_budget_window_ksh: f64,
    #[serde(default = "default_max_combo_size")]
    pub max_combo_size: usize,
    #[serde(default = "default_low_carb_max_carbs_g")]
    pub low_carb_max_carbs_g: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            budget_share: default_budget_share(),
            min_budget_window_ksh: default_min_budget_window_ksh(),
            max_combo_size: default_max_combo_size(),
            low_carb_max_carbs_g: default_low_carb_max_carbs_g(),
        }
    }
}

fn default_max_results() -> usize { 6 }
fn default_budget_share() -> f64 { 0.6 }
fn default_min_budget_window_ksh() -> f64 { 1.0 }
fn default_max_combo_size() -> usize { 2 }
fn default_low_carb_max_carbs_g() -> f64 { 20.0 }

impl From<&RecommendationConfig> for RecommendationSettings {
    fn from(config: &RecommendationConfig) -> Self {
        Self {
            max_results: config.max_results,
            budget_share: config.budget_share,
            min_budget_window_ksh: config.min_budget_window_ksh,
            max_combo_size: config.max_combo_size,
            low_carb_max_carbs_g: config.low_carb_max_carbs_g,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_calorie_weight")]
    pub calorie: f64,
    #[serde(default = "default_protein_weight")]
    pub protein: f64,
    #[serde(default = "default_cost_weight")]
    pub cost: f64,
    #[serde(default = "default_variety_weight")]
    pub variety: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            calorie: default_calorie_weight(),
            protein: default_protein_weight(),
            cost: default_cost_weight(),
            variety: default_variety_weight(),
        }
    }
}

impl WeightsConfig {
    pub fn sum(&self) -> f64 {
        self.calorie + self.protein + self.cost + self.variety
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            calorie: config.calorie,
            protein: config.protein,
            cost: config.cost,
            variety: config.variety,
        }
    }
}

fn default_calorie_weight() -> f64 { 0.4 }
fn default_protein_weight() -> f64 { 0.3 }
fn default_cost_weight() -> f64 { 0.2 }
fn default_variety_weight() -> f64 { 0.1 }

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with NUTRI__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., NUTRI__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NUTRI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NUTRI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject tuning values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rec = &self.recommendation;
        if rec.max_results == 0 {
            return Err(ConfigError::Message("recommendation.max_results must be at least 1".into()));
        }
        if rec.max_combo_size == 0 || rec.max_combo_size > MAX_SUPPORTED_COMBO_SIZE {
            return Err(ConfigError::Message(format!(
                "recommendation.max_combo_size must be between 1 and {}",
                MAX_SUPPORTED_COMBO_SIZE
            )));
        }
        if !(rec.min_budget_window_ksh.is_finite() && rec.min_budget_window_ksh >= 0.0) {
            return Err(ConfigError::Message(
                "recommendation.min_budget_window_ksh must be non-negative".into(),
            ));
        }
        if !(rec.low_carb_max_carbs_g.is_finite() && rec.low_carb_max_carbs_g >= 0.0) {
            return Err(ConfigError::Message(
                "recommendation.low_carb_max_carbs_g must be non-negative".into(),
            ));
        }
        if !(rec.budget_share > 0.0 && rec.budget_share <= 1.0) {
            return Err(ConfigError::Message("recommendation.budget_share must be in (0, 1]".into()));
        }
        let weights = &self.scoring.weights;
        if [weights.calorie, weights.protein, weights.cost, weights.variety]
            .iter()
            .any(|w| *w < 0.0)
        {
            return Err(ConfigError::Message("scoring weights must be non-negative".into()));
        }
        Ok(())
    }
}

/// Apply well-known environment overrides
///
/// `FOOD_DATA_PATH` replaces `catalog.path` and `PORT` replaces `server.port`.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("FOOD_DATA_PATH") {
        builder = builder.set_override("catalog.path", path)?;
    }
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
