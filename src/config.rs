use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{ScoringWeights, RescaleCurve};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub appwrite: AppwriteSettings,
    #[serde(default)]
    pub collection: CollectionSettings,
    #[serde(default)]
    pub cache: CacheSettings,
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
pub struct AppwriteSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    #[serde(default = "default_surveys_collection")]
    pub surveys: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self { surveys: default_surveys_collection() }
    }
}

fn default_surveys_collection() -> String { "surveys".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// Redis is optional; without it only the in-process cache is used
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default)]
    pub min_score: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_score: 0,
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub curve: CurveConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_sleep_schedule_weight")]
    pub sleep_schedule: f64,
    #[serde(default = "default_cleanliness_weight")]
    pub cleanliness: f64,
    #[serde(default = "default_noise_tolerance_weight")]
    pub noise_tolerance: f64,
    #[serde(default = "default_bedtime_share")]
    pub bedtime_share: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            sleep_schedule: default_sleep_schedule_weight(),
            cleanliness: default_cleanliness_weight(),
            noise_tolerance: default_noise_tolerance_weight(),
            bedtime_share: default_bedtime_share(),
        }
    }
}

fn default_sleep_schedule_weight() -> f64 { 20.0 }
fn default_cleanliness_weight() -> f64 { 20.0 }
fn default_noise_tolerance_weight() -> f64 { 15.0 }
fn default_bedtime_share() -> f64 { 0.6 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            sleep_schedule: config.sleep_schedule,
            cleanliness: config.cleanliness,
            noise_tolerance: config.noise_tolerance,
            bedtime_share: config.bedtime_share,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurveConfig {
    #[serde(default = "default_lower_exponent")]
    pub lower_exponent: f64,
    #[serde(default = "default_upper_exponent")]
    pub upper_exponent: f64,
    #[serde(default = "default_midpoint")]
    pub midpoint: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            lower_exponent: default_lower_exponent(),
            upper_exponent: default_upper_exponent(),
            midpoint: default_midpoint(),
        }
    }
}

fn default_lower_exponent() -> f64 { 0.8 }
fn default_upper_exponent() -> f64 { 1.2 }
fn default_midpoint() -> f64 { 50.0 }

impl From<&CurveConfig> for RescaleCurve {
    fn from(config: &CurveConfig) -> Self {
        Self {
            lower_exponent: config.lower_exponent,
            upper_exponent: config.upper_exponent,
            midpoint: config.midpoint,
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
    /// 4. Environment variables (prefixed with ROOMMATE__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMMATE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROOMMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject tuning values the scorer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.scoring.weights;
        for (name, weight) in [
            ("sleep_schedule", weights.sleep_schedule),
            ("cleanliness", weights.cleanliness),
            ("noise_tolerance", weights.noise_tolerance),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Message(format!(
                    "scoring.weights.{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        if !(0.0..=1.0).contains(&weights.bedtime_share) {
            return Err(ConfigError::Message(format!(
                "scoring.weights.bedtime_share must be within 0..=1, got {}",
                weights.bedtime_share
            )));
        }

        let curve = &self.scoring.curve;
        if !(curve.midpoint > 0.0 && curve.midpoint < 100.0) {
            return Err(ConfigError::Message(format!(
                "scoring.curve.midpoint must be within 0..100 exclusive, got {}",
                curve.midpoint
            )));
        }
        if !(curve.lower_exponent > 0.0 && curve.upper_exponent > 0.0) {
            return Err(ConfigError::Message(
                "scoring.curve exponents must be positive".to_string(),
            ));
        }

        if self.matching.default_limit == 0 || self.matching.default_limit > self.matching.max_limit {
            return Err(ConfigError::Message(format!(
                "matching.default_limit must be within 1..={}, got {}",
                self.matching.max_limit, self.matching.default_limit
            )));
        }

        Ok(())
    }
}

/// Apply plain (unprefixed) environment variables commonly set by deployments
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("APPWRITE_ENDPOINT", "appwrite.endpoint"),
        ("APPWRITE_API_KEY", "appwrite.api_key"),
        ("APPWRITE_PROJECT_ID", "appwrite.project_id"),
        ("APPWRITE_DATABASE_ID", "appwrite.database_id"),
        ("REDIS_URL", "cache.redis_url"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    const MINIMAL: &str = r#"
        [appwrite]
        endpoint = "https://appwrite.test/v1"
        api_key = "key"
        project_id = "project"
        database_id = "db"
    "#;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.sleep_schedule, 20.0);
        assert_eq!(weights.cleanliness, 20.0);
        assert_eq!(weights.noise_tolerance, 15.0);
        assert_eq!(weights.bedtime_share, 0.6);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
        assert_eq!(RescaleCurve::from(&CurveConfig::default()), RescaleCurve::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_minimal_config_fills_defaults() {
        let settings = from_toml(MINIMAL).unwrap();
        settings.validate().unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.collection.surveys, "surveys");
        assert_eq!(settings.matching.default_limit, 20);
        assert!(settings.cache.redis_url.is_none());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let toml = format!("{}\n[scoring.weights]\ncleanliness = -1.0\n", MINIMAL);
        let settings = from_toml(&toml).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_curve_midpoint_rejected() {
        let toml = format!("{}\n[scoring.curve]\nmidpoint = 100.0\n", MINIMAL);
        let settings = from_toml(&toml).unwrap();
        assert!(settings.validate().is_err());
    }
}
