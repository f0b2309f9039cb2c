//! Application configuration

use application::AssessmentConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed defaults, verbose logging
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Assessment pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSettings {
    /// Distortion score above which an equal-length mismatch is Distortion
    #[serde(default = "default_distortion_threshold")]
    pub distortion_threshold: f64,
    /// Language hint passed to the recognizer
    #[serde(default = "default_language_hint")]
    pub language_hint: Option<String>,
}

const fn default_distortion_threshold() -> f64 {
    80.0
}

fn default_language_hint() -> Option<String> {
    Some("kn".to_string())
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            distortion_threshold: default_distortion_threshold(),
            language_hint: default_language_hint(),
        }
    }
}

impl From<AssessmentSettings> for AssessmentConfig {
    fn from(settings: AssessmentSettings) -> Self {
        Self {
            distortion_threshold: settings.distortion_threshold,
            language_hint: settings.language_hint,
        }
    }
}

/// Telemetry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySettings {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Assessment pipeline settings
    #[serde(default)]
    pub assessment: AssessmentSettings,

    /// Telemetry settings
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Precedence, lowest to highest: built-in defaults, an optional
    /// `config.toml` next to the binary, then `AKSHARA_*` environment
    /// variables with `__` as the section separator (e.g.
    /// `AKSHARA_ASSESSMENT__DISTORTION_THRESHOLD`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("assessment.distortion_threshold", 80.0)?
            .set_default("assessment.language_hint", "kn")?
            .set_default("telemetry.log_filter", "info")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                // Keys contain underscores, so sections separate with "__"
                config::Environment::with_prefix("AKSHARA")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// The pipeline configuration derived from these settings
    #[must_use]
    pub fn assessment_config(&self) -> AssessmentConfig {
        self.assessment.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classifier_threshold() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!((config.assessment.distortion_threshold - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.assessment.language_hint.as_deref(), Some("kn"));
        assert_eq!(config.telemetry.log_filter, "info");
    }

    #[test]
    fn settings_convert_into_pipeline_config() {
        let settings = AssessmentSettings {
            distortion_threshold: 65.0,
            language_hint: None,
        };
        let pipeline: AssessmentConfig = settings.into();
        assert!((pipeline.distortion_threshold - 65.0).abs() < f64::EPSILON);
        assert!(pipeline.language_hint.is_none());
    }

    #[test]
    fn environment_parses_from_str() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn load_without_file_or_env_uses_defaults() {
        // No config.toml in the test cwd and no AKSHARA_* variables set,
        // so only the builder defaults apply.
        let config = AppConfig::load().unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert!((config.assessment.distortion_threshold - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.assessment.language_hint.as_deref(), Some("kn"));
    }

    #[test]
    fn config_deserializes_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            environment = "production"

            [assessment]
            distortion_threshold = 70.0

            [telemetry]
            log_filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert!((config.assessment.distortion_threshold - 70.0).abs() < f64::EPSILON);
        // Unset fields keep their defaults
        assert_eq!(config.assessment.language_hint.as_deref(), Some("kn"));
        assert_eq!(config.telemetry.log_filter, "debug");
    }
}
