//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the rule-based
//! Kannada orthographic segmenter, the table-driven phonetic mapping, plus
//! configuration loading and tracing setup.

pub mod config;
pub mod phonetic;
pub mod segmenter;
pub mod telemetry;

pub use config::{AppConfig, AssessmentSettings, Environment, TelemetrySettings};
pub use phonetic::TablePhoneticMapping;
pub use segmenter::KannadaSegmenter;
pub use telemetry::{TelemetryError, init_tracing};
