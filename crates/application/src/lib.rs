//! Application layer - Use cases and orchestration
//!
//! Contains the assessment pipeline, application-level errors, and the port
//! definitions for the external collaborators (segmentation, phonetic
//! mapping, transcription, acoustic analysis, transcoding). Adapters in the
//! infrastructure layer implement these ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
