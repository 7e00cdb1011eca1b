pub mod types;
pub mod wunderground;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use types::{HourMinute, SunPhase};
pub use wunderground::WundergroundClient;

#[derive(Error, Debug)]
pub enum AstronomyError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),
    #[error("API error ({kind}): {description}")]
    Api { kind: String, description: String },
    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),
    #[error("Response has no sun_phase section")]
    MissingSunPhase,
    #[error("Invalid {field} value: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// Source of today's sunrise and sunset for the configured location.
#[async_trait]
pub trait AstronomySource: Send + Sync {
    async fn sun_phase(&self) -> Result<SunPhase, AstronomyError>;
}
