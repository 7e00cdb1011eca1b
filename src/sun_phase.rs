//! Cache-aside lookup of today's sun phase.
//!
//! One cache entry per calendar day holds the fully serialized response
//! document, so a hit is returned byte-for-byte without being parsed again.
//! Cache failures only degrade to a miss or a skipped write; upstream failures
//! end the request.

use chrono::{Datelike, Local, NaiveDate};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::astronomy::{AstronomyError, AstronomySource};
use crate::cache::CacheStore;
use crate::envelope::SunPhaseRecord;

pub const CACHE_TTL: Duration = Duration::from_secs(168 * 60 * 60);

#[derive(Error, Debug)]
pub enum SunPhaseError {
    #[error(transparent)]
    Astronomy(#[from] AstronomyError),
    #[error("Failed to serialize response document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// `<prefix>weather:sun_phase:<year>-<Month>-<day>`, e.g.
/// `ph:weather:sun_phase:2024-March-15`. External pollers read the same keys.
pub fn cache_key(prefix: &str, date: NaiveDate) -> String {
    format!(
        "{}weather:sun_phase:{}-{}-{}",
        prefix,
        date.year(),
        date.format("%B"),
        date.day()
    )
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct SunPhaseService {
    cache: Arc<dyn CacheStore>,
    astronomy: Arc<dyn AstronomySource>,
    prefix: String,
    today: fn() -> NaiveDate,
}

impl SunPhaseService {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        astronomy: Arc<dyn AstronomySource>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            astronomy,
            prefix: prefix.into(),
            today: local_today,
        }
    }

    /// Replaces the local clock as the source of "today".
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn current_key(&self) -> String {
        cache_key(&self.prefix, (self.today)())
    }

    /// Returns today's serialized sun phase document, from cache when present.
    pub async fn current(&self) -> Result<String, SunPhaseError> {
        let key = self.current_key();

        match self.cache.get(&key).await {
            Ok(Some(body)) => {
                debug!("Cache HIT for key {}", key);
                return Ok(body);
            }
            Ok(None) => debug!("Cache MISS for key {}", key),
            Err(e) => warn!("Error reading cache for key {}: {}", key, e),
        }

        let sun_phase = self.astronomy.sun_phase().await?;

        let record = SunPhaseRecord {
            id: key.clone(),
            sunrise_h: sun_phase.sunrise.hour,
            sunrise_m: sun_phase.sunrise.minute,
            sunset_h: sun_phase.sunset.hour,
            sunset_m: sun_phase.sunset.minute,
        };
        let body = record.to_document()?;

        match self.cache.set(&key, &body, CACHE_TTL).await {
            Ok(()) => info!("Cached sun phase under {}", key),
            Err(e) => warn!("Error committing key {} to cache: {}", key, e),
        }

        Ok(body)
    }
}
