use super::types::*;
use super::{AstronomyError, AstronomySource};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

type Responder = Box<dyn Fn() -> Result<SunPhase, AstronomyError> + Send + Sync>;

/// In-process astronomy source that counts how often it is called.
pub struct MockAstronomySource {
    respond: Responder,
    calls: AtomicUsize,
}

impl MockAstronomySource {
    pub fn returning(sun_phase: SunPhase) -> Self {
        Self::with(move || Ok(sun_phase))
    }

    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> AstronomyError + Send + Sync + 'static,
    {
        Self::with(move || Err(make_error()))
    }

    /// Fails the test if the source is ever consulted.
    pub fn unreachable() -> Self {
        Self::with(|| panic!("astronomy source must not be called"))
    }

    fn with<F>(respond: F) -> Self
    where
        F: Fn() -> Result<SunPhase, AstronomyError> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AstronomySource for MockAstronomySource {
    async fn sun_phase(&self) -> Result<SunPhase, AstronomyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)()
    }
}

pub fn sample_sun_phase() -> SunPhase {
    SunPhase {
        sunrise: HourMinute { hour: 7, minute: 12 },
        sunset: HourMinute { hour: 19, minute: 8 },
    }
}
