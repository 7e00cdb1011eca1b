use super::types::*;
use super::{AstronomyError, AstronomySource};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;

pub struct WundergroundClient {
    client: Client,
    base_url: String,
    api_key: String,
    location: String,
}

impl WundergroundClient {
    pub fn new(config: &Config) -> Result<Self, AstronomyError> {
        let client = Client::builder()
            .user_agent(concat!("sun-phase-server/", env!("CARGO_PKG_VERSION")))
            .timeout(config.wu_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.wu_base_url.trim_end_matches('/').to_string(),
            api_key: config.wu_key.clone(),
            location: config.wu_location.clone(),
        })
    }

    /// `<base>/<key>/astronomy/q/<location>.json`. Locations such as
    /// `CA/San_Francisco` keep their slashes; each segment is encoded on its own.
    pub fn astronomy_url(&self) -> String {
        let location = self
            .location
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!(
            "{}/{}/astronomy/q/{}.json",
            self.base_url,
            urlencoding::encode(&self.api_key),
            location
        )
    }

    async fn fetch_astronomy(&self) -> Result<WuAstronomyResponse, AstronomyError> {
        let response = self.client.get(self.astronomy_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AstronomyError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let astronomy: WuAstronomyResponse = serde_json::from_str(&body)?;
        Ok(astronomy)
    }
}

#[async_trait]
impl AstronomySource for WundergroundClient {
    async fn sun_phase(&self) -> Result<SunPhase, AstronomyError> {
        let astronomy = self.fetch_astronomy().await?;
        let sun_phase = SunPhase::try_from(astronomy)?;
        tracing::debug!(
            "Fetched sun phase for {}: sunrise {:02}:{:02}, sunset {:02}:{:02}",
            self.location,
            sun_phase.sunrise.hour,
            sun_phase.sunrise.minute,
            sun_phase.sunset.hour,
            sun_phase.sunset.minute
        );
        Ok(sun_phase)
    }
}

impl TryFrom<WuAstronomyResponse> for SunPhase {
    type Error = AstronomyError;

    fn try_from(astronomy: WuAstronomyResponse) -> Result<Self, Self::Error> {
        if let Some(error) = astronomy.response.and_then(|meta| meta.error) {
            return Err(AstronomyError::Api {
                kind: error.kind,
                description: error.description,
            });
        }

        let sun_phase = astronomy.sun_phase.ok_or(AstronomyError::MissingSunPhase)?;

        Ok(SunPhase {
            sunrise: parse_time(&sun_phase.sunrise, "sunrise.hour", "sunrise.minute")?,
            sunset: parse_time(&sun_phase.sunset, "sunset.hour", "sunset.minute")?,
        })
    }
}

fn parse_time(
    time: &WuTime,
    hour_field: &'static str,
    minute_field: &'static str,
) -> Result<HourMinute, AstronomyError> {
    Ok(HourMinute {
        hour: parse_component(&time.hour, hour_field, 23)?,
        minute: parse_component(&time.minute, minute_field, 59)?,
    })
}

fn parse_component(value: &str, field: &'static str, max: u8) -> Result<u8, AstronomyError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|parsed| *parsed <= max)
        .ok_or_else(|| AstronomyError::InvalidField {
            field,
            value: value.to_string(),
        })
}
