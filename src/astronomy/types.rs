use serde::Deserialize;

/// Hour and minute of a daily solar event, local to the configured location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourMinute {
    pub hour: u8,
    pub minute: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunPhase {
    pub sunrise: HourMinute,
    pub sunset: HourMinute,
}

// Wunderground astronomy payload. Only the fields the service reads are typed;
// `moon_phase` and the rest of the body are ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct WuAstronomyResponse {
    #[serde(default)]
    pub response: Option<WuResponseMeta>,
    pub sun_phase: Option<WuSunPhase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WuResponseMeta {
    #[serde(default)]
    pub error: Option<WuApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WuApiError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WuSunPhase {
    pub sunrise: WuTime,
    pub sunset: WuTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WuTime {
    pub hour: String,
    pub minute: String,
}
