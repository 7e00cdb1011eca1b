//! JSON:API documents served by the service, for both success and failure.
//!
//! The success body is what gets written to the cache, so its serialized form
//! must stay stable between releases.

use serde::Serialize;

pub const JSONAPI_MEDIA_TYPE: &str = "application/vnd.api+json";

pub const SUN_PHASE_TYPE: &str = "sun_phase";

/// Normalized sunrise/sunset for one day, identified by its cache key.
#[derive(Debug, Clone, PartialEq)]
pub struct SunPhaseRecord {
    pub id: String,
    pub sunrise_h: u8,
    pub sunrise_m: u8,
    pub sunset_h: u8,
    pub sunset_m: u8,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    data: Resource<'a>,
}

#[derive(Debug, Serialize)]
struct Resource<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    id: &'a str,
    attributes: SunPhaseAttributes,
}

#[derive(Debug, Serialize)]
struct SunPhaseAttributes {
    sunrise_h: u8,
    sunrise_m: u8,
    sunset_h: u8,
    sunset_m: u8,
}

impl SunPhaseRecord {
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Document {
            data: Resource {
                kind: SUN_PHASE_TYPE,
                id: &self.id,
                attributes: SunPhaseAttributes {
                    sunrise_h: self.sunrise_h,
                    sunrise_m: self.sunrise_m,
                    sunset_h: self.sunset_h,
                    sunset_m: self.sunset_m,
                },
            },
        })
    }
}

/// Application-specific refinement of an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MalformedJsonBody,
    MissingRequiredAttribute,
    RequestedRelationshipNotFound,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        match self {
            ErrorCode::MalformedJsonBody => 1,
            ErrorCode::MissingRequiredAttribute => 2201,
            ErrorCode::RequestedRelationshipNotFound => 2202,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ErrorCode::MalformedJsonBody => "Malformed JSON Body",
            ErrorCode::MissingRequiredAttribute => "Missing Required Attribute",
            ErrorCode::RequestedRelationshipNotFound => "Requested Relationship Not Found",
        }
    }
}

pub fn status_title(status: u16) -> Option<&'static str> {
    let title = match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        409 => "Conflict",
        415 => "Unsupported Media Type",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        _ => return None,
    };
    Some(title)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorObject {
    /// A domain code, when present, takes over the title lookup.
    pub fn new(status: u16, code: Option<ErrorCode>, detail: impl Into<String>) -> Self {
        let title = match code {
            Some(code) => Some(code.title()),
            None => status_title(status),
        };

        Self {
            title,
            detail: detail.into(),
            status: status.to_string(),
            code: code.map(|code| code.as_u16().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl From<ErrorObject> for ErrorDocument {
    fn from(error: ErrorObject) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
