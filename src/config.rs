use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_REDIS_PREFIX: &str = "ph:";
pub const DEFAULT_WU_BASE_URL: &str = "https://api.wunderground.com/api";
pub const DEFAULT_WU_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Environment variables missing: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("{}", join_errors(.0))]
    Several(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Clone, Debug)]
pub struct Config {
    pub http_port: u16,
    pub redis_addr: String,
    pub redis_password: Option<String>,
    pub redis_db: i64,
    pub redis_prefix: String,
    pub wu_key: String,
    pub wu_location: String,
    pub wu_base_url: String,
    pub wu_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count
    /// as unset. Every missing required variable and every unparsable value is
    /// reported in one error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let mut missing = Vec::new();
        let mut invalid = Vec::new();

        let http_port = parse_or("HTTP_PORT", var("HTTP_PORT"), DEFAULT_HTTP_PORT, &mut invalid);
        let redis_addr = required("REDIS_ADDR", var("REDIS_ADDR"), &mut missing);
        let redis_password = var("REDIS_PASSWORD");
        let redis_db = parse_or("REDIS_DB", var("REDIS_DB"), 0, &mut invalid);
        let redis_prefix = var("REDIS_PREFIX").unwrap_or_else(|| DEFAULT_REDIS_PREFIX.to_string());
        let wu_key = required("WU_KEY", var("WU_KEY"), &mut missing);
        let wu_location = required("WU_LOCATION", var("WU_LOCATION"), &mut missing);
        let wu_base_url = var("WU_BASE_URL").unwrap_or_else(|| DEFAULT_WU_BASE_URL.to_string());
        let wu_timeout_secs = parse_or(
            "WU_TIMEOUT_SECS",
            var("WU_TIMEOUT_SECS"),
            DEFAULT_WU_TIMEOUT_SECS,
            &mut invalid,
        );

        let mut errors = invalid;
        if !missing.is_empty() {
            errors.push(ConfigError::Missing(missing));
        }
        match errors.len() {
            0 => {}
            1 => return Err(errors.remove(0)),
            _ => return Err(ConfigError::Several(errors)),
        }

        Ok(Config {
            http_port,
            redis_addr,
            redis_password,
            redis_db,
            redis_prefix,
            wu_key,
            wu_location,
            wu_base_url,
            wu_timeout: Duration::from_secs(wu_timeout_secs),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }

    pub fn redis_url(&self) -> String {
        match &self.redis_password {
            Some(password) => format!(
                "redis://:{}@{}/{}",
                urlencoding::encode(password),
                self.redis_addr,
                self.redis_db
            ),
            None => format!("redis://{}/{}", self.redis_addr, self.redis_db),
        }
    }
}

fn required(name: &'static str, value: Option<String>, missing: &mut Vec<&'static str>) -> String {
    value.unwrap_or_else(|| {
        missing.push(name);
        String::new()
    })
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
    invalid: &mut Vec<ConfigError>,
) -> T {
    let Some(value) = value else {
        return default;
    };
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => parsed,
        Err(_) => {
            invalid.push(ConfigError::Invalid { name, value });
            default
        }
    }
}

#[cfg(test)]
impl Config {
    /// Config with the required settings filled in, talking to `wu_base_url`.
    pub fn for_upstream(wu_base_url: &str) -> Self {
        Config {
            http_port: DEFAULT_HTTP_PORT,
            redis_addr: "localhost:6379".to_string(),
            redis_password: None,
            redis_db: 0,
            redis_prefix: DEFAULT_REDIS_PREFIX.to_string(),
            wu_key: "abc123".to_string(),
            wu_location: "CA/San_Francisco".to_string(),
            wu_base_url: wu_base_url.to_string(),
            wu_timeout: Duration::from_secs(2),
        }
    }
}
