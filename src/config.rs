use std::env;

use crate::error::AppError;

pub const DEFAULT_DIRECTIONS_API_URL: &str =
    "https://maps.googleapis.com/maps/api/directions/json";

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub directions_api_url: String,
    pub google_maps_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            directions_api_url: env::var("DIRECTIONS_API_URL")
                .unwrap_or_else(|_| DEFAULT_DIRECTIONS_API_URL.to_string()),
            google_maps_api_key: non_empty(env::var("GOOGLE_MAPS_API_KEY").ok()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::non_empty;

    #[test]
    fn empty_key_counts_as_unset() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("abc".to_string())), Some("abc".to_string()));
    }
}
