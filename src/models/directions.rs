use serde::Deserialize;

use crate::error::AppError;
use crate::models::eta::Eta;

pub const STATUS_OK: &str = "OK";

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
}

impl DirectionsResponse {
    /// Reduces a provider response to the first leg of the first route.
    pub fn into_eta(self) -> Result<Eta, AppError> {
        if self.status != STATUS_OK {
            return Err(AppError::Upstream {
                status: self.status,
            });
        }

        let route = self.routes.into_iter().next().ok_or_else(|| {
            AppError::MalformedUpstreamResponse(
                "Directions API response contains no routes".to_string(),
            )
        })?;
        let leg = route.legs.into_iter().next().ok_or_else(|| {
            AppError::MalformedUpstreamResponse(
                "Directions API route contains no legs".to_string(),
            )
        })?;

        Ok(Eta {
            distance: leg.distance.text,
            duration: leg.duration.text,
        })
    }
}
