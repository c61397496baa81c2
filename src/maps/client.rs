use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::DirectionsProvider;
use crate::error::AppError;
use crate::models::coordinate::Coordinate;
use crate::models::directions::DirectionsResponse;

pub const RESPONSE_LANGUAGE: &str = "ar";

#[derive(Clone)]
pub struct GoogleDirectionsClient {
    inner: reqwest::Client,
    base: Url,
    api_key: Option<String>,
}

impl GoogleDirectionsClient {
    pub fn new(base: &str, api_key: Option<String>) -> Result<Self, AppError> {
        let base: Url = base
            .parse()
            .map_err(|err| AppError::Internal(format!("{base} is not a valid url: {err}")))?;

        Ok(Self {
            inner: reqwest::Client::new(),
            base,
            api_key,
        })
    }

    pub fn request_url(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<Url, AppError> {
        // Callers going through the lookup handler never get here without a key;
        // the URL cannot be built without one either way.
        let key = self.api_key.as_deref().ok_or(AppError::Configuration)?;

        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("origin", &origin.to_string())
            .append_pair("destination", &destination.to_string())
            .append_pair("key", key)
            .append_pair("language", RESPONSE_LANGUAGE);

        Ok(url)
    }
}

#[async_trait]
impl DirectionsProvider for GoogleDirectionsClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_directions(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<DirectionsResponse, AppError> {
        let url = self.request_url(origin, destination)?;
        debug!(%origin, %destination, "requesting directions");

        // The provider reports failures through `status`, so the HTTP code is not checked.
        let response = self
            .inner
            .get(url)
            .send()
            .await?
            .json::<DirectionsResponse>()
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::GoogleDirectionsClient;
    use crate::error::AppError;
    use crate::models::coordinate::Coordinate;
    use serde_json::json;

    const BASE: &str = "https://maps.googleapis.com/maps/api/directions/json";

    #[test]
    fn url_carries_points_key_and_language() {
        let client = GoogleDirectionsClient::new(BASE, Some("secret".to_string())).unwrap();
        let url = client
            .request_url(
                &Coordinate::from_value(&json!({ "lat": 24.7136, "lng": 46.6753 })),
                &Coordinate::from_value(&json!({ "lat": 21.4858, "lng": 39.1925 })),
            )
            .unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(url.path(), "/maps/api/directions/json");
        assert_eq!(
            pairs,
            vec![
                ("origin".to_string(), "24.7136,46.6753".to_string()),
                ("destination".to_string(), "21.4858,39.1925".to_string()),
                ("key".to_string(), "secret".to_string()),
                ("language".to_string(), "ar".to_string()),
            ]
        );
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let client = GoogleDirectionsClient::new(BASE, None).unwrap();
        let res = client.request_url(
            &Coordinate::from_value(&json!({ "lat": 1.0, "lng": 2.0 })),
            &Coordinate::from_value(&json!({ "lat": 3.0, "lng": 4.0 })),
        );
        assert!(matches!(res, Err(AppError::Configuration)));
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(GoogleDirectionsClient::new("not a url", None).is_err());
    }
}
