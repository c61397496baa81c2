pub mod client;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::coordinate::Coordinate;
use crate::models::directions::DirectionsResponse;

/// Source of driving directions between two points.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Whether the provider has the credential it needs to be called.
    fn is_configured(&self) -> bool;

    async fn fetch_directions(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<DirectionsResponse, AppError>;
}
