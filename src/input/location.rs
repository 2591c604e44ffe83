use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Single position fetch. Frontends bind this to whatever positioning
/// capability they have; the session only ever sees the resulting pair.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Option<UserLocation>;
}

pub const LOCATION_TIMEOUT: Duration = Duration::from_secs(8);

/// Fetch the position once, racing against [`LOCATION_TIMEOUT`]. Failure
/// and timeout both leave the location unset.
pub async fn request_location(provider: &dyn LocationProvider) -> Option<UserLocation> {
    match tokio::time::timeout(LOCATION_TIMEOUT, provider.current_position()).await {
        Ok(position) => position,
        Err(_) => {
            warn!("location request timed out");
            None
        }
    }
}
