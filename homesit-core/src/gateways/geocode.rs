use thiserror::Error;

use crate::entities::{GeocodedPlace, MapPoint};

/// Outbound geocoding provider.
pub trait GeoCodingGateway {
    /// Free-text search returning the provider's candidate list.
    fn forward_search(&self, query: &str) -> Result<Vec<GeocodedPlace>, Error>;

    /// Resolve a coordinate into a best-effort place description.
    ///
    /// `Ok(None)` means the provider knows no place at this position.
    fn reverse_lookup(&self, pos: MapPoint) -> Result<Option<GeocodedPlace>, Error>;

    /// Resolve a free-text location to a coordinate pair by picking the
    /// provider's first candidate.
    ///
    /// Returns `None` both when there are no results and when the gateway
    /// fails, so callers can treat unresolvable locations uniformly.
    fn resolve_location_lat_lng(&self, location: &str) -> Option<MapPoint> {
        match self.forward_search(location) {
            Ok(results) => {
                let pos = results.first().and_then(GeocodedPlace::map_point);
                if let Some(pos) = pos {
                    log::debug!("Resolved location '{}': {:?}", location, pos);
                }
                pos
            }
            Err(err) => {
                log::warn!("Failed to resolve location '{}': {}", location, err);
                None
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Geocoding service error (status {0})")]
    UpstreamStatus(u16),
    #[error("Geocoding service unreachable: {0}")]
    Unreachable(String),
    #[error("Unexpected response from geocoding service: {0}")]
    UnexpectedResponse(String),
}
