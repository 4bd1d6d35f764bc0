use thiserror::Error;

use crate::entities::MapPoint;

pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_QUERY_LEN: usize = 500;

#[derive(Debug, Error)]
pub enum GeocodeInvalidation {
    #[error("Query must be between 2 and 500 characters")]
    QueryLength,
    #[error("Invalid coordinates")]
    Coordinates,
}

/// Checks the length constraint of a forward-geocoding query.
pub fn forward_query(query: &str) -> Result<&str, GeocodeInvalidation> {
    let len = query.chars().count();
    if (MIN_QUERY_LEN..=MAX_QUERY_LEN).contains(&len) {
        Ok(query)
    } else {
        Err(GeocodeInvalidation::QueryLength)
    }
}

/// Validates reverse-geocoding coordinates.
pub fn reverse_coords(lat: f64, lon: f64) -> Result<MapPoint, GeocodeInvalidation> {
    MapPoint::try_from_lat_lng_deg(lat, lon).ok_or(GeocodeInvalidation::Coordinates)
}
