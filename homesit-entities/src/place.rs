use crate::{address::Address, geo::MapPoint};

/// A single candidate returned by the geocoding provider.
///
/// The coordinate components are kept as the raw strings the provider
/// delivers so that proxied responses reproduce them verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocodedPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    pub category: Option<String>,
    pub place_type: Option<String>,
    pub importance: Option<f64>,
    pub address: Option<Address>,
}

impl GeocodedPlace {
    /// Parses the provider's coordinate strings into a validated point.
    pub fn map_point(&self) -> Option<MapPoint> {
        let lat: f64 = self.lat.trim().parse().ok()?;
        let lng: f64 = self.lon.trim().parse().ok()?;
        MapPoint::try_from_lat_lng_deg(lat, lng)
    }
}
