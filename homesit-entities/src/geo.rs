// The Earth's mean radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the map in WGS84 decimal degrees.
///
/// Instances can only be obtained through [`MapPoint::try_from_lat_lng_deg`],
/// so every value is guaranteed to carry finite, in-range coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    /// Validates the given coordinates.
    ///
    /// Returns `None` if the latitude is outside [-90, 90], the longitude
    /// is outside [-180, 180], or either component is not a finite number.
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` according to the haversine formula.
    pub fn distance(&self, other: Self) -> Distance {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_kilometers(EARTH_RADIUS_KM * c)
    }
}

/// A distance between two map points in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_kilometers(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_kilometers(self) -> f64 {
        self.0
    }
}
