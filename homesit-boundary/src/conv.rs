use homesit_entities as e;

use super::*;

impl From<e::address::Address> for AddressDetails {
    fn from(from: e::address::Address) -> Self {
        let e::address::Address {
            suburb,
            city,
            town,
            village,
            state,
            postcode,
            country,
        } = from;
        Self {
            suburb,
            city,
            town,
            village,
            state,
            postcode,
            country,
        }
    }
}

impl From<e::place::GeocodedPlace> for GeocodedPlace {
    fn from(from: e::place::GeocodedPlace) -> Self {
        let e::place::GeocodedPlace {
            display_name,
            lat,
            lon,
            category,
            place_type,
            importance,
            address: _,
        } = from;
        Self {
            display_name,
            lat,
            lon,
            category,
            place_type,
            importance,
        }
    }
}

impl From<e::place::GeocodedPlace> for ReverseGeocoded {
    fn from(from: e::place::GeocodedPlace) -> Self {
        let e::place::GeocodedPlace {
            display_name,
            address,
            ..
        } = from;
        Self {
            display_name,
            address: address.map(Into::into).unwrap_or_default(),
        }
    }
}

impl From<e::profile::PendingVerification> for PendingUser {
    fn from(from: e::profile::PendingVerification) -> Self {
        let e::profile::PendingVerification {
            profile,
            email,
            document_url,
        } = from;
        let e::profile::Profile {
            id,
            name,
            location,
            bio,
            role,
            is_verified,
        } = profile;
        Self {
            id: id.into(),
            name,
            location,
            bio,
            is_verified,
            document_url,
            email: email.unwrap_or_else(|| "N/A".to_string()),
            role: role
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

impl From<(e::profile::Profile, e::geo::Distance)> for RankedProfile {
    fn from(from: (e::profile::Profile, e::geo::Distance)) -> Self {
        let (profile, distance) = from;
        let e::profile::Profile {
            id,
            name,
            location,
            role,
            ..
        } = profile;
        Self {
            id: id.into(),
            name,
            location,
            role: role.map(|r| r.to_string()),
            distance_km: distance.to_kilometers(),
        }
    }
}
