use homesit_core::{
    entities::{GeocodedPlace, MapPoint, PendingVerification, Profile},
    gateways::{
        directory::{self, ProfileDirectoryGateway},
        geocode::{self, GeoCodingGateway},
    },
};
use homesit_gateways::{
    directory::{ProfileDirectory, ProfileDirectoryConfig},
    nominatim::{Nominatim, NominatimConfig},
};

use crate::config::{Config, GeocodingGateway};

pub fn geocoding_gateway(config: &Config) -> Box<dyn GeoCodingGateway + Send + Sync> {
    match &config.geocoding.gateway {
        Some(GeocodingGateway::Nominatim(overrides)) => {
            let defaults = NominatimConfig::default();
            let cfg = NominatimConfig {
                base_url: overrides.base_url.clone().unwrap_or(defaults.base_url),
                user_agent: overrides.user_agent.clone().unwrap_or(defaults.user_agent),
                search_suffix: overrides
                    .search_suffix
                    .clone()
                    .unwrap_or(defaults.search_suffix),
                country_codes: overrides
                    .country_codes
                    .clone()
                    .unwrap_or(defaults.country_codes),
            };
            log::info!("Use Nominatim geocoding gateway ({})", cfg.base_url);
            Box::new(Nominatim::new(cfg))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Box::new(DummyGeoGw)
        }
    }
}

pub fn directory_gateway(config: &Config) -> Box<dyn ProfileDirectoryGateway + Send + Sync> {
    let Some(directory) = &config.directory else {
        log::warn!("No profile directory was configured");
        return Box::new(DummyDirectoryGw);
    };
    let Some(service_key) = &directory.service_key else {
        log::warn!("The profile directory service key is missing");
        return Box::new(DummyDirectoryGw);
    };
    log::info!("Use profile directory at {}", directory.base_url);
    Box::new(ProfileDirectory::new(ProfileDirectoryConfig {
        base_url: directory.base_url.clone(),
        service_key: service_key.clone(),
    }))
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn forward_search(&self, _query: &str) -> Result<Vec<GeocodedPlace>, geocode::Error> {
        log::debug!("Cannot geocode because no geocoding gateway was configured");
        Ok(vec![])
    }

    fn reverse_lookup(&self, _pos: MapPoint) -> Result<Option<GeocodedPlace>, geocode::Error> {
        log::debug!("Cannot geocode because no geocoding gateway was configured");
        Ok(None)
    }
}

struct DummyDirectoryGw;

impl ProfileDirectoryGateway for DummyDirectoryGw {
    fn all_profiles(&self) -> Result<Vec<Profile>, directory::Error> {
        Err(directory::Error::NotConfigured)
    }

    fn pending_verifications(&self) -> Result<Vec<PendingVerification>, directory::Error> {
        Err(directory::Error::NotConfigured)
    }
}
