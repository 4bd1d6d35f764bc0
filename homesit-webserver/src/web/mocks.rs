use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;

use homesit_core::gateways::{directory, geocode};
use homesit_entities::{
    address::Address,
    geo::MapPoint,
    place::GeocodedPlace,
    profile::{PendingVerification, Profile, Role},
};

/// Geocoding double with canned responses and a call counter.
///
/// Clones share their state, so tests can keep a handle after boxing
/// one for the server.
#[derive(Clone, Default)]
pub struct FakeGeoCodingGateway {
    forward_results: Arc<Mutex<HashMap<String, Vec<GeocodedPlace>>>>,
    reverse_result: Arc<Mutex<Option<GeocodedPlace>>>,
    failing: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl FakeGeoCodingGateway {
    pub fn add_forward_result(&self, query: &str, results: Vec<GeocodedPlace>) {
        self.forward_results
            .lock()
            .insert(query.to_owned(), results);
    }

    pub fn set_reverse_result(&self, result: Option<GeocodedPlace>) {
        *self.reverse_result.lock() = result;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail_if_requested(&self) -> Result<(), geocode::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(geocode::Error::UpstreamStatus(502))
        } else {
            Ok(())
        }
    }
}

impl geocode::GeoCodingGateway for FakeGeoCodingGateway {
    fn forward_search(&self, query: &str) -> Result<Vec<GeocodedPlace>, geocode::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if_requested()?;
        Ok(self
            .forward_results
            .lock()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    fn reverse_lookup(&self, _pos: MapPoint) -> Result<Option<GeocodedPlace>, geocode::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if_requested()?;
        Ok(self.reverse_result.lock().clone())
    }
}

/// Directory double backed by fixed lists.
#[derive(Clone, Default)]
pub struct FakeDirectoryGateway {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
    pub pending: Arc<Mutex<Vec<PendingVerification>>>,
}

impl FakeDirectoryGateway {
    pub fn add_profile(&self, profile: Profile) {
        self.profiles.lock().push(profile);
    }

    pub fn add_pending(&self, pending: PendingVerification) {
        self.pending.lock().push(pending);
    }
}

impl directory::ProfileDirectoryGateway for FakeDirectoryGateway {
    fn all_profiles(&self) -> Result<Vec<Profile>, directory::Error> {
        Ok(self.profiles.lock().clone())
    }

    fn pending_verifications(&self) -> Result<Vec<PendingVerification>, directory::Error> {
        Ok(self.pending.lock().clone())
    }
}

pub fn place(display_name: &str, lat: f64, lon: f64) -> GeocodedPlace {
    GeocodedPlace {
        display_name: display_name.to_owned(),
        lat: lat.to_string(),
        lon: lon.to_string(),
        ..Default::default()
    }
}

pub fn place_with_address(display_name: &str, lat: f64, lon: f64, address: Address) -> GeocodedPlace {
    GeocodedPlace {
        address: Some(address),
        ..place(display_name, lat, lon)
    }
}

pub fn profile(id: &str, name: &str, location: Option<&str>) -> Profile {
    Profile {
        id: id.into(),
        name: name.to_owned(),
        location: location.map(ToOwned::to_owned),
        role: Some(Role::Sitter),
        ..Default::default()
    }
}
