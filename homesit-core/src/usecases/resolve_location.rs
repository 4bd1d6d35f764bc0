use std::{collections::HashMap, thread, time::Duration};

use super::prelude::*;

/// Fixed pause before each outbound lookup, respecting the provider's
/// one-request-per-second courtesy limit. Cache hits skip it entirely.
pub const COURTESY_DELAY: Duration = Duration::from_secs(1);

/// Resolves a free-text location to a coordinate, consulting the cache
/// first.
///
/// Only successful resolutions are cached, so a transient provider
/// failure is retried on the next use instead of poisoning the cache.
pub fn resolve_location<G>(gw: &G, cache: &GeocodeCache, location: &str) -> Option<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    resolve_location_with_delay(gw, cache, location, COURTESY_DELAY)
}

pub(crate) fn resolve_location_with_delay<G>(
    gw: &G,
    cache: &GeocodeCache,
    location: &str,
    delay: Duration,
) -> Option<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    if location.is_empty() {
        return None;
    }
    if let Some(cached) = cache.get(location) {
        return Some(cached);
    }
    thread::sleep(delay);
    let pos = gw.resolve_location_lat_lng(location)?;
    cache.insert(location, pos);
    Some(pos)
}

/// Resolves a batch of locations serially.
///
/// Duplicates are looked up once and unresolvable locations are absent
/// from the result. With N uncached locations this takes at least
/// N seconds because of [`COURTESY_DELAY`].
pub fn resolve_locations<'a, G, I>(
    gw: &G,
    cache: &GeocodeCache,
    locations: I,
) -> HashMap<String, MapPoint>
where
    G: GeoCodingGateway + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    resolve_locations_with_delay(gw, cache, locations, COURTESY_DELAY)
}

pub(crate) fn resolve_locations_with_delay<'a, G, I>(
    gw: &G,
    cache: &GeocodeCache,
    locations: I,
    delay: Duration,
) -> HashMap<String, MapPoint>
where
    G: GeoCodingGateway + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut results = HashMap::new();
    for location in locations {
        if location.is_empty() || results.contains_key(location) {
            continue;
        }
        if let Some(pos) = resolve_location_with_delay(gw, cache, location, delay) {
            results.insert(location.to_owned(), pos);
        }
    }
    results
}
