use super::{
    prelude::*,
    resolve_location::{resolve_location, resolve_locations},
};
use crate::util::sort::rank_by_distance;

/// Default number of nearby profiles to recommend.
pub const DEFAULT_NEARBY_LIMIT: usize = 3;

/// Recommends the profiles closest to `profile_id`.
///
/// The free-text locations of all profiles are geocoded through the
/// cache, profiles without a role or a resolvable location are excluded
/// and the remainder is ranked by great-circle distance. Returns an
/// empty list when the reference profile itself has no resolvable
/// location.
pub fn recommend_nearby<D, G>(
    directory: &D,
    geo: &G,
    cache: &GeocodeCache,
    profile_id: &ProfileId,
    limit: usize,
) -> Result<Vec<(Profile, Distance)>>
where
    D: ProfileDirectoryGateway + ?Sized,
    G: GeoCodingGateway + ?Sized,
{
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    let profiles = directory.all_profiles()?;
    let reference = profiles
        .iter()
        .find(|p| &p.id == profile_id)
        .ok_or(Error::ProfileDoesNotExist)?;

    let Some(reference_location) = reference.location.clone() else {
        return Ok(vec![]);
    };
    let reference_id = reference.id.clone();
    let Some(origin) = resolve_location(geo, cache, &reference_location) else {
        return Ok(vec![]);
    };

    let candidates: Vec<Profile> = profiles
        .into_iter()
        .filter(|p| p.id != reference_id && p.role.is_some())
        .collect();
    let resolved = resolve_locations(
        geo,
        cache,
        candidates.iter().filter_map(|p| p.location.as_deref()),
    );

    Ok(rank_by_distance(
        origin,
        candidates,
        |p| {
            p.location
                .as_deref()
                .and_then(|location| resolved.get(location))
                .copied()
        },
        limit,
    ))
}
