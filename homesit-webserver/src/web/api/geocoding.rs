use super::*;
use homesit_core::{
    gateways::geocode::GeoCodingGateway, usecases::Error as ParameterError, util::validate,
};

/// The geocode proxy.
///
/// Forward mode (`{"query": ...}`) returns the provider's candidate list
/// unmodified; reverse mode (`{"lat": ..., "lon": ...}`) returns a place
/// description. Reverse mode takes precedence when both coordinates are
/// present. The proxy holds no state beyond the per-client rate
/// accounting and does not consult the geocode cache.
#[post("/geocode", data = "<request>")]
pub fn post_geocode(
    cfg: &State<Cfg>,
    auth: Auth,
    client: ClientIp,
    limiter: &State<RateLimiter>,
    geocoder: &State<GeoCoding>,
    request: JsonResult<json::GeocodeRequest>,
) -> Result<json::GeocodeResponse> {
    auth.application(cfg)?;
    if !limiter.try_acquire(client.as_str()) {
        info!("Rate limited client: {}", client.as_str());
        return Err(ParameterError::RateLimited.into());
    }

    let json::GeocodeRequest { query, lat, lon } = request?.into_inner();

    if let (Some(lat), Some(lon)) = (lat, lon) {
        let pos = validate::reverse_coords(lat, lon).map_err(ParameterError::from)?;
        let place = geocoder
            .reverse_lookup(pos)
            .map_err(ParameterError::from)?;
        // "No place found" is an empty description, not an error.
        let reverse = place.map(Into::into).unwrap_or_default();
        return Ok(Json(json::GeocodeResponse::Reverse(reverse)));
    }

    let query = query.unwrap_or_default();
    let query = validate::forward_query(&query).map_err(ParameterError::from)?;
    let results = geocoder
        .forward_search(query)
        .map_err(ParameterError::from)?;
    Ok(Json(json::GeocodeResponse::Forward(
        results.into_iter().map(Into::into).collect(),
    )))
}
