use super::*;

#[get("/profiles/<id>/nearby?<limit>")]
pub fn get_profiles_nearby(
    cfg: &State<Cfg>,
    auth: Auth,
    geocoder: &State<GeoCoding>,
    directory: &State<Directory>,
    cache: &State<GeocodeCache>,
    id: String,
    limit: Option<usize>,
) -> Result<Vec<json::RankedProfile>> {
    auth.application(cfg)?;
    let limit = limit.unwrap_or(usecases::DEFAULT_NEARBY_LIMIT);
    let ranked = usecases::recommend_nearby(
        directory.inner(),
        geocoder.inner(),
        cache,
        &id.into(),
        limit,
    )?;
    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}
