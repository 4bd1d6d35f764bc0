use super::*;

#[get("/users/pending")]
pub fn get_pending_users(
    cfg: &State<Cfg>,
    auth: Auth,
    directory: &State<Directory>,
) -> Result<json::PendingUsersResponse> {
    auth.admin(cfg)?;
    let pending = usecases::pending_verifications(directory.inner())?;
    Ok(Json(json::PendingUsersResponse {
        users: pending.into_iter().map(Into::into).collect(),
    }))
}
