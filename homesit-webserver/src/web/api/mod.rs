use std::{fmt::Display, result};

use homesit_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, rate_limit::RateLimiter, Cfg};
use crate::adapters::json;
use homesit_core::{geocode_cache::GeocodeCache, usecases};

mod error;
mod geocoding;
mod profiles;
mod users;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   geocoding   --- //
        geocoding::post_geocode,
        // ---   profiles   --- //
        profiles::get_profiles_nearby,
        // ---   users   --- //
        users::get_pending_users,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let error = err.to_string();
    let boundary_error = JsonErrorResponse { error };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
