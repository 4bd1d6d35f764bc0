use thiserror::Error;

use crate::{gateways, util::validate::GeocodeInvalidation};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Query must be between 2 and 500 characters")]
    QueryLength,
    #[error("Invalid coordinates")]
    InvalidCoordinates,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("The profile does not exist")]
    ProfileDoesNotExist,
    #[error("Too many requests. Please try again later.")]
    RateLimited,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    GeoCoding(#[from] gateways::geocode::Error),
    #[error(transparent)]
    Directory(#[from] gateways::directory::Error),
}

impl From<GeocodeInvalidation> for Error {
    fn from(err: GeocodeInvalidation) -> Self {
        match err {
            GeocodeInvalidation::QueryLength => Self::QueryLength,
            GeocodeInvalidation::Coordinates => Self::InvalidCoordinates,
        }
    }
}
