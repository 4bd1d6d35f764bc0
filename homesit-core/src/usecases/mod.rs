mod error;
mod pending_verifications;
mod recommend_nearby;
mod resolve_location;

pub use self::{
    error::Error, pending_verifications::*, recommend_nearby::*, resolve_location::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::{directory::ProfileDirectoryGateway, geocode::GeoCodingGateway},
        geocode_cache::GeocodeCache,
    };
}
