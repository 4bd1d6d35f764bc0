use rocket::request::{FromRequest, Outcome, Request};

use crate::web::Cfg;
use homesit_core::{
    gateways::{directory, geocode},
    usecases::Error as ParameterError,
};
use homesit_entities::{
    geo::MapPoint,
    place::GeocodedPlace,
    profile::{PendingVerification, Profile},
};

/// Sentinel identifier shared by all clients whose network address
/// cannot be determined.
pub const UNKNOWN_CLIENT: &str = "unknown";

type Result<T> = std::result::Result<T, ParameterError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// Client identity used for rate accounting.
///
/// Derived from the first `X-Forwarded-For` entry, falling back to
/// `X-Real-IP` and finally to [`UNKNOWN_CLIENT`]. All clients without a
/// determinable address share one rate budget.
#[derive(Debug)]
pub struct ClientIp(String);

impl ClientIp {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_request_headers(request: &Request) -> String {
        request
            .headers()
            .get_one("X-Forwarded-For")
            .and_then(|forwarded| forwarded.split(',').next())
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .or_else(|| request.headers().get_one("X-Real-IP"))
            .unwrap_or(UNKNOWN_CLIENT)
            .to_owned()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientIp {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(ClientIp(Self::from_request_headers(request)))
    }
}

/// Bearer credentials presented by the caller.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
}

impl Auth {
    /// Requires the shared application credential.
    pub fn application(&self, cfg: &Cfg) -> Result<()> {
        if self
            .bearer_tokens
            .iter()
            .any(|t| cfg.api_tokens.contains(t) || cfg.admin_tokens.contains(t))
        {
            Ok(())
        } else {
            Err(ParameterError::Unauthorized)
        }
    }

    /// Requires an administrative credential.
    ///
    /// A valid application credential is explicitly not enough and is
    /// answered with `Forbidden` instead of `Unauthorized`.
    pub fn admin(&self, cfg: &Cfg) -> Result<()> {
        if self
            .bearer_tokens
            .iter()
            .any(|t| cfg.admin_tokens.contains(t))
        {
            return Ok(());
        }
        if self.bearer_tokens.iter().any(|t| cfg.api_tokens.contains(t)) {
            return Err(ParameterError::Forbidden);
        }
        Err(ParameterError::Unauthorized)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        Outcome::Success(Auth { bearer_tokens })
    }
}

pub struct GeoCoding(pub Box<dyn geocode::GeoCodingGateway + Send + Sync>);

impl geocode::GeoCodingGateway for GeoCoding {
    fn forward_search(
        &self,
        query: &str,
    ) -> std::result::Result<Vec<GeocodedPlace>, geocode::Error> {
        self.0.forward_search(query)
    }

    fn reverse_lookup(
        &self,
        pos: MapPoint,
    ) -> std::result::Result<Option<GeocodedPlace>, geocode::Error> {
        self.0.reverse_lookup(pos)
    }

    fn resolve_location_lat_lng(&self, location: &str) -> Option<MapPoint> {
        self.0.resolve_location_lat_lng(location)
    }
}

pub struct Directory(pub Box<dyn directory::ProfileDirectoryGateway + Send + Sync>);

impl directory::ProfileDirectoryGateway for Directory {
    fn all_profiles(&self) -> std::result::Result<Vec<Profile>, directory::Error> {
        self.0.all_profiles()
    }

    fn pending_verifications(
        &self,
    ) -> std::result::Result<Vec<PendingVerification>, directory::Error> {
        self.0.pending_verifications()
    }
}

pub struct Version(pub &'static str);
