use std::time::Duration;

use serde::Deserialize;

use homesit_core::gateways::geocode::{Error, GeoCodingGateway};
use homesit_entities::{address::Address, geo::MapPoint, place::GeocodedPlace};

/// Public Nominatim instance operated by the OpenStreetMap foundation.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Identifies this application to the provider, as required by the
/// Nominatim usage policy.
pub const DEFAULT_USER_AGENT: &str = "HomeSitApp/1.0";

const DEFAULT_SEARCH_SUFFIX: &str = "Australia";
const DEFAULT_COUNTRY_CODES: &str = "au";

// The proxy never returns more candidates than this to its callers.
const MAX_CANDIDATES: &str = "5";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Appended to every forward query, e.g. "Australia".
    pub search_suffix: String,
    /// Comma-separated ISO country codes the search is restricted to.
    pub country_codes: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            search_suffix: DEFAULT_SEARCH_SUFFIX.to_string(),
            country_codes: DEFAULT_COUNTRY_CODES.to_string(),
        }
    }
}

/// Blocking client for the Nominatim HTTP API.
#[derive(Debug, Clone)]
pub struct Nominatim {
    base_url: String,
    search_suffix: String,
    country_codes: String,
    client: reqwest::blocking::Client,
}

impl Nominatim {
    pub fn new(cfg: NominatimConfig) -> Self {
        let NominatimConfig {
            base_url,
            user_agent,
            search_suffix,
            country_codes,
        } = cfg;
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client");
        Self {
            base_url,
            search_suffix,
            country_codes,
            client,
        }
    }

    fn forward_query_string(&self, query: &str) -> String {
        if self.search_suffix.is_empty() {
            query.to_string()
        } else {
            format!("{query}, {}", self.search_suffix)
        }
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<reqwest::blocking::Response, Error> {
        let response = request
            .send()
            .map_err(|err| Error::Unreachable(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }
        Ok(response)
    }
}

impl Default for Nominatim {
    fn default() -> Self {
        Self::new(NominatimConfig::default())
    }
}

#[rustfmt::skip]
#[derive(Debug, Deserialize)]
struct PlaceRecord {
    display_name : String,
    lat          : String,
    lon          : String,
    #[serde(default)]
    class        : Option<String>,
    #[serde(default, rename = "type")]
    kind         : Option<String>,
    #[serde(default)]
    importance   : Option<f64>,
    #[serde(default)]
    address      : Option<AddressRecord>,
}

#[rustfmt::skip]
#[derive(Debug, Default, Deserialize)]
struct AddressRecord {
    #[serde(default)] suburb   : Option<String>,
    #[serde(default)] city     : Option<String>,
    #[serde(default)] town     : Option<String>,
    #[serde(default)] village  : Option<String>,
    #[serde(default)] state    : Option<String>,
    #[serde(default)] postcode : Option<String>,
    #[serde(default)] country  : Option<String>,
}

// Nominatim reports "unable to geocode" as an error object with
// HTTP status 200, not as an empty result.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReverseRecord {
    Found(PlaceRecord),
    NoneFound { error: String },
}

fn to_address(from: AddressRecord) -> Address {
    let AddressRecord {
        suburb,
        city,
        town,
        village,
        state,
        postcode,
        country,
    } = from;
    Address {
        suburb,
        city,
        town,
        village,
        state,
        postcode,
        country,
    }
}

fn to_place(from: PlaceRecord) -> GeocodedPlace {
    let PlaceRecord {
        display_name,
        lat,
        lon,
        class,
        kind,
        importance,
        address,
    } = from;
    GeocodedPlace {
        display_name,
        lat,
        lon,
        category: class,
        place_type: kind,
        importance,
        address: address.map(to_address),
    }
}

impl GeoCodingGateway for Nominatim {
    fn forward_search(&self, query: &str) -> Result<Vec<GeocodedPlace>, Error> {
        let q = self.forward_query_string(query);
        let url = format!("{}/search", self.base_url);
        let request = self.client.get(&url).query(&[
            ("format", "json"),
            ("q", q.as_str()),
            ("limit", MAX_CANDIDATES),
            ("countrycodes", self.country_codes.as_str()),
        ]);
        let records: Vec<PlaceRecord> = self
            .send(request)?
            .json()
            .map_err(|err| Error::UnexpectedResponse(err.to_string()))?;
        Ok(records.into_iter().map(to_place).collect())
    }

    fn reverse_lookup(&self, pos: MapPoint) -> Result<Option<GeocodedPlace>, Error> {
        let lat = pos.lat().to_string();
        let lon = pos.lng().to_string();
        let url = format!("{}/reverse", self.base_url);
        let request = self.client.get(&url).query(&[
            ("format", "json"),
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
        ]);
        let record: ReverseRecord = self
            .send(request)?
            .json()
            .map_err(|err| Error::UnexpectedResponse(err.to_string()))?;
        match record {
            ReverseRecord::Found(place) => Ok(Some(to_place(place))),
            ReverseRecord::NoneFound { error } => {
                log::debug!("No place at {},{}: {}", pos.lat(), pos.lng(), error);
                Ok(None)
            }
        }
    }
}
