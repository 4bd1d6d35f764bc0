use std::time::Duration;

use duration_str::deserialize_duration;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = include_str!("homesit.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub auth: Option<Auth>,
    pub geocoding: Option<Geocoding>,
    pub rate_limit: Option<RateLimit>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default().webserver.expect("Webserver configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Auth {
    pub api_tokens: Vec<String>,
    pub admin_tokens: Vec<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RateLimit {
    pub max_requests: u32,
    #[serde(deserialize_with = "deserialize_duration")]
    pub window: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Config::default()
            .rate_limit
            .expect("Rate limit configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub directory: Option<Directory>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub search_suffix: Option<String>,
    pub country_codes: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Directory {
    pub base_url: String,
    pub service_key: Option<String>,
}
