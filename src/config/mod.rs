use std::{
    collections::HashSet,
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};

use anyhow::{anyhow, Result};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "homesit.toml";

const ENV_NAME_DIRECTORY_SERVICE_KEY: &str = "DIRECTORY_SERVICE_KEY";

pub struct Config {
    pub webserver: WebServer,
    pub auth: Auth,
    pub geocoding: Geocoding,
    pub directory: Option<Directory>,
    pub rate_limit: RateLimit,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Auth {
    /// Shared application-level credentials for the public API.
    pub api_tokens: HashSet<String>,
    /// Credentials granting access to privileged lookups.
    pub admin_tokens: HashSet<String>,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    Nominatim(NominatimOverrides),
}

/// Optional deviations from the gateway's built-in defaults.
#[derive(Default)]
pub struct NominatimOverrides {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub search_suffix: Option<String>,
    pub country_codes: Option<String>,
}

pub struct Directory {
    pub base_url: String,
    pub service_key: Option<String>,
}

pub struct RateLimit {
    pub max_requests: u32,
    pub window: Duration,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let (Some(directory), Ok(key)) = (
            cfg.directory.as_mut(),
            env::var(ENV_NAME_DIRECTORY_SERVICE_KEY),
        ) {
            directory.service_key = Some(key);
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            auth,
            geocoding,
            rate_limit,
            gateway,
        } = from;

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Auth {
            api_tokens,
            admin_tokens,
        } = auth.unwrap_or_default();
        let auth = Auth {
            api_tokens: api_tokens.into_iter().collect(),
            admin_tokens: admin_tokens.into_iter().collect(),
        };

        let gateway = gateway.unwrap_or_default();

        let geo_gateway = match geocoding.unwrap_or_default().gateway {
            Some(gw_name) => {
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            base_url,
                            user_agent,
                            search_suffix,
                            country_codes,
                        } = gateway.nominatim.clone().unwrap_or_default();
                        GeocodingGateway::Nominatim(NominatimOverrides {
                            base_url,
                            user_agent,
                            search_suffix,
                            country_codes,
                        })
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let directory = gateway.directory.map(|d| {
            let raw::Directory {
                base_url,
                service_key,
            } = d;
            Directory {
                base_url,
                service_key,
            }
        });

        let raw::RateLimit {
            max_requests,
            window,
        } = rate_limit.unwrap_or_default();
        if max_requests == 0 {
            return Err(anyhow!("Rate limit of 0 requests per window"));
        }
        if window.is_zero() {
            return Err(anyhow!("Empty rate limit window"));
        }
        let rate_limit = RateLimit {
            max_requests,
            window,
        };

        Ok(Self {
            webserver,
            auth,
            geocoding,
            directory,
            rate_limit,
        })
    }
}
