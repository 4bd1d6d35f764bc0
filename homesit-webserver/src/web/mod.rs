use std::{collections::HashSet, time::Duration};

use rocket::{config::Config as RocketCfg, Build, Rocket, Route};

use homesit_core::{
    gateways::{directory::ProfileDirectoryGateway, geocode::GeoCodingGateway},
    geocode_cache::GeocodeCache,
};

pub mod api;
mod guards;
mod rate_limit;

#[cfg(test)]
mod mocks;

use rate_limit::RateLimiter;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Shared application-level credentials accepted on public API routes.
    pub api_tokens: HashSet<String>,
    /// Credentials granting access to privileged lookups.
    pub admin_tokens: HashSet<String>,
    pub rate_limit: RateLimitCfg,
}

#[derive(Debug, Clone)]
pub struct RateLimitCfg {
    pub max_requests: u32,
    pub window: Duration,
}

impl Default for RateLimitCfg {
    fn default() -> Self {
        Self {
            max_requests: 20,
            window: Duration::from_secs(60),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
    directory: Box<dyn ProfileDirectoryGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, gateways: Gateways) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways {
        geocoding,
        directory,
    } = gateways;

    let geocode_cache = GeocodeCache::new();
    let rate_limiter = RateLimiter::new(cfg.rate_limit.max_requests, cfg.rate_limit.window);

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);
    let directory_gw = guards::Directory(directory);
    let version = guards::Version(version);

    let mut instance = r
        .manage(geo_gw)
        .manage(directory_gw)
        .manage(geocode_cache)
        .manage(rate_limiter)
        .manage(cfg)
        .manage(version);

    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    cfg: Cfg,
    enable_cors: bool,
    geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
    directory: Box<dyn ProfileDirectoryGateway + Send + Sync>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways {
        geocoding,
        directory,
    };

    let instance = rocket_instance(options, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
