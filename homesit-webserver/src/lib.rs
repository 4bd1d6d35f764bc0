#[macro_use]
extern crate log;

use homesit_core::gateways::{directory::ProfileDirectoryGateway, geocode::GeoCodingGateway};

mod adapters;
mod web;

pub use web::{Cfg, RateLimitCfg};

pub async fn run(
    cfg: Cfg,
    enable_cors: bool,
    geo_gw: Box<dyn GeoCodingGateway + Send + Sync>,
    directory_gw: Box<dyn ProfileDirectoryGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(cfg, enable_cors, geo_gw, directory_gw, version).await;
}
