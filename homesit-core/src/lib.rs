//! # homesit-core
//!
//! Domain logic of the HomeSit backend: gateway abstractions, the
//! geocode cache and the usecases built on top of them.

pub mod gateways;
pub mod geocode_cache;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use homesit_entities::{address::*, geo::*, place::*, profile::*};
}
