//! # homesit-gateways
//!
//! Outbound HTTP adapters: the Nominatim geocoding client and the
//! profile-directory client.

pub mod directory;
pub mod nominatim;
