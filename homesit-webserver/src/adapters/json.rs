//! JSON structures of the public API.
//!
//! The wire types live in `homesit-boundary`; the entity conversions are
//! provided by its `entity-conversions` feature.

pub use homesit_boundary::*;
