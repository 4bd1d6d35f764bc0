#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # homesit-entities
//!
//! Reusable, agnostic domain entities for HomeSit.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod geo;
pub mod place;
pub mod profile;
