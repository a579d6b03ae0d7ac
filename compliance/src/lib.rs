//! Supply-chain compliance console built on the adminkit core.
//!
//! Six record kinds — partners, risks, actions, communications, case studies
//! and SDG goals — each get a store, a field schema, a management screen and
//! a REST route group, plus dashboard aggregates over the lot.

pub mod controllers;
pub mod data;
pub mod routes;
pub mod schemas;
pub mod summary;
pub mod types;

pub use controllers::AppStores;
pub use types::*;
