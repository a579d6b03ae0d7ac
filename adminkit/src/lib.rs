//! Generic record administration core.
//!
//! The crate provides the pieces an admin console needs for any record kind:
//! an in-memory [`store::Store`] with uniform create/read/update/delete
//! semantics, declarative [`schema::FieldDef`] field schemas that drive both
//! [`validate::Validator`] and [`form::RecordForm`], a searchable/sortable
//! [`table::TableModel`], modal [`controller::Screen`] state machines and the
//! axum/utoipa plumbing in [`rest`] to expose every registered kind over HTTP.

pub mod controller;
pub mod error;
pub mod form;
pub mod logger;
pub mod notify;
pub mod rest;
pub mod schema;
pub mod store;
pub mod table;
pub mod validate;

pub use controller::{Screen, ScreenMode};
pub use error::AppError;
pub use form::{normalize_draft, RecordForm, SubmitOutcome};
pub use notify::{Notifier, Toast};
pub use rest::{build_router, serve, ApiDoc, AppJson, ErrorResponse, RequestState, StructInfo};
pub use schema::{FieldDef, FieldKind, PatternRule, Rules, SelectOption};
pub use store::{fresh_id, Record, Store, StoreHub};
pub use table::{ColumnDef, RowActions, SortDirection, TableModel};
pub use validate::{FieldErrors, Validator};

pub use axum;
pub use chrono;
pub use http;
pub use inventory;
pub use once_cell;
pub use rand;
pub use serde;
pub use serde_json;
pub use tokio;
pub use utoipa;
pub use utoipa_axum;
pub use utoipa_swagger_ui;
