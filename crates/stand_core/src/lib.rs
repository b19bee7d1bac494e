//! Stand core: pure domain types, wire schema, storage port and lookup service.
//!
//! Nothing in this crate talks to a database. The Postgres adapter lives in
//! `stand_postgres`; the HTTP boundary lives in `stand_server`.

pub mod domain;
pub mod error;
pub mod fields;
pub mod memory;
pub mod ports;
pub mod schema;
pub mod service;

// Re-exported so the field manifests can name these types from any crate.
pub use chrono;
pub use rust_decimal;

pub use domain::{Stand, StandAttributes, StandPart};
pub use error::StandError;
pub use schema::{StandAttributesSchema, StandPartSchema, StandSchema};
pub use service::StandService;
