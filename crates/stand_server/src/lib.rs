//! stand_server: read-only REST surface for forestry stands.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
