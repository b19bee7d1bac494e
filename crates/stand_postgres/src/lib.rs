//! Postgres record layer for stands.
//!
//! `records` holds the row structs and their conversions to and from the
//! domain; `store` materializes a stand subtree and implements the core
//! `StandStore` port; `pool` builds the connection pool from explicit
//! options.

pub mod pool;
pub mod records;
pub mod store;

pub use pool::PoolConfig;
pub use records::{StandAttributesRecord, StandPartRecord, StandRecord};
pub use store::{load_stand_tree, PgStandStore};
