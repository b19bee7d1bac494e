//! Storage port traits.
//! Implemented by stand_postgres. Core logic depends only on these traits.

use async_trait::async_trait;

use crate::domain::Stand;
use crate::error::StandError;

pub type Result<T> = std::result::Result<T, StandError>;

/// Read access to persisted stands.
#[async_trait]
pub trait StandStore: Send + Sync {
    /// Load one stand with its full part/attribute subtree.
    /// Returns `Ok(None)` when no stand has this identifier.
    async fn find_stand(&self, stand_oid: &str) -> Result<Option<Stand>>;
}
