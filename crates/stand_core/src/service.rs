//! StandService, the lookup composition point.
//!
//! Holds the storage port behind `Arc<dyn StandStore>` so the same logic
//! runs against Postgres in the server and against in-memory doubles in
//! tests. The handle is constructed in `main` and passed in.

use std::sync::Arc;

use crate::{domain::Stand, error::StandError, ports::StandStore};

pub type Result<T> = std::result::Result<T, StandError>;

pub struct StandService {
    store: Arc<dyn StandStore>,
}

impl StandService {
    pub fn new(store: Arc<dyn StandStore>) -> Self {
        Self { store }
    }

    /// Look up a stand by identifier.
    ///
    /// Absence is `Ok(None)`, not an error. Storage faults propagate as
    /// `StandError::Internal` without retry.
    #[tracing::instrument(skip(self))]
    pub async fn get_stand(&self, stand_oid: &str) -> Result<Option<Stand>> {
        if stand_oid.is_empty() {
            return Err(StandError::InvalidInput("stand_oid must not be empty".into()));
        }

        let stand = self.store.find_stand(stand_oid).await?;
        match &stand {
            Some(found) => tracing::debug!(parts = found.stand_parts.len(), "stand loaded"),
            None => tracing::debug!("stand not found"),
        }
        Ok(stand)
    }

    /// Like [`get_stand`](Self::get_stand) but treats absence as `NotFound`.
    pub async fn require_stand(&self, stand_oid: &str) -> Result<Stand> {
        self.get_stand(stand_oid)
            .await?
            .ok_or_else(|| StandError::NotFound(format!("stand {stand_oid}")))
    }
}
