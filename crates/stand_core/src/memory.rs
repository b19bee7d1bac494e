//! In-memory [`StandStore`] for tests and database-less local runs.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::Stand;
use crate::ports::{Result, StandStore};

#[derive(Debug, Default, Clone)]
pub struct InMemoryStandStore {
    stands: HashMap<String, Stand>,
}

impl InMemoryStandStore {
    pub fn new(stands: impl IntoIterator<Item = Stand>) -> Self {
        Self {
            stands: stands
                .into_iter()
                .map(|stand| (stand.stand_oid.clone(), stand))
                .collect(),
        }
    }

    /// Add or replace a stand (builder pattern).
    pub fn with_stand(mut self, stand: Stand) -> Self {
        self.stands.insert(stand.stand_oid.clone(), stand);
        self
    }

    pub fn len(&self) -> usize {
        self.stands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stands.is_empty()
    }
}

#[async_trait]
impl StandStore for InMemoryStandStore {
    async fn find_stand(&self, stand_oid: &str) -> Result<Option<Stand>> {
        Ok(self.stands.get(stand_oid).cloned())
    }
}
