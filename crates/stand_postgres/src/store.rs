//! Postgres implementation of the `StandStore` port.
//!
//! All SQL is runtime-checked (`sqlx::query_as`, not `sqlx::query_as!`) to
//! avoid a compile-time database requirement. Column lists come from the
//! record structs, which come from the field manifests.

use std::collections::HashMap;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use stand_core::domain::Stand;
use stand_core::ports::{Result, StandStore};

use crate::records::{
    select_list, StandAttributesRecord, StandPartRecord, StandRecord, STAND_ATTRIBUTES_TABLE,
    STAND_PART_TABLE, STAND_TABLE,
};

/// Read one stand and its full subtree over a single connection.
///
/// Parts are ordered by `stand_part_oid`, as are the attribute rows within
/// a part. A part without an attributes row gets an empty list.
pub async fn load_stand_tree(
    conn: &mut PgConnection,
    stand_oid: &str,
) -> std::result::Result<Option<StandRecord>, sqlx::Error> {
    let stand_sql = format!(
        "SELECT {} FROM {} WHERE stand_oid = $1",
        select_list(StandRecord::COLUMNS),
        STAND_TABLE
    );
    let Some(mut stand) = sqlx::query_as::<_, StandRecord>(&stand_sql)
        .bind(stand_oid)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(None);
    };

    let parts_sql = format!(
        "SELECT {} FROM {} WHERE stand_oid = $1 ORDER BY stand_part_oid",
        select_list(StandPartRecord::COLUMNS),
        STAND_PART_TABLE
    );
    let mut parts = sqlx::query_as::<_, StandPartRecord>(&parts_sql)
        .bind(stand_oid)
        .fetch_all(&mut *conn)
        .await?;

    if !parts.is_empty() {
        let part_oids: Vec<String> = parts.iter().map(|p| p.stand_part_oid.clone()).collect();
        let attributes_sql = format!(
            "SELECT {} FROM {} WHERE stand_part_oid = ANY($1) ORDER BY stand_part_oid",
            select_list(StandAttributesRecord::COLUMNS),
            STAND_ATTRIBUTES_TABLE
        );
        let attributes = sqlx::query_as::<_, StandAttributesRecord>(&attributes_sql)
            .bind(part_oids)
            .fetch_all(&mut *conn)
            .await?;

        let mut by_part: HashMap<String, Vec<StandAttributesRecord>> = HashMap::new();
        for row in attributes {
            by_part
                .entry(row.stand_part_oid.clone())
                .or_default()
                .push(row);
        }
        for part in &mut parts {
            part.stand_attribute_children = by_part.remove(&part.stand_part_oid).unwrap_or_default();
        }
    }

    stand.stand_part_children = parts;
    Ok(Some(stand))
}

// ── PgStandStore ──────────────────────────────────────────────

/// Postgres-backed stand store.
pub struct PgStandStore {
    pool: PgPool,
}

impl PgStandStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fetch the record subtree for a stand.
    ///
    /// The pooled connection is held for the duration of the reads and goes
    /// back to the pool when the guard drops, whichever way this returns.
    pub async fn fetch_stand_record(
        &self,
        stand_oid: &str,
    ) -> std::result::Result<Option<StandRecord>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        load_stand_tree(&mut conn, stand_oid).await
    }
}

#[async_trait]
impl StandStore for PgStandStore {
    #[tracing::instrument(skip(self))]
    async fn find_stand(&self, stand_oid: &str) -> Result<Option<Stand>> {
        let record = self
            .fetch_stand_record(stand_oid)
            .await
            .with_context(|| format!("failed to load stand {stand_oid}"))?;
        Ok(record.map(Stand::from))
    }
}
