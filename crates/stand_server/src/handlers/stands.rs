//! Stand handlers.
//!
//! GET /stands/             placeholder listing of known stand identifiers
//! GET /stands/:stand_oid/  one stand with its parts and attributes

use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use serde::{Deserialize, Serialize};
use stand_core::{StandSchema, StandService};

use crate::error::AppError;

// TODO: replace with a query over "STAND" once listing needs paging rules.
pub const LISTED_STAND_OIDS: [&str; 3] = ["9001001001", "9001001002", "9001001098"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandListResponse {
    pub stands: Vec<String>,
}

pub async fn list_stands() -> Json<StandListResponse> {
    Json(StandListResponse {
        stands: LISTED_STAND_OIDS.iter().map(|s| s.to_string()).collect(),
    })
}

pub async fn get_stand(
    Extension(service): Extension<Arc<StandService>>,
    Path(stand_oid): Path<String>,
) -> Result<Json<StandSchema>, AppError> {
    let stand = service.require_stand(&stand_oid).await?;
    Ok(Json(StandSchema::from(stand)))
}
