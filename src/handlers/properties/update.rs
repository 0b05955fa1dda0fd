use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::api::format::{json_not_found, json_ok};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdatePropertyBody {
    pub value: String,
}

/// PUT /playerAccountProperties/:account_id/updateProperty/:key
///
/// Sets the value of the property matching (account, key) and refreshes
/// updated_at. No match means not-found and no mutation.
pub async fn update_property(
    State(state): State<AppState>,
    Path((account_id, key)): Path<(String, String)>,
    Json(body): Json<UpdatePropertyBody>,
) -> Result<Response, ApiError> {
    info!(
        "Updating property with key {} of playerAccount with id: {}",
        key, account_id
    );

    match state
        .properties
        .update_for_account_by_key(&account_id, &key, &body.value)
        .await?
    {
        Some(property) => Ok(json_ok(&property)),
        None => Ok(json_not_found(&json!({}))),
    }
}
