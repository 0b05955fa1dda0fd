use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::api::format::{json_not_found, json_ok};
use crate::error::ApiError;
use crate::services::PropertyError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddPropertyBody {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub active: bool,
}

/// POST /playerAccountProperties/:account_id/addProperty
///
/// Creates a property once the account existence check succeeds; a missing
/// account is a not-found outcome, not an error, and nothing is inserted.
pub async fn add_property(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Json(body): Json<AddPropertyBody>,
) -> Result<Response, ApiError> {
    info!(
        "Adding new property to the playerAccount with id: {}",
        account_id
    );

    match state
        .properties
        .create(&account_id, &body.key, &body.value, body.active)
        .await
    {
        Ok(property) => {
            debug!(property_id = %property.id, "created property");
            Ok(json_ok(&property))
        }
        Err(PropertyError::AccountNotFound(_)) => Ok(json_not_found(&json!({}))),
        Err(err) => Err(err.into()),
    }
}
