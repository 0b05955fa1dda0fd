use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;
use tracing::info;

use crate::api::format::{json_not_found, json_ok};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /playerAccountProperties/properties - every property of every
/// account, account-populated
pub async fn all_properties(State(state): State<AppState>) -> Result<Response, ApiError> {
    info!("Getting all playerAccounts properties from db...");

    let properties = state.properties.list_all().await?;
    if properties.is_empty() {
        return Ok(json_not_found(&properties));
    }
    Ok(json_ok(&properties))
}

/// GET /playerAccountProperties/propertiesByKey/:key - global filter by
/// exact key
pub async fn properties_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    info!("Getting all playerAccounts properties with key {} from db...", key);

    let properties = state.properties.list_by_key(&key).await?;
    if properties.is_empty() {
        return Ok(json_not_found(&properties));
    }
    Ok(json_ok(&properties))
}

/// GET /playerAccountProperties/propertiesByValue/:value - global filter
/// by exact value
pub async fn properties_by_value(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Response, ApiError> {
    info!("Getting all playerAccounts properties with value {} from db...", value);

    let properties = state.properties.list_by_value(&value).await?;
    if properties.is_empty() {
        return Ok(json_not_found(&properties));
    }
    Ok(json_ok(&properties))
}

/// GET /playerAccountProperties/:account_id/properties - every property of
/// one account
pub async fn account_properties(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Response, ApiError> {
    info!("Getting all properties of playerAccount with id: {}", account_id);

    let properties = state.properties.list_for_account(&account_id).await?;
    if properties.is_empty() {
        return Ok(json_not_found(&properties));
    }
    Ok(json_ok(&properties))
}

/// GET /playerAccountProperties/:account_id/propertiesByKey/:key - single
/// match for one account
pub async fn account_properties_by_key(
    State(state): State<AppState>,
    Path((account_id, key)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    info!(
        "Getting property with key {} of playerAccount with id: {}",
        key, account_id
    );

    match state.properties.get_for_account_by_key(&account_id, &key).await? {
        Some(property) => Ok(json_ok(&property)),
        None => Ok(json_not_found(&json!({}))),
    }
}

/// GET /playerAccountProperties/:account_id/propertiesByValue/:value - all
/// matches for one account
pub async fn account_properties_by_value(
    State(state): State<AppState>,
    Path((account_id, value)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    info!(
        "Getting properties with value {} of playerAccount with id: {}",
        value, account_id
    );

    let properties = state
        .properties
        .list_for_account_by_value(&account_id, &value)
        .await?;
    if properties.is_empty() {
        return Ok(json_not_found(&properties));
    }
    Ok(json_ok(&properties))
}
