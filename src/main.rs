use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use player_props_api::config;
use player_props_api::database::manager;
use player_props_api::handlers::properties;
use player_props_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PROPS_DB, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting player-props API in {:?} mode", config.environment);

    let pool = manager::connect().await?;
    manager::migrate(&pool).await?;

    let app = app(AppState::new(pool));

    // Allow tests or deployments to override port via env
    let port = std::env::var("PROPS_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("player-props API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    let config = config::config();

    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(property_routes())
        .with_state(state);

    if config.server.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn property_routes() -> Router<AppState> {
    use axum::routing::{post, put};

    Router::new()
        // Global property views
        .route(
            "/playerAccountProperties/properties",
            get(properties::all_properties),
        )
        .route(
            "/playerAccountProperties/propertiesByKey/:key",
            get(properties::properties_by_key),
        )
        .route(
            "/playerAccountProperties/propertiesByValue/:value",
            get(properties::properties_by_value),
        )
        // Account-scoped operations
        .route(
            "/playerAccountProperties/:account_id/addProperty",
            post(properties::add_property),
        )
        .route(
            "/playerAccountProperties/:account_id/properties",
            get(properties::account_properties),
        )
        .route(
            "/playerAccountProperties/:account_id/propertiesByKey/:key",
            get(properties::account_properties_by_key),
        )
        .route(
            "/playerAccountProperties/:account_id/propertiesByValue/:value",
            get(properties::account_properties_by_value),
        )
        .route(
            "/playerAccountProperties/:account_id/updateProperty/:key",
            put(properties::update_property),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "player-props-api",
        "version": version,
        "description": "Key/value properties attached to player accounts",
        "endpoints": {
            "properties": "/playerAccountProperties/properties",
            "properties_by_key": "/playerAccountProperties/propertiesByKey/:key",
            "properties_by_value": "/playerAccountProperties/propertiesByValue/:value",
            "account_properties": "/playerAccountProperties/:account_id/properties",
            "account_property_by_key": "/playerAccountProperties/:account_id/propertiesByKey/:key",
            "account_properties_by_value": "/playerAccountProperties/:account_id/propertiesByValue/:value",
            "add_property": "POST /playerAccountProperties/:account_id/addProperty",
            "update_property": "PUT /playerAccountProperties/:account_id/updateProperty/:key",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match manager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
