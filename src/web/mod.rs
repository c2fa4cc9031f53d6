use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, PoisonError};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::data::DataStore;

mod assets;
mod error;
mod observability;
mod pages;
pub mod submission;
pub mod templates;
pub mod views;

pub use error::PageError;
pub use templates::Templates;

pub struct AppState {
    pub config: Config,

    pub store: DataStore,

    pub templates: Templates,

    pub prometheus_handle: Option<PrometheusHandle>,

    rng: Mutex<StdRng>,
}

impl AppState {
    /// Run `f` with the shared picture-selection source.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

pub fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let templates =
        Templates::load().map_err(|e| anyhow::anyhow!("Failed to compile templates: {e}"))?;

    let rng = match config.data.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(Arc::new(AppState {
        store: DataStore::new(&config.data),
        templates,
        prometheus_handle,
        rng: Mutex::new(rng),
        config,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config.server.cors_allowed_origins;
    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let public = ServeDir::new(&state.config.server.public_path);

    Router::new()
        .route("/", get(pages::home))
        .route("/themes", get(pages::themes))
        .route("/f/{film}", get(pages::film))
        .route("/t/{theme}", get(pages::theme))
        .route("/add/film", get(pages::add_film))
        .route("/add/film/request", post(pages::submit_film))
        .route("/assets/{*path}", get(assets::serve_asset))
        .route("/metrics", get(observability::get_metrics))
        .fallback_service(public)
        .layer(middleware::from_fn(observability::security_headers))
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_requests))
        .with_state(state)
}
