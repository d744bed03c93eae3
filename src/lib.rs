pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use store::HabitStore;

#[derive(Clone)]
pub struct AppState {
    pub store: HabitStore,
    pub config: Arc<Config>,
}

pub fn app(state: AppState) -> Router {
    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = vec![state
            .config
            .frontend_url
            .parse::<axum::http::HeaderValue>()
            .unwrap()];
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Habits
        .route("/api/habits", get(handlers::habits::list_habits))
        .route("/api/habits", post(handlers::habits::create_habit))
        .route("/api/habits/active", get(handlers::habits::list_active_habits))
        .route("/api/habits/pending", get(handlers::habits::list_pending_habits))
        .route("/api/habits/:id/archive", post(handlers::habits::archive_habit))
        .route("/api/habits/:id", delete(handlers::habits::delete_habit))
        // Logs & streak
        .route("/api/logs", post(handlers::logs::create_log))
        .route("/api/logs/today", get(handlers::logs::list_today_logs))
        .route("/api/logs/recent", get(handlers::logs::list_recent_logs))
        .route("/api/streak", get(handlers::logs::get_streak))
        // Notes
        .route("/api/notes", post(handlers::notes::create_note))
        .route("/api/notes", get(handlers::notes::list_notes))
        .route("/api/notes/:id", delete(handlers::notes::delete_note))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
