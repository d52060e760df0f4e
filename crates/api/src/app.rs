use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::request_id::request_id;
use crate::routes::{
    admin_contacts, admin_events, categories, contacts, dashboard, events, health, newsletter,
    subscribers,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (website-facing)
    let public_routes = Router::new()
        .route("/api/v1/events", get(events::list_events))
        .route("/api/v1/events/:slug", get(events::get_event_by_slug))
        .route(
            "/api/v1/events/:event_id/register",
            post(events::register_for_event),
        )
        .route("/api/v1/categories", get(categories::list_categories))
        .route("/api/v1/newsletter/subscribe", post(newsletter::subscribe))
        .route(
            "/api/v1/newsletter/unsubscribe",
            post(newsletter::unsubscribe),
        )
        .route("/api/v1/contact", post(contacts::submit_contact));

    // Admin routes (identity is enforced upstream by the gateway)
    let admin_routes = Router::new()
        .route("/api/v1/admin/events", post(admin_events::create_event))
        .route(
            "/api/v1/admin/events/:event_id",
            put(admin_events::update_event),
        )
        .route(
            "/api/v1/admin/events/:event_id",
            delete(admin_events::delete_event),
        )
        .route(
            "/api/v1/admin/events/:event_id/registrations",
            get(admin_events::list_registrations),
        )
        .route("/api/v1/admin/contacts", get(admin_contacts::list_contacts))
        .route(
            "/api/v1/admin/contacts/:contact_id",
            get(admin_contacts::get_contact),
        )
        .route(
            "/api/v1/admin/contacts/:contact_id/status",
            patch(admin_contacts::update_contact_status),
        )
        .route(
            "/api/v1/admin/contacts/:contact_id",
            delete(admin_contacts::delete_contact),
        )
        .route(
            "/api/v1/admin/subscribers",
            get(subscribers::list_subscribers),
        )
        .route(
            "/api/v1/admin/subscribers/:email",
            patch(subscribers::update_subscriber),
        )
        .route(
            "/api/v1/admin/subscribers/:email",
            delete(subscribers::delete_subscriber),
        )
        .route(
            "/api/v1/admin/dashboard/stats",
            get(dashboard::get_dashboard_stats),
        )
        .route(
            "/api/v1/admin/dashboard/recent-events",
            get(dashboard::get_recent_events),
        );

    // Health routes
    let health_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live));

    // Merge all routes
    Router::new()
        .merge(health_routes)
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id))
        .layer(cors)
        .with_state(state)
}
