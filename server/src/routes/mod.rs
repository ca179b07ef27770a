//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos renders the landing page at `/`; the hydrate bundle is served from
//! `/pkg` and every other path falls through to the static site root
//! (images copied from `client/public`).


use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vector24_client::app::{App, shell};

use crate::config::ServerConfig;

/// Full application router: health check, SSR page, bundle and assets.
pub fn app(config: &ServerConfig) -> Router {
    let leptos_options = config.leptos.clone();
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    let site_root = config.site_root();

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
