//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and Leptos SSR rendering under a single
//! Axum router. The portfolio page lives at `/` and the feed prototype at
//! `/appfeed`, both rendered by the `client` crate. When `REDIRECT_ALL_TO`
//! is configured the router short-circuits: every page request is answered
//! with a temporary redirect and only the API surface stays local.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use axum::routing::get;
use catalog::{AppPost, Builder};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Read-only JSON API over the compiled-in catalog.
fn api_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/builders", get(list_builders))
        .route("/api/apps", get(list_apps))
        .route("/healthz", get(healthz))
        .layer(cors)
}

/// `GET /api/builders`: the full builder roster.
async fn list_builders() -> Json<&'static [Builder]> {
    Json(catalog::seed::builders())
}

/// `GET /api/apps`: every seed post, in feed order.
async fn list_apps() -> Json<&'static [AppPost]> {
    Json(catalog::seed::posts())
}

/// Leptos SSR frontend with the JSON API merged in.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(config: &Config) -> Result<Router, String> {
    // Deployment variant: park the pages behind a redirect, keep the API local.
    if let Some(target) = config.redirect_all_to.clone() {
        let redirect = move || {
            let target = target.clone();
            async move { Redirect::temporary(&target) }
        };
        return Ok(api_routes()
            .fallback(redirect)
            .layer(TraceLayer::new_for_http()));
    }

    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
