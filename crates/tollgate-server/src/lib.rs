// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP front end for Tollgate.
//!
//! The same [`axum::Router`] is served by the Lambda runtime in production
//! and by a local listener during development.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod version;

pub use error::ServerError;
pub use state::{create_app_state, AppState};

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

pub const COOKIE_PATH: &str = "/api/v1/cookie";
pub const ITEMS_PATH: &str = "/api/v1/example";

/// Build the application router. Every response carries
/// `Access-Control-Allow-Origin: *`.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route(COOKIE_PATH, any(routes::cookie::issue_cookie))
		.route(ITEMS_PATH, any(routes::items::item_without_id))
		.route("/api/v1/example/", any(routes::items::item_without_id))
		.route("/api/v1/example/{item_id}", any(routes::items::item))
		.fallback(routes::not_found)
		.layer(axum::middleware::map_response(middleware::allow_any_origin))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
