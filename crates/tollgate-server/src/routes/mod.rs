// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod cookie;
pub mod items;

use axum::{http::StatusCode, response::IntoResponse, Json};

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
	(StatusCode::NOT_FOUND, Json("Not Found"))
}
