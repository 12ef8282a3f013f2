// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue},
	response::Response,
};

/// Mark every response, errors included, as readable from any origin.
pub async fn allow_any_origin(mut response: Response) -> Response {
	response
		.headers_mut()
		.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
	response
}
