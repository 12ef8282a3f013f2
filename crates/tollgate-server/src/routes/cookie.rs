// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Signed-cookie issuance handler.

use axum::{
	extract::State,
	http::{header::SET_COOKIE, HeaderMap, HeaderValue, Method, StatusCode},
	response::{IntoResponse, Response},
	Json,
};
use tracing::{instrument, warn};

use crate::{error::ServerError, state::AppState};

/// Body of a successful issuance.
pub const SUCCESS_BODY: &str = "success";

/// ANY /api/v1/cookie - issue CloudFront signed cookies.
///
/// Missing configuration is reported with 200 and a message body, before
/// the method is looked at. Methods other than GET are answered with 500.
#[instrument(skip(state))]
pub async fn issue_cookie(
	State(state): State<AppState>,
	method: Method,
) -> Result<Response, ServerError> {
	let issuer = match &state.cookie_issuer {
		Ok(issuer) => issuer,
		Err(missing) => {
			warn!(%missing, "cookie requested without configuration");
			return Ok((StatusCode::OK, Json(missing.to_string())).into_response());
		}
	};

	let issued = issuer.issue(&method).await?;

	let mut headers = HeaderMap::new();
	for directive in &issued.set_cookie {
		headers.append(SET_COOKIE, HeaderValue::from_str(directive)?);
	}

	Ok((StatusCode::OK, headers, Json(SUCCESS_BODY)).into_response())
}
