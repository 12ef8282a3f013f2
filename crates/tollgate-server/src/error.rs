// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The HTTP error boundary.
//!
//! Every body is a bare JSON string. Unexpected failures are answered with
//! `"Internal Server Error: {error}"`.

use axum::{
	http::{header::InvalidHeaderValue, Method, StatusCode},
	response::{IntoResponse, Response},
	Json,
};
use thiserror::Error;
use tollgate_cookie::IssueError;
use tollgate_items::ItemStoreError;

#[derive(Debug, Error)]
pub enum ServerError {
	/// The request itself is unusable. Answered with 400 and the message.
	#[error("{0}")]
	BadRequest(String),

	/// A route's backing resource is not configured. Answered with 500 and
	/// the message, without the generic prefix.
	#[error("{0}")]
	NotConfigured(String),

	#[error("Unknown HTTP method: {0}")]
	UnsupportedMethod(Method),

	#[error(transparent)]
	Issue(#[from] IssueError),

	#[error(transparent)]
	Items(#[from] ItemStoreError),

	#[error("invalid header value: {0}")]
	InvalidHeader(#[from] InvalidHeaderValue),
}

impl ServerError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// The JSON string sent as the response body.
	pub fn body(&self) -> String {
		match self {
			ServerError::BadRequest(message) | ServerError::NotConfigured(message) => {
				message.clone()
			}
			other => format!("Internal Server Error: {other}"),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		} else {
			tracing::warn!(error = %self, "request rejected");
		}
		(status, Json(self.body())).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tollgate_secrets::SecretsError;

	#[test]
	fn bad_request_is_400_with_bare_message() {
		let err = ServerError::BadRequest("Request path has no item id".to_string());
		assert_eq!(err.status(), StatusCode::BAD_REQUEST);
		assert_eq!(err.body(), "Request path has no item id");
	}

	#[test]
	fn not_configured_is_500_without_prefix() {
		let err = ServerError::NotConfigured("Table name is not configured".to_string());
		assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(err.body(), "Table name is not configured");
	}

	#[test]
	fn unsupported_method_reads_like_the_issuer_error() {
		let from_route = ServerError::UnsupportedMethod(Method::DELETE);
		let from_issuer = ServerError::from(IssueError::UnsupportedMethod(Method::DELETE));
		assert_eq!(from_route.body(), from_issuer.body());
		assert_eq!(
			from_route.body(),
			"Internal Server Error: Unknown HTTP method: DELETE"
		);
	}

	#[test]
	fn secret_failures_are_prefixed() {
		let err = ServerError::from(IssueError::Secret(SecretsError::MalformedKey));
		assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(
			err.body(),
			"Internal Server Error: private key is not registered in the secret"
		);
	}
}
