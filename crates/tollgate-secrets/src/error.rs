// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for secret retrieval.

use thiserror::Error;

/// Errors raised while fetching or normalizing a private key.
#[derive(Debug, Error)]
pub enum SecretsError {
	/// The store returned no value, or the identifier did not resolve.
	#[error("secret {secret_id} is unavailable: {reason}")]
	SecretUnavailable { secret_id: String, reason: String },

	/// Nothing was left to wrap after stripping the PEM markers.
	#[error("private key is not registered in the secret")]
	MalformedKey,
}

impl SecretsError {
	pub(crate) fn unavailable(secret_id: &str, reason: impl Into<String>) -> Self {
		SecretsError::SecretUnavailable {
			secret_id: secret_id.to_string(),
			reason: reason.into(),
		}
	}
}

/// Result type for secret operations.
pub type SecretsResult<T> = Result<T, SecretsError>;
