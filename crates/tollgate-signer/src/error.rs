// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors produced while building or signing an access policy.
#[derive(Debug, Error)]
pub enum SigningError {
	#[error("invalid RSA private key: {0}")]
	InvalidKey(String),

	#[error("failed to sign policy: {0}")]
	Signature(String),

	#[error("failed to serialize policy: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type SigningResult<T> = Result<T, SigningError>;
