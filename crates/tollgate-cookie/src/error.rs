// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use http::Method;
use thiserror::Error;
use tollgate_secrets::SecretsError;
use tollgate_signer::SigningError;

/// Fatal issuance failures. All of them surface as HTTP 500.
#[derive(Debug, Error)]
pub enum IssueError {
	#[error("Unknown HTTP method: {0}")]
	UnsupportedMethod(Method),

	#[error(transparent)]
	Secret(#[from] SecretsError),

	#[error(transparent)]
	Signing(#[from] SigningError),
}

pub type IssueResult<T> = Result<T, IssueError>;
