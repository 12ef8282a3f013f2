// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Private key retrieval for the cookie issuer.
//!
//! A [`SecretProvider`] returns raw secret bytes by identifier. The AWS
//! implementation reads `SecretBinary` from Secrets Manager; the static one
//! serves fixed bytes from memory. [`fetch_private_key`] chains a provider
//! with [`normalize_private_key`] to produce PEM text ready for signing.
//!
//! ```ignore
//! use tollgate_secrets::{fetch_private_key, SecretsManagerProvider};
//!
//! let sdk_config = aws_config::load_from_env().await;
//! let provider = SecretsManagerProvider::from_sdk_config(&sdk_config);
//! let pem = fetch_private_key(&provider, "/app/prod/privateKey").await?;
//! tracing::info!(key = %pem, "loaded"); // logs [REDACTED]
//! ```

mod aws;
mod error;
mod pem;
mod provider;

pub use aws::SecretsManagerProvider;
pub use error::{SecretsError, SecretsResult};
pub use pem::{normalize_private_key, wrap_pem_body, PEM_FOOTER, PEM_HEADER, PEM_LINE_WIDTH};
pub use provider::{SecretProvider, StaticSecretProvider};
pub use tollgate_common_secret::{SecretBytes, SecretString};

/// Fetch the secret stored under `secret_id` and re-wrap it as a PKCS#8 PEM.
pub async fn fetch_private_key(
	provider: &dyn SecretProvider,
	secret_id: &str,
) -> SecretsResult<SecretString> {
	let stored = provider.fetch_secret(secret_id).await?;
	normalize_private_key(&stored)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn fetch_private_key_wraps_stored_bytes() {
		let provider = StaticSecretProvider::new().with_secret("/app/key", vec![0u8; 48]);
		let pem = fetch_private_key(&provider, "/app/key").await.unwrap();
		assert!(pem.expose().starts_with(PEM_HEADER));
		assert!(pem.expose().ends_with(PEM_FOOTER));
	}

	#[tokio::test]
	async fn fetch_private_key_surfaces_missing_secret() {
		let provider = StaticSecretProvider::new();
		let err = fetch_private_key(&provider, "/app/key").await.unwrap_err();
		assert!(matches!(err, SecretsError::SecretUnavailable { .. }));
	}

	#[tokio::test]
	async fn fetch_private_key_rejects_empty_secret() {
		let provider = StaticSecretProvider::new().with_secret("/app/key", Vec::new());
		let err = fetch_private_key(&provider, "/app/key").await.unwrap_err();
		assert!(matches!(err, SecretsError::MalformedKey));
	}
}
