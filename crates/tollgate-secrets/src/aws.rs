// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! AWS Secrets Manager provider.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::config::retry::RetryConfig;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tollgate_common_secret::SecretBytes;
use tracing::{debug, instrument, warn};

use crate::error::{SecretsError, SecretsResult};
use crate::provider::SecretProvider;

/// Reads `SecretBinary` values from AWS Secrets Manager.
///
/// The region and credentials come from the supplied SDK configuration.
/// Retries are disabled: a failed fetch fails the invocation.
#[derive(Clone)]
pub struct SecretsManagerProvider {
	client: Client,
}

impl SecretsManagerProvider {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	/// Build a client from shared SDK configuration with retries turned off.
	pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
		let config = aws_sdk_secretsmanager::config::Builder::from(sdk_config)
			.retry_config(RetryConfig::disabled())
			.build();
		Self::new(Client::from_conf(config))
	}
}

#[async_trait]
impl SecretProvider for SecretsManagerProvider {
	#[instrument(skip(self))]
	async fn fetch_secret(&self, secret_id: &str) -> SecretsResult<SecretBytes> {
		if secret_id.is_empty() {
			return Err(SecretsError::unavailable(secret_id, "secret id is empty"));
		}

		let output = self
			.client
			.get_secret_value()
			.secret_id(secret_id)
			.send()
			.await
			.map_err(|e| {
				let service_error = e.into_service_error();
				let reason = if service_error.is_resource_not_found_exception() {
					"secret id does not resolve".to_string()
				} else {
					DisplayErrorContext(&service_error).to_string()
				};
				warn!(%secret_id, %reason, "secret fetch failed");
				SecretsError::unavailable(secret_id, reason)
			})?;

		let bytes = output
			.secret_binary
			.map(|blob| blob.into_inner())
			.ok_or_else(|| SecretsError::unavailable(secret_id, "secret has no binary value"))?;

		debug!(%secret_id, len = bytes.len(), "fetched secret binary");
		Ok(SecretBytes::new(bytes))
	}
}

impl std::fmt::Debug for SecretsManagerProvider {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SecretsManagerProvider")
			.field("region", &self.client.config().region())
			.finish()
	}
}
