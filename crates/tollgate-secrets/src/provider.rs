// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret provider abstraction.

use std::collections::HashMap;

use async_trait::async_trait;
use tollgate_common_secret::SecretBytes;

use crate::error::{SecretsError, SecretsResult};

/// Source of binary secrets addressed by a logical identifier.
///
/// Implementations do not cache. Every call is a fresh read.
#[async_trait]
pub trait SecretProvider: Send + Sync {
	/// Fetch the raw bytes stored under `secret_id`.
	async fn fetch_secret(&self, secret_id: &str) -> SecretsResult<SecretBytes>;
}

/// In-memory provider for tests and local runs.
#[derive(Default, Clone)]
pub struct StaticSecretProvider {
	secrets: HashMap<String, SecretBytes>,
}

impl StaticSecretProvider {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_secret(mut self, secret_id: impl Into<String>, bytes: Vec<u8>) -> Self {
		self.secrets.insert(secret_id.into(), SecretBytes::new(bytes));
		self
	}
}

#[async_trait]
impl SecretProvider for StaticSecretProvider {
	async fn fetch_secret(&self, secret_id: &str) -> SecretsResult<SecretBytes> {
		if secret_id.is_empty() {
			return Err(SecretsError::unavailable(secret_id, "secret id is empty"));
		}
		self.secrets
			.get(secret_id)
			.cloned()
			.ok_or_else(|| SecretsError::unavailable(secret_id, "no secret stored under this id"))
	}
}

impl std::fmt::Debug for StaticSecretProvider {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut ids: Vec<&String> = self.secrets.keys().collect();
		ids.sort();
		f.debug_struct("StaticSecretProvider")
			.field("secret_ids", &ids)
			.finish()
	}
}
