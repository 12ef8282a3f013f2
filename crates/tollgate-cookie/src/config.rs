// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Issuer configuration and its validation.

use thiserror::Error;

/// Environment variable naming the CDN domain cookies are scoped to.
pub const DOMAIN_VAR: &str = "JSON_DISTRIBUTION_DOMAIN";
/// Environment variable naming the CloudFront public key id.
pub const KEY_PAIR_ID_VAR: &str = "KEY_PAIR_ID";
/// Environment variable naming the secret that holds the private key.
pub const SECRET_ID_VAR: &str = "SECRET_ID";

/// Everything the issuer needs before it can sign anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieIssuerConfig {
	pub domain: String,
	pub key_pair_id: String,
	pub secret_id: String,
}

/// One or more required values were absent when the issuer was built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required configuration is not set: {}", .missing.join(", "))]
pub struct ConfigurationMissing {
	pub missing: Vec<&'static str>,
}

impl CookieIssuerConfig {
	/// Validate all three values at once. Empty strings count as absent.
	pub fn from_parts(
		domain: Option<String>,
		key_pair_id: Option<String>,
		secret_id: Option<String>,
	) -> Result<Self, ConfigurationMissing> {
		let domain = domain.filter(|v| !v.is_empty());
		let key_pair_id = key_pair_id.filter(|v| !v.is_empty());
		let secret_id = secret_id.filter(|v| !v.is_empty());

		match (domain, key_pair_id, secret_id) {
			(Some(domain), Some(key_pair_id), Some(secret_id)) => Ok(Self {
				domain,
				key_pair_id,
				secret_id,
			}),
			(domain, key_pair_id, secret_id) => {
				let missing = [
					(domain.is_none(), DOMAIN_VAR),
					(key_pair_id.is_none(), KEY_PAIR_ID_VAR),
					(secret_id.is_none(), SECRET_ID_VAR),
				]
				.into_iter()
				.filter_map(|(absent, name)| absent.then_some(name))
				.collect();
				Err(ConfigurationMissing { missing })
			}
		}
	}
}
