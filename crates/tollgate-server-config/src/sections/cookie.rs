// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Signed-cookie issuer configuration.

use serde::Deserialize;

/// Issuer settings as loaded. Values stay optional here: the issuer decides
/// what to do when one is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieConfig {
	pub domain: Option<String>,
	pub key_pair_id: Option<String>,
	pub secret_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CookieConfigLayer {
	#[serde(default)]
	pub domain: Option<String>,
	#[serde(default)]
	pub key_pair_id: Option<String>,
	#[serde(default)]
	pub secret_id: Option<String>,
}

impl CookieConfigLayer {
	pub fn merge(&mut self, other: CookieConfigLayer) {
		if other.domain.is_some() {
			self.domain = other.domain;
		}
		if other.key_pair_id.is_some() {
			self.key_pair_id = other.key_pair_id;
		}
		if other.secret_id.is_some() {
			self.secret_id = other.secret_id;
		}
	}

	pub fn finalize(self) -> CookieConfig {
		CookieConfig {
			domain: self.domain.filter(|v| !v.is_empty()),
			key_pair_id: self.key_pair_id.filter(|v| !v.is_empty()),
			secret_id: self.secret_id.filter(|v| !v.is_empty()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_strings_finalize_to_none() {
		let config = CookieConfigLayer {
			domain: Some(String::new()),
			key_pair_id: Some("K1".to_string()),
			secret_id: None,
		}
		.finalize();
		assert_eq!(config.domain, None);
		assert_eq!(config.key_pair_id.as_deref(), Some("K1"));
		assert_eq!(config.secret_id, None);
	}
}
