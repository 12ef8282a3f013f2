// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! AWS client configuration.

use serde::Deserialize;

pub const DEFAULT_REGION: &str = "ap-northeast-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
	pub region: String,
}

impl Default for AwsConfig {
	fn default() -> Self {
		Self {
			region: DEFAULT_REGION.to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsConfigLayer {
	#[serde(default)]
	pub region: Option<String>,
}

impl AwsConfigLayer {
	pub fn merge(&mut self, other: AwsConfigLayer) {
		if other.region.is_some() {
			self.region = other.region;
		}
	}

	pub fn finalize(self) -> AwsConfig {
		AwsConfig {
			region: self
				.region
				.filter(|v| !v.is_empty())
				.unwrap_or_else(|| DEFAULT_REGION.to_string()),
		}
	}
}
