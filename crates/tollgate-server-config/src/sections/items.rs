// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsConfig {
	/// DynamoDB table holding items. Item routes answer 500 when unset.
	pub table_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsConfigLayer {
	#[serde(default)]
	pub table_name: Option<String>,
}

impl ItemsConfigLayer {
	pub fn merge(&mut self, other: ItemsConfigLayer) {
		if other.table_name.is_some() {
			self.table_name = other.table_name;
		}
	}

	pub fn finalize(self) -> ItemsConfig {
		ItemsConfig {
			table_name: self.table_name.filter(|v| !v.is_empty()),
		}
	}
}
