// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// A stored example record, keyed by `itemId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
	pub item_id: String,
	pub description: String,
}

impl Item {
	/// The record written by `PUT`: the description is derived from the id.
	pub fn placeholder(item_id: impl Into<String>) -> Self {
		let item_id = item_id.into();
		let description = format!("Item {item_id}");
		Self {
			item_id,
			description,
		}
	}
}
