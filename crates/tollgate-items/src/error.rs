// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemStoreError {
	#[error("item store request failed: {0}")]
	Backend(String),

	#[error("stored item {item_id} is malformed: {reason}")]
	Decode { item_id: String, reason: String },
}

pub type ItemStoreResult<T> = Result<T, ItemStoreError>;
