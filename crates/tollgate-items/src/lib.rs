// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example item records.
//!
//! [`ItemStore`] abstracts a key-value table of [`Item`]s.
//! [`DynamoItemStore`] talks to DynamoDB; [`MemoryItemStore`] keeps
//! everything in process.

mod dynamo;
mod error;
mod item;
mod store;

pub use dynamo::{DynamoItemStore, DESCRIPTION_ATTRIBUTE, ITEM_ID_ATTRIBUTE};
pub use error::{ItemStoreError, ItemStoreResult};
pub use item::Item;
pub use store::{ItemStore, MemoryItemStore};
