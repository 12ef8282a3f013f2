// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Item storage trait and the in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ItemStoreResult;
use crate::item::Item;

#[async_trait]
pub trait ItemStore: Send + Sync {
	async fn get(&self, item_id: &str) -> ItemStoreResult<Option<Item>>;
	/// Insert or replace the record with the same `item_id`.
	async fn put(&self, item: &Item) -> ItemStoreResult<()>;
}

/// Keeps items in a map. Used by tests and by `serve` when no table is set.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
	items: RwLock<HashMap<String, Item>>,
}

impl MemoryItemStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn len(&self) -> usize {
		self.items.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.items.read().await.is_empty()
	}
}

#[async_trait]
impl ItemStore for MemoryItemStore {
	async fn get(&self, item_id: &str) -> ItemStoreResult<Option<Item>> {
		Ok(self.items.read().await.get(item_id).cloned())
	}

	async fn put(&self, item: &Item) -> ItemStoreResult<()> {
		self
			.items
			.write()
			.await
			.insert(item.item_id.clone(), item.clone());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[tokio::test]
	async fn get_missing_returns_none() {
		let store = MemoryItemStore::new();
		assert_eq!(store.get("nope").await.unwrap(), None);
		assert!(store.is_empty().await);
	}

	#[tokio::test]
	async fn put_then_get() {
		let store = MemoryItemStore::new();
		store.put(&Item::placeholder("1")).await.unwrap();
		assert_eq!(
			store.get("1").await.unwrap(),
			Some(Item::placeholder("1"))
		);
	}

	#[tokio::test]
	async fn put_replaces_existing_record() {
		let store = MemoryItemStore::new();
		store
			.put(&Item {
				item_id: "1".to_string(),
				description: "old".to_string(),
			})
			.await
			.unwrap();
		store.put(&Item::placeholder("1")).await.unwrap();

		assert_eq!(store.len().await, 1);
		assert_eq!(store.get("1").await.unwrap().unwrap().description, "Item 1");
	}

	proptest! {
		#[test]
		fn distinct_ids_are_kept_apart(
			ids in proptest::collection::hash_set("[a-z0-9]{1,8}", 1..16),
		) {
			tokio_test::block_on(async {
				let store = MemoryItemStore::new();
				for id in &ids {
					store.put(&Item::placeholder(id.as_str())).await.unwrap();
				}
				assert_eq!(store.len().await, ids.len());
				for id in &ids {
					let item = store.get(id).await.unwrap().unwrap();
					assert_eq!(&item.item_id, id);
				}
			});
		}
	}
}
