// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! DynamoDB-backed item store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::{debug, instrument, warn};

use crate::error::{ItemStoreError, ItemStoreResult};
use crate::item::Item;
use crate::store::ItemStore;

/// Partition key attribute of the items table.
pub const ITEM_ID_ATTRIBUTE: &str = "itemId";
pub const DESCRIPTION_ATTRIBUTE: &str = "description";

#[derive(Clone)]
pub struct DynamoItemStore {
	client: Client,
	table_name: String,
}

impl DynamoItemStore {
	pub fn new(client: Client, table_name: impl Into<String>) -> Self {
		Self {
			client,
			table_name: table_name.into(),
		}
	}

	pub fn from_sdk_config(sdk_config: &SdkConfig, table_name: impl Into<String>) -> Self {
		Self::new(Client::new(sdk_config), table_name)
	}

	pub fn table_name(&self) -> &str {
		&self.table_name
	}
}

#[async_trait]
impl ItemStore for DynamoItemStore {
	#[instrument(skip(self), fields(table = %self.table_name))]
	async fn get(&self, item_id: &str) -> ItemStoreResult<Option<Item>> {
		let output = self
			.client
			.get_item()
			.table_name(&self.table_name)
			.key(ITEM_ID_ATTRIBUTE, AttributeValue::S(item_id.to_string()))
			.send()
			.await
			.map_err(|e| {
				let reason = DisplayErrorContext(&e).to_string();
				warn!(%item_id, %reason, "get_item failed");
				ItemStoreError::Backend(reason)
			})?;

		match output.item {
			Some(attributes) => {
				debug!(%item_id, "item found");
				decode_item(item_id, &attributes).map(Some)
			}
			None => Ok(None),
		}
	}

	#[instrument(skip(self, item), fields(table = %self.table_name, item_id = %item.item_id))]
	async fn put(&self, item: &Item) -> ItemStoreResult<()> {
		self
			.client
			.put_item()
			.table_name(&self.table_name)
			.set_item(Some(encode_item(item)))
			.send()
			.await
			.map_err(|e| {
				let reason = DisplayErrorContext(&e).to_string();
				warn!(%reason, "put_item failed");
				ItemStoreError::Backend(reason)
			})?;
		Ok(())
	}
}

impl std::fmt::Debug for DynamoItemStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DynamoItemStore")
			.field("table_name", &self.table_name)
			.field("region", &self.client.config().region())
			.finish()
	}
}

fn encode_item(item: &Item) -> HashMap<String, AttributeValue> {
	HashMap::from([
		(
			ITEM_ID_ATTRIBUTE.to_string(),
			AttributeValue::S(item.item_id.clone()),
		),
		(
			DESCRIPTION_ATTRIBUTE.to_string(),
			AttributeValue::S(item.description.clone()),
		),
	])
}

fn decode_item(
	item_id: &str,
	attributes: &HashMap<String, AttributeValue>,
) -> ItemStoreResult<Item> {
	let string_attr = |name: &str| -> ItemStoreResult<String> {
		attributes
			.get(name)
			.ok_or_else(|| ItemStoreError::Decode {
				item_id: item_id.to_string(),
				reason: format!("missing attribute {name}"),
			})?
			.as_s()
			.cloned()
			.map_err(|_| ItemStoreError::Decode {
				item_id: item_id.to_string(),
				reason: format!("attribute {name} is not a string"),
			})
	};

	Ok(Item {
		item_id: string_attr(ITEM_ID_ATTRIBUTE)?,
		description: string_attr(DESCRIPTION_ATTRIBUTE)?,
	})
}
