// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example item handlers.

use axum::{
	extract::{Path, State},
	http::Method,
	response::{IntoResponse, Response},
	Json,
};
use tollgate_items::Item;
use tracing::{debug, instrument};

use crate::{error::ServerError, state::AppState};

pub const MISSING_ITEM_ID: &str = "Request path has no item id";
pub const TABLE_NOT_CONFIGURED: &str = "Table name is not configured";

/// ANY /api/v1/example/{item_id}
#[instrument(skip(state))]
pub async fn item(
	State(state): State<AppState>,
	method: Method,
	Path(item_id): Path<String>,
) -> Result<Response, ServerError> {
	handle_item(&state, &method, Some(item_id)).await
}

/// ANY /api/v1/example - always rejected, there is no id to act on.
pub async fn item_without_id(
	State(state): State<AppState>,
	method: Method,
) -> Result<Response, ServerError> {
	handle_item(&state, &method, None).await
}

async fn handle_item(
	state: &AppState,
	method: &Method,
	item_id: Option<String>,
) -> Result<Response, ServerError> {
	let item_id = item_id
		.filter(|id| !id.is_empty())
		.ok_or_else(|| ServerError::BadRequest(MISSING_ITEM_ID.to_string()))?;

	let store = state
		.items
		.as_ref()
		.ok_or_else(|| ServerError::NotConfigured(TABLE_NOT_CONFIGURED.to_string()))?;

	match *method {
		Method::GET => {
			let item = store.get(&item_id).await?;
			debug!(%item_id, found = item.is_some(), "item lookup");
			Ok(Json(item).into_response())
		}
		Method::PUT => {
			let item = Item::placeholder(item_id);
			store.put(&item).await?;
			debug!(item_id = %item.item_id, "item stored");
			Ok(Json(item).into_response())
		}
		_ => Err(ServerError::UnsupportedMethod(method.clone())),
	}
}
