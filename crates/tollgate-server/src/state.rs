// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared, immutable per-process state.

use std::sync::Arc;

use aws_config::SdkConfig;
use tollgate_cookie::{ConfigurationMissing, CookieIssuer, CookieIssuerConfig};
use tollgate_items::{DynamoItemStore, ItemStore, MemoryItemStore};
use tollgate_secrets::SecretsManagerProvider;
use tollgate_server_config::ServerConfig;
use tollgate_signer::CloudFrontCookieSigner;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
	/// The issuer, or what was missing when it could not be built.
	pub cookie_issuer: Result<Arc<CookieIssuer>, ConfigurationMissing>,
	/// `None` when no table is configured.
	pub items: Option<Arc<dyn ItemStore>>,
}

impl AppState {
	pub fn new(
		cookie_issuer: Result<Arc<CookieIssuer>, ConfigurationMissing>,
		items: Option<Arc<dyn ItemStore>>,
	) -> Self {
		Self {
			cookie_issuer,
			items,
		}
	}

	/// Keep items in process when no table is configured. Used by local
	/// `serve` runs; Lambda keeps answering 500 without a table.
	pub fn with_memory_item_fallback(mut self) -> Self {
		if self.items.is_none() {
			info!("no table configured, keeping items in memory");
			self.items = Some(Arc::new(MemoryItemStore::new()));
		}
		self
	}
}

impl std::fmt::Debug for AppState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppState")
			.field("cookie_issuer", &self.cookie_issuer)
			.field("items_configured", &self.items.is_some())
			.finish()
	}
}

/// Build state backed by AWS clients created from `sdk_config`.
pub fn create_app_state(config: &ServerConfig, sdk_config: &SdkConfig) -> AppState {
	let cookie_issuer = CookieIssuerConfig::from_parts(
		config.cookie.domain.clone(),
		config.cookie.key_pair_id.clone(),
		config.cookie.secret_id.clone(),
	)
	.map(|issuer_config| {
		Arc::new(CookieIssuer::new(
			issuer_config,
			Arc::new(SecretsManagerProvider::from_sdk_config(sdk_config)),
			Arc::new(CloudFrontCookieSigner::new()),
		))
	});

	match &cookie_issuer {
		Ok(issuer) => info!(domain = %issuer.config().domain, "cookie issuer ready"),
		Err(missing) => warn!(%missing, "cookie issuer not configured"),
	}

	let items = config.items.table_name.as_ref().map(|table_name| {
		info!(%table_name, "item store ready");
		let store = DynamoItemStore::from_sdk_config(sdk_config, table_name.clone());
		Arc::new(store) as Arc<dyn ItemStore>
	});

	AppState::new(cookie_issuer, items)
}
