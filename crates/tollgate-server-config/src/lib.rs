// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the Tollgate server.
//!
//! Layered configuration from built-in defaults, an optional TOML file and
//! the environment, merged in that order.
//!
//! # Usage
//!
//! ```ignore
//! use tollgate_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("region {}", config.aws.region);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, CONFIG_PATH_VAR,
	SYSTEM_CONFIG_PATH,
};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
	pub cookie: CookieConfig,
	pub items: ItemsConfig,
	pub aws: AwsConfig,
	pub http: HttpConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables
/// 2. Config file (`$TOLLGATE_CONFIG`, else `/etc/tollgate/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::from_env_or_system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge `sources` in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	Ok(finalize(merged))
}

fn finalize(layer: ServerConfigLayer) -> ServerConfig {
	let cookie = layer.cookie.unwrap_or_default().finalize();
	let items = layer.items.unwrap_or_default().finalize();
	let aws = layer.aws.unwrap_or_default().finalize();
	let http = layer.http.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		region = %aws.region,
		addr = %http.addr,
		cookie_domain = cookie.domain.as_deref().unwrap_or("<unset>"),
		key_pair_id_configured = cookie.key_pair_id.is_some(),
		secret_id_configured = cookie.secret_id.is_some(),
		table_configured = items.table_name.is_some(),
		log_format = %logging.format,
		"Server configuration loaded"
	);

	ServerConfig {
		cookie,
		items,
		aws,
		http,
		logging,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	struct FixedSource(Precedence, fn() -> ServerConfigLayer);

	impl ConfigSource for FixedSource {
		fn name(&self) -> &'static str {
			"fixed"
		}

		fn precedence(&self) -> Precedence {
			self.0
		}

		fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
			Ok((self.1)())
		}
	}

	fn file_layer() -> ServerConfigLayer {
		ServerConfigLayer {
			aws: Some(AwsConfigLayer {
				region: Some("from-file".to_string()),
			}),
			items: Some(ItemsConfigLayer {
				table_name: Some("file-table".to_string()),
			}),
			..Default::default()
		}
	}

	fn env_layer() -> ServerConfigLayer {
		ServerConfigLayer {
			aws: Some(AwsConfigLayer {
				region: Some("from-env".to_string()),
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_defaults_only() {
		let config = load_from_sources(vec![Box::new(DefaultsSource)]).unwrap();
		assert_eq!(config, ServerConfig::default());
		assert_eq!(config.aws.region, DEFAULT_REGION);
		assert_eq!(config.cookie.domain, None);
	}

	#[test]
	fn test_environment_overrides_file_regardless_of_order() {
		let config = load_from_sources(vec![
			Box::new(FixedSource(Precedence::Environment, env_layer)),
			Box::new(FixedSource(Precedence::ConfigFile, file_layer)),
		])
		.unwrap();
		assert_eq!(config.aws.region, "from-env");
		assert_eq!(config.items.table_name.as_deref(), Some("file-table"));
	}

	struct LookupSource(Vec<(&'static str, &'static str)>);

	impl ConfigSource for LookupSource {
		fn name(&self) -> &'static str {
			"lookup"
		}

		fn precedence(&self) -> Precedence {
			Precedence::Environment
		}

		fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
			sources::load_from_lookup(|name| {
				self.0
					.iter()
					.find(|(key, _)| *key == name)
					.map(|(_, value)| value.to_string())
			})
		}
	}

	#[test]
	fn test_missing_file_falls_back_to_defaults_for_unset() {
		let config = load_from_sources(vec![
			Box::new(DefaultsSource),
			Box::new(TomlSource::new("/nonexistent/tollgate.toml")),
			Box::new(LookupSource(vec![("TABLE_NAME", "items")])),
		])
		.unwrap();
		assert_eq!(config.aws.region, DEFAULT_REGION);
		assert_eq!(config.http.addr.to_string(), DEFAULT_ADDR);
		assert_eq!(config.items.table_name.as_deref(), Some("items"));
		assert_eq!(config.cookie.domain, None);
	}

	proptest! {
		#[test]
		fn later_precedence_always_wins(a in "[a-z]{1,8}-[0-9]", b in "[a-z]{1,8}-[0-9]") {
			let mut merged = ServerConfigLayer::default();
			merged.merge(ServerConfigLayer {
				aws: Some(AwsConfigLayer { region: Some(a) }),
				..Default::default()
			});
			merged.merge(ServerConfigLayer {
				aws: Some(AwsConfigLayer { region: Some(b.clone()) }),
				..Default::default()
			});
			prop_assert_eq!(finalize(merged).aws.region, b);
		}
	}
}
