// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file, the environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	AwsConfigLayer, CookieConfigLayer, HttpConfigLayer, ItemsConfigLayer, LogFormat,
	LoggingConfigLayer,
};

/// Environment variable pointing at the config file.
pub const CONFIG_PATH_VAR: &str = "TOLLGATE_CONFIG";
pub const SYSTEM_CONFIG_PATH: &str = "/etc/tollgate/server.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file source. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}

	/// `$TOLLGATE_CONFIG` if set, else the system path.
	pub fn from_env_or_system() -> Self {
		match env_var(CONFIG_PATH_VAR) {
			Some(path) => Self::new(path),
			None => Self::system(),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// The cookie and items variables keep the names the deployed function has
/// always used; everything else is `TOLLGATE_*`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_from_lookup(env_var)
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Build a layer from any name-to-value lookup. Empty values count as unset.
pub(crate) fn load_from_lookup<F>(lookup: F) -> Result<ServerConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	let addr = var("TOLLGATE_HTTP_ADDR")
		.map(|v| {
			v.parse::<SocketAddr>()
				.map_err(|e| ConfigError::InvalidValue {
					key: "TOLLGATE_HTTP_ADDR".to_string(),
					message: format!("invalid socket address '{v}': {e}"),
				})
		})
		.transpose()?;

	let format = var("TOLLGATE_LOG_FORMAT")
		.map(|v| {
			v.parse::<LogFormat>()
				.map_err(|message| ConfigError::InvalidValue {
					key: "TOLLGATE_LOG_FORMAT".to_string(),
					message,
				})
		})
		.transpose()?;

	Ok(ServerConfigLayer {
		cookie: Some(CookieConfigLayer {
			domain: var("JSON_DISTRIBUTION_DOMAIN"),
			key_pair_id: var("KEY_PAIR_ID"),
			secret_id: var("SECRET_ID"),
		}),
		items: Some(ItemsConfigLayer {
			table_name: var("TABLE_NAME"),
		}),
		aws: Some(AwsConfigLayer {
			region: var("AWS_REGION"),
		}),
		http: Some(HttpConfigLayer { addr }),
		logging: Some(LoggingConfigLayer {
			level: var("TOLLGATE_LOG_LEVEL"),
			format,
		}),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name: &str| map.get(name).cloned()
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.cookie.is_none());
		assert!(layer.http.is_none());
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let layer = TomlSource::new("/nonexistent/tollgate.toml").load().unwrap();
		assert!(layer.cookie.is_none());
	}

	#[test]
	fn test_toml_source_parses_sections() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("server.toml");
		std::fs::write(
			&path,
			r#"
[cookie]
domain = "d1.example.net"
key_pair_id = "KPID123"

[http]
addr = "127.0.0.1:9000"

[logging]
format = "pretty"
"#,
		)
		.unwrap();

		let layer = TomlSource::new(&path).load().unwrap();
		let cookie = layer.cookie.unwrap();
		assert_eq!(cookie.domain.as_deref(), Some("d1.example.net"));
		assert_eq!(cookie.secret_id, None);
		assert_eq!(
			layer.http.unwrap().addr,
			Some("127.0.0.1:9000".parse().unwrap())
		);
		assert_eq!(layer.logging.unwrap().format, Some(LogFormat::Pretty));
	}

	#[test]
	fn test_toml_source_reports_parse_errors() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.toml");
		std::fs::write(&path, "[cookie\ndomain = ").unwrap();

		let err = TomlSource::new(&path).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn test_env_reads_deployed_variable_names() {
		let layer = load_from_lookup(lookup(&[
			("JSON_DISTRIBUTION_DOMAIN", "d1.example.net"),
			("KEY_PAIR_ID", "KPID123"),
			("SECRET_ID", "/app/prod/privateKey"),
			("TABLE_NAME", "items"),
			("AWS_REGION", "us-west-2"),
		]))
		.unwrap();

		let cookie = layer.cookie.unwrap();
		assert_eq!(cookie.domain.as_deref(), Some("d1.example.net"));
		assert_eq!(cookie.key_pair_id.as_deref(), Some("KPID123"));
		assert_eq!(cookie.secret_id.as_deref(), Some("/app/prod/privateKey"));
		assert_eq!(layer.items.unwrap().table_name.as_deref(), Some("items"));
		assert_eq!(layer.aws.unwrap().region.as_deref(), Some("us-west-2"));
	}

	#[test]
	fn test_env_empty_values_are_unset() {
		let env = lookup(&[("JSON_DISTRIBUTION_DOMAIN", ""), ("TABLE_NAME", "")]);
		let layer = load_from_lookup(env).unwrap();
		assert_eq!(layer.cookie.unwrap().domain, None);
		assert_eq!(layer.items.unwrap().table_name, None);
	}

	#[test]
	fn test_env_invalid_addr() {
		let err = load_from_lookup(lookup(&[("TOLLGATE_HTTP_ADDR", "not-an-addr")])).unwrap_err();
		assert!(err.to_string().contains("TOLLGATE_HTTP_ADDR"));
	}

	#[test]
	fn test_env_invalid_log_format() {
		let err = load_from_lookup(lookup(&[("TOLLGATE_LOG_FORMAT", "xml")])).unwrap_err();
		assert!(matches!(
			err,
			ConfigError::InvalidValue { ref key, .. } if key == "TOLLGATE_LOG_FORMAT"
		));
	}
}
