// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Listener configuration for `tollgate-server serve`.

use std::net::SocketAddr;

use serde::Deserialize;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
	pub addr: SocketAddr,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfigLayer {
	#[serde(default)]
	pub addr: Option<SocketAddr>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: HttpConfigLayer) {
		if other.addr.is_some() {
			self.addr = other.addr;
		}
	}

	pub fn finalize(self) -> HttpConfig {
		match self.addr {
			Some(addr) => HttpConfig { addr },
			None => HttpConfig::default(),
		}
	}
}
