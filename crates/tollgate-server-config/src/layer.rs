// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The partial configuration produced by each source.

use serde::Deserialize;

use crate::sections::{
	AwsConfigLayer, CookieConfigLayer, HttpConfigLayer, ItemsConfigLayer, LoggingConfigLayer,
};

/// One source's view of the configuration. Absent sections and fields leave
/// lower-precedence values untouched when merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub cookie: Option<CookieConfigLayer>,
	#[serde(default)]
	pub items: Option<ItemsConfigLayer>,
	#[serde(default)]
	pub aws: Option<AwsConfigLayer>,
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_option(&mut self.cookie, other.cookie, CookieConfigLayer::merge);
		merge_option(&mut self.items, other.items, ItemsConfigLayer::merge);
		merge_option(&mut self.aws, other.aws, AwsConfigLayer::merge);
		merge_option(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T>(target: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (target.as_mut(), other) {
		(Some(existing), Some(incoming)) => merge(existing, incoming),
		(None, Some(incoming)) => *target = Some(incoming),
		(_, None) => {}
	}
}
