// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! CloudFront custom access policy.
//!
//! Serializes to:
//!
//! ```json
//! {"Statement":[{"Resource":"https://cdn.example.net/*",
//!   "Condition":{"DateLessThan":{"AWS:EpochTime":1700028800}}}]}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SigningResult;

/// How long issued cookies stay valid (8 hours).
pub const COOKIE_LIFETIME_SECS: i64 = 8 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
	#[serde(rename = "Statement")]
	pub statement: Vec<PolicyStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatement {
	#[serde(rename = "Resource")]
	pub resource: String,
	#[serde(rename = "Condition")]
	pub condition: PolicyCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCondition {
	#[serde(rename = "DateLessThan")]
	pub date_less_than: EpochTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochTime {
	#[serde(rename = "AWS:EpochTime")]
	pub epoch_time: i64,
}

impl AccessPolicy {
	/// Grant read access to everything under `https://{domain}/` until
	/// `issued_at` plus [`COOKIE_LIFETIME_SECS`].
	pub fn for_domain(domain: &str, issued_at: DateTime<Utc>) -> Self {
		Self {
			statement: vec![PolicyStatement {
				resource: format!("https://{domain}/*"),
				condition: PolicyCondition {
					date_less_than: EpochTime {
						epoch_time: issued_at.timestamp() + COOKIE_LIFETIME_SECS,
					},
				},
			}],
		}
	}

	/// Resource pattern of the first statement.
	pub fn resource(&self) -> Option<&str> {
		self.statement.first().map(|s| s.resource.as_str())
	}

	/// Expiry of the first statement, in seconds since the epoch.
	pub fn expires_at(&self) -> Option<i64> {
		self.statement
			.first()
			.map(|s| s.condition.date_less_than.epoch_time)
	}

	/// Compact JSON form handed to the signer.
	pub fn to_json(&self) -> SigningResult<String> {
		Ok(serde_json::to_string(self)?)
	}
}
