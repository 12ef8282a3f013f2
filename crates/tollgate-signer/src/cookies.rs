// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Signed cookie values and the signer capability.

use tollgate_common_secret::SecretString;

use crate::error::SigningResult;

/// One cookie produced by a signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedCookie {
	pub name: String,
	pub value: String,
}

impl SignedCookie {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Cookies returned by a signer, in the order the signer produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedCookies(Vec<SignedCookie>);

impl SignedCookies {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, cookie: SignedCookie) {
		self.0.push(cookie);
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|c| c.name == name)
			.map(|c| c.value.as_str())
	}

	pub fn iter(&self) -> std::slice::Iter<'_, SignedCookie> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<SignedCookie> for SignedCookies {
	fn from_iter<I: IntoIterator<Item = SignedCookie>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for SignedCookies {
	type Item = SignedCookie;
	type IntoIter = std::vec::IntoIter<SignedCookie>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a SignedCookies {
	type Item = &'a SignedCookie;
	type IntoIter = std::slice::Iter<'a, SignedCookie>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Turns a serialized policy into signed cookies.
///
/// The issuer treats the result opaquely and forwards every entry.
pub trait CookieSigner: Send + Sync {
	fn sign(
		&self,
		key_pair_id: &str,
		private_key_pem: &SecretString,
		policy_json: &str,
	) -> SigningResult<SignedCookies>;
}
