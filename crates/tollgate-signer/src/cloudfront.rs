// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! CloudFront custom-policy signed cookies.
//!
//! The policy JSON is signed with RSA PKCS#1 v1.5 over SHA-1. The policy and
//! the signature are both encoded with CloudFront's URL-safe base64 variant,
//! which swaps `+`, `=` and `/` for `-`, `_` and `~`.

use base64::{engine::general_purpose::STANDARD, Engine};
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha1::{Digest, Sha1};
use tollgate_common_secret::SecretString;
use tracing::{debug, instrument};

use crate::cookies::{CookieSigner, SignedCookie, SignedCookies};
use crate::error::{SigningError, SigningResult};

pub const POLICY_COOKIE: &str = "CloudFront-Policy";
pub const SIGNATURE_COOKIE: &str = "CloudFront-Signature";
pub const KEY_PAIR_ID_COOKIE: &str = "CloudFront-Key-Pair-Id";

/// Signs policies with a PKCS#8 RSA key the way CloudFront verifies them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudFrontCookieSigner;

impl CloudFrontCookieSigner {
	pub fn new() -> Self {
		Self
	}
}

impl CookieSigner for CloudFrontCookieSigner {
	#[instrument(skip(self, private_key_pem, policy_json))]
	fn sign(
		&self,
		key_pair_id: &str,
		private_key_pem: &SecretString,
		policy_json: &str,
	) -> SigningResult<SignedCookies> {
		let key = RsaPrivateKey::from_pkcs8_pem(private_key_pem.expose())
			.map_err(|e| SigningError::InvalidKey(e.to_string()))?;

		let digest = Sha1::digest(policy_json.as_bytes());
		let signature = key
			.sign(Pkcs1v15Sign::new::<Sha1>(), &digest)
			.map_err(|e| SigningError::Signature(e.to_string()))?;

		debug!(key_pair_id, "signed access policy");

		Ok(SignedCookies::from_iter([
			SignedCookie::new(POLICY_COOKIE, cloudfront_base64(policy_json.as_bytes())),
			SignedCookie::new(SIGNATURE_COOKIE, cloudfront_base64(&signature)),
			SignedCookie::new(KEY_PAIR_ID_COOKIE, key_pair_id),
		]))
	}
}

/// Standard base64 with the characters CloudFront rejects in cookies replaced.
pub fn cloudfront_base64(bytes: &[u8]) -> String {
	STANDARD
		.encode(bytes)
		.chars()
		.map(|c| match c {
			'+' => '-',
			'=' => '_',
			'/' => '~',
			other => other,
		})
		.collect()
}
