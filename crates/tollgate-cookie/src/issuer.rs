// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The cookie issuer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use http::Method;
use tollgate_secrets::{fetch_private_key, SecretProvider};
use tollgate_signer::{AccessPolicy, CookieSigner, SignedCookie};
use tracing::{info, instrument};

use crate::config::CookieIssuerConfig;
use crate::error::{IssueError, IssueResult};

/// Result of a successful issuance.
#[derive(Debug, Clone)]
pub struct IssuedCookies {
	/// The policy that was signed.
	pub policy: AccessPolicy,
	/// One `Set-Cookie` value per signed cookie, in signer order.
	pub set_cookie: Vec<String>,
}

/// Issues signed cookies granting time-limited access to the CDN domain.
///
/// Holds no per-request state. The private key is fetched on every call and
/// dropped (and zeroized) before the call returns.
pub struct CookieIssuer {
	config: CookieIssuerConfig,
	secrets: Arc<dyn SecretProvider>,
	signer: Arc<dyn CookieSigner>,
}

impl CookieIssuer {
	pub fn new(
		config: CookieIssuerConfig,
		secrets: Arc<dyn SecretProvider>,
		signer: Arc<dyn CookieSigner>,
	) -> Self {
		Self {
			config,
			secrets,
			signer,
		}
	}

	pub fn config(&self) -> &CookieIssuerConfig {
		&self.config
	}

	/// Issue cookies for a request made with `method`, using the server clock.
	pub async fn issue(&self, method: &Method) -> IssueResult<IssuedCookies> {
		self.issue_at(method, Utc::now()).await
	}

	/// Issue cookies as of `now`.
	#[instrument(skip(self, now), fields(domain = %self.config.domain))]
	pub async fn issue_at(
		&self,
		method: &Method,
		now: DateTime<Utc>,
	) -> IssueResult<IssuedCookies> {
		if method != Method::GET {
			return Err(IssueError::UnsupportedMethod(method.clone()));
		}

		let private_key = fetch_private_key(self.secrets.as_ref(), &self.config.secret_id).await?;

		let policy = AccessPolicy::for_domain(&self.config.domain, now);
		let policy_json = policy.to_json()?;

		let cookies = self
			.signer
			.sign(&self.config.key_pair_id, &private_key, &policy_json)?;

		let set_cookie: Vec<String> = cookies
			.iter()
			.map(|cookie| set_cookie_directive(cookie, &self.config.domain))
			.collect();

		info!(
			expires_at = policy.expires_at(),
			cookies = set_cookie.len(),
			"issued signed cookies"
		);

		Ok(IssuedCookies { policy, set_cookie })
	}
}

impl std::fmt::Debug for CookieIssuer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CookieIssuer")
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

/// Format one cookie as a `Set-Cookie` header value scoped to `domain`.
pub fn set_cookie_directive(cookie: &SignedCookie, domain: &str) -> String {
	format!(
		"{}={}; Path=/; Domain={}; HttpOnly",
		cookie.name, cookie.value, domain
	)
}
