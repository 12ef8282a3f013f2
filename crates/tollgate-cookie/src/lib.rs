// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Signed-cookie issuance for CDN content.
//!
//! A [`CookieIssuer`] is built from a validated [`CookieIssuerConfig`], a
//! [`SecretProvider`](tollgate_secrets::SecretProvider) holding the private
//! key, and a [`CookieSigner`](tollgate_signer::CookieSigner). Each call to
//! [`CookieIssuer::issue`] fetches the key, signs an eight-hour access policy
//! for `https://{domain}/*`, and returns one `Set-Cookie` value per cookie.
//!
//! Missing configuration is reported by [`CookieIssuerConfig::from_parts`]
//! as [`ConfigurationMissing`], separately from per-request
//! [`IssueError`]s, because the HTTP layer answers the two differently.

mod config;
mod error;
mod issuer;

pub use config::{
	ConfigurationMissing, CookieIssuerConfig, DOMAIN_VAR, KEY_PAIR_ID_VAR, SECRET_ID_VAR,
};
pub use error::{IssueError, IssueResult};
pub use issuer::{set_cookie_directive, CookieIssuer, IssuedCookies};
