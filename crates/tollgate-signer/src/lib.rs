// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Access policies and signed cookies for CDN content.
//!
//! [`AccessPolicy`] describes what a cookie grants and until when.
//! [`CookieSigner`] is the capability that turns a serialized policy into
//! cookies; [`CloudFrontCookieSigner`] is the production implementation.

mod cloudfront;
mod cookies;
mod error;
mod policy;

pub use cloudfront::{
	cloudfront_base64, CloudFrontCookieSigner, KEY_PAIR_ID_COOKIE, POLICY_COOKIE, SIGNATURE_COOKIE,
};
pub use cookies::{CookieSigner, SignedCookie, SignedCookies};
pub use error::{SigningError, SigningResult};
pub use policy::{AccessPolicy, EpochTime, PolicyCondition, PolicyStatement, COOKIE_LIFETIME_SECS};
