// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod aws;
mod cookie;
mod http;
mod items;
mod logging;

pub use aws::{AwsConfig, AwsConfigLayer, DEFAULT_REGION};
pub use cookie::{CookieConfig, CookieConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer, DEFAULT_ADDR};
pub use items::{ItemsConfig, ItemsConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
