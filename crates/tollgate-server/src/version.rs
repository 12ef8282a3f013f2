// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Build information for `tollgate-server version`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set by the release pipeline; `unknown` for local builds.
pub const GIT_SHA: Option<&str> = option_env!("TOLLGATE_GIT_SHA");

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"tollgate-server version: {}\n\
		 Git SHA:                 {}\n\
		 Platform:                {}-{}",
		VERSION,
		GIT_SHA.unwrap_or("unknown"),
		std::env::consts::OS,
		std::env::consts::ARCH,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn includes_package_version() {
		let info = format_version_info();
		assert!(info.starts_with("tollgate-server version: "));
		assert!(info.contains(VERSION));
		assert!(info.contains(std::env::consts::OS));
	}
}
