// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tollgate server binary.
//!
//! Without a subcommand the router is handed to the Lambda runtime. The
//! function must run with `AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH=true` so API
//! Gateway stage prefixes never reach the router.

use std::net::SocketAddr;
use std::path::PathBuf;

use aws_config::{BehaviorVersion, Region};
use clap::{Parser, Subcommand};
use tollgate_server::{create_app_state, create_router, version};
use tollgate_server_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tollgate - signed-cookie issuance for CDN content.
#[derive(Parser, Debug)]
#[command(name = "tollgate-server", about = "Signed-cookie issuance server", version)]
struct Args {
	/// Path to a TOML config file.
	#[arg(long, env = "TOLLGATE_CONFIG", global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Serve the API on a local TCP listener instead of Lambda
	Serve {
		/// Listen address, overriding TOLLGATE_HTTP_ADDR
		#[arg(long)]
		addr: Option<SocketAddr>,
	},
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => tollgate_server_config::load_config_with_file(path)?,
		None => tollgate_server_config::load_config()?,
	};

	init_tracing(&config.logging);

	let sdk_config = aws_config::defaults(BehaviorVersion::latest())
		.region(Region::new(config.aws.region.clone()))
		.load()
		.await;

	let state = create_app_state(&config, &sdk_config);

	match args.command {
		Some(Command::Serve { addr }) => {
			let app = create_router(state.with_memory_item_fallback());
			let addr = addr.unwrap_or(config.http.addr);
			tracing::info!(%addr, region = %config.aws.region, "starting tollgate-server");

			let listener = tokio::net::TcpListener::bind(addr).await?;
			axum::serve(listener, app)
				.with_graceful_shutdown(shutdown_signal())
				.await?;

			tracing::info!("Server shutdown complete");
		}
		Some(Command::Version) | None => {
			tracing::info!(region = %config.aws.region, "starting lambda runtime");
			lambda_http::run(create_router(state))
				.await
				.map_err(|e| e as Box<dyn std::error::Error>)?;
		}
	}

	Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| logging.level.clone().into());
	let registry = tracing_subscriber::registry().with(filter);

	match logging.format {
		LogFormat::Json => registry
			.with(
				tracing_subscriber::fmt::layer()
					.json()
					.with_target(false)
					.with_current_span(false),
			)
			.init(),
		LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
	}
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(e) = tokio::signal::ctrl_c().await {
			tracing::error!(error = %e, "failed to listen for Ctrl+C");
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(e) => {
				tracing::error!(error = %e, "failed to listen for SIGTERM");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {}
		_ = terminate => {}
	}

	tracing::info!("Received shutdown signal");
}
