//! HTTP API for service availability (SLA) lookups and composite SLA
//! calculations.
//!
//! The availability table is built once at startup and shared read-only for
//! the lifetime of the process; request handlers only ever read from it, so
//! concurrent requests need no synchronization.

use std::io;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

pub mod cli;

pub mod config;
pub use config::Config;

pub mod openapi;
pub mod sla;

mod http;
mod signals;

/// Runs the HTTP server with the given config.
///
/// This function will not return until the server shuts down.
pub fn run(config: Config) -> Result<(), RunError> {
	let mut runtime = tokio::runtime::Builder::new_multi_thread();

	runtime.enable_all();

	if let Some(count) = config.runtime.worker_threads {
		runtime.worker_threads(count.get());
	}

	let fut = async {
		if config.tracing.enable {
			use tracing_subscriber::EnvFilter;

			tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(
					EnvFilter::try_from_default_env()
						.unwrap_or_else(|_| EnvFilter::new("sla_api=trace,warn")),
				)
				.init();
		}

		let table = sla::SlaTable::default();
		let service = http::router(table).into_make_service();

		let tcp_listener = TcpListener::bind(config.http.socket_addr())
			.await
			.map_err(RunError::BindTcpListener)?;

		let addr = tcp_listener
			.local_addr()
			.map_err(RunError::BindTcpListener)?;

		info!(%addr, "listening for http requests");

		axum::serve(tcp_listener, service)
			.with_graceful_shutdown(signals::sigint())
			.await
			.map_err(RunError::Serve)
	};

	runtime
		.build()
		.map_err(RunError::InitializeRuntime)?
		.block_on(fut)
}

/// Errors returned by [`run()`].
#[derive(Debug, Error)]
pub enum RunError {
	#[error("failed to initialize tokio: {0}")]
	InitializeRuntime(#[source] io::Error),

	#[error("failed to bind tcp listener: {0}")]
	BindTcpListener(#[source] io::Error),

	#[error("failed to run server: {0}")]
	Serve(#[source] io::Error),
}
