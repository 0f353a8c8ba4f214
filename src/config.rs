//! API configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZero;
use std::path::Path;
use std::{fs, io};

use thiserror::Error;

/// The global configuration for the API.
///
/// This is loaded from a TOML file on startup. Every section (and every field
/// within each section) may be omitted, in which case the defaults below
/// apply.
#[derive(Default, Debug, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	#[serde(default)]
	pub runtime: RuntimeConfig,

	#[serde(default)]
	pub http: HttpConfig,

	#[serde(default)]
	pub tracing: TracingConfig,
}

#[derive(Default, Debug, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuntimeConfig {
	/// The amount of worker threads to spin up.
	///
	/// If this value is omitted, tokio's default (one thread per CPU core) is
	/// used.
	#[serde(default)]
	pub worker_threads: Option<NonZero<usize>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HttpConfig {
	/// The IP address the server should listen on.
	#[serde(default = "HttpConfig::default_ip")]
	pub ip: IpAddr,

	/// The port the server should listen on.
	#[serde(default = "HttpConfig::default_port")]
	pub port: u16,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TracingConfig {
	/// Whether to emit tracing output.
	#[serde(default = "TracingConfig::default_enable")]
	pub enable: bool,
}

/// Errors that can occur when loading the [`Config`] from a file.
#[derive(Debug, Error)]
pub enum LoadFromFileError {
	#[error("failed to read configuration file: {0}")]
	ReadFile(#[source] io::Error),

	#[error("failed to parse configuration file: {0}")]
	Deserialize(#[source] toml::de::Error),
}

impl Config {
	/// Loads a file into memory and parses it into a [`Config`] object.
	pub fn load_from_file(path: &Path) -> Result<Self, LoadFromFileError> {
		fs::read_to_string(path)
			.map(|file_contents| toml::from_str(&file_contents))
			.map_err(LoadFromFileError::ReadFile)?
			.map_err(LoadFromFileError::Deserialize)
	}
}

impl HttpConfig {
	/// Returns the [`SocketAddr`] that the HTTP server should listen on.
	pub fn socket_addr(&self) -> SocketAddr {
		SocketAddr::new(self.ip, self.port)
	}

	fn default_ip() -> IpAddr {
		IpAddr::V4(Ipv4Addr::LOCALHOST)
	}

	fn default_port() -> u16 {
		8000_u16
	}
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			ip: Self::default_ip(),
			port: Self::default_port(),
		}
	}
}

impl TracingConfig {
	fn default_enable() -> bool {
		true
	}
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			enable: Self::default_enable(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_config_uses_defaults() {
		let config = toml::from_str::<Config>("").unwrap();

		assert_eq!(config.http.socket_addr().port(), 8000);
		assert!(config.tracing.enable);
		assert!(config.runtime.worker_threads.is_none());
	}

	#[test]
	fn sections_may_be_partial() {
		let config = toml::from_str::<Config>(
			"[http]\n\
			 port = 8080\n\
			 \n\
			 [tracing]\n\
			 enable = false\n",
		)
		.unwrap();

		assert_eq!(config.http.port, 8080);
		assert_eq!(config.http.ip, HttpConfig::default_ip());
		assert!(!config.tracing.enable);
	}

	#[test]
	fn unknown_fields_are_rejected() {
		toml::from_str::<Config>("[http]\nhost = \"localhost\"\n").unwrap_err();
	}
}
