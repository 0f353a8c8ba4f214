use std::fs;
use std::path::Path;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
	let cli_args = sla_api::cli::args();
	let mut config = if let Some(config_path) = cli_args.config_path.as_deref() {
		read_and_parse_config_file(config_path)?
	} else if fs::exists("./sla-api.toml")? {
		read_and_parse_config_file(Path::new("./sla-api.toml"))?
	} else {
		sla_api::Config::default()
	};

	cli_args.apply_to_config(&mut config);

	sla_api::run(config).context("failed to run API")?;

	Ok(())
}

fn read_and_parse_config_file(path: &Path) -> anyhow::Result<sla_api::Config> {
	sla_api::Config::load_from_file(path)
		.with_context(|| format!("failed to load configuration from `{}`", path.display()))
}
