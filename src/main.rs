use std::io;

use anyhow::Context;
use banking::{run_app, CliArgs, Config, Console};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let config = Config::from_args(&args).context("could not load configuration")?;
    log::debug!("activity log at {}", config.log_file.display());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_app(&config, &mut console)?;
    Ok(())
}
