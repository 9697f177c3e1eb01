mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{dispatch, Cli};
use strand::config::Config;
use strand::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(cli.color, cli.log);
    config.apply();
    logging::init(&config.log_filter, config.log_ansi())?;

    dispatch(cli.command)
}
