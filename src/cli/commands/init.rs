use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

/// Initialize the configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { api_url } = &cli.command {
        let url = api_url.clone().or_else(|| cli.api.clone());
        Config::init_all(url, cli.test)?;
    }
    Ok(())
}
