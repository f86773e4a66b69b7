//! Command implementations.
//!
//! Each command prints its own envelope and returns the process exit code.
//! Errors returned from here are setup failures (bad config, browser launch)
//! that happen before a command has anything to report; `main` prints those.

mod config;
mod login;
mod status;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::Result;

pub fn dispatch(cli: Cli) -> Result<i32> {
	let (mut config, source) = AppConfig::load(cli.config.as_deref())?;

	match cli.command {
		Commands::Login(args) => {
			config.apply_browser(&args.browser);
			config.apply_polling(&args.polling);
			config.validate()?;
			login::execute(&config, cli.format)
		}
		Commands::Status(args) => {
			config.apply_browser(&args.browser);
			config.validate()?;
			status::execute(&config, cli.format)
		}
		Commands::Config => config::execute(config, source, cli.format),
	}
}
