use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{self, ConfigData, OutputFormat, ResultBuilder};

/// Prints the merged configuration. An invalid config is still printed, with
/// the validation error alongside it.
pub fn execute(config: AppConfig, source: Option<PathBuf>, format: OutputFormat) -> Result<i32> {
	let validation = config.validate();
	let builder = ResultBuilder::new("config").data(ConfigData { source, config });

	let (result, exit) = match validation {
		Ok(()) => (builder.build(), 0),
		Err(err) => {
			let error = err.to_command_error();
			(builder.error(error.code, error.message).build(), 1)
		}
	};
	output::print_result(&result, format);
	Ok(exit)
}
