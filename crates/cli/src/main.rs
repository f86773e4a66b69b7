use clap::Parser;
use signon_cli::cli::Cli;
use signon_cli::error::CliError;
use signon_cli::output::{self, OutputFormat, ResultBuilder};
use signon_cli::{commands, logging};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();

	let code = match commands::dispatch(cli) {
		Ok(code) => code,
		Err(err) => {
			handle_error(err, command, format);
			1
		}
	};
	std::process::exit(code);
}

fn handle_error(err: CliError, command: &str, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Always print to stderr for humans
	output::print_error_stderr(&cmd_error);

	// Also emit the envelope on stdout with ok=false for scripts
	if format != OutputFormat::Text {
		let result: output::CommandResult<()> = match cmd_error.details {
			Some(details) => ResultBuilder::new(command).error_with_details(cmd_error.code, cmd_error.message, details),
			None => ResultBuilder::new(command).error(cmd_error.code, cmd_error.message),
		}
		.build();
		output::print_json(&result, format);
	}
}
