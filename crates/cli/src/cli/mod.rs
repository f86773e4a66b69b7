#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Root CLI for signon.
#[derive(Parser, Debug)]
#[command(name = "signon")]
#[command(about = "Sign in to a website through a real browser and report the outcome")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: text (default), json, or ndjson
	#[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// Config file (defaults to <config dir>/signon/config.json when present)
	#[arg(short, long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Log in, reusing the profile's session when it is still valid.
	///
	/// Credentials are read from the environment variables named in the
	/// config (LINKEDIN_EMAIL and LINKEDIN_PASSWORD by default). Exits 0 when
	/// signed in, 1 on failure, 2 when the wait budget runs out.
	Login(LoginArgs),
	/// Open the landing page and report whether the profile is signed in.
	Status(StatusArgs),
	/// Print the effective configuration.
	Config,
}

impl Commands {
	/// Name reported in the `command` field of the output envelope.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Login(_) => "login",
			Commands::Status(_) => "status",
			Commands::Config => "config",
		}
	}
}

#[derive(Args, Debug, Clone, Default)]
pub struct LoginArgs {
	#[command(flatten)]
	pub browser: BrowserArgs,

	#[command(flatten)]
	pub polling: PollArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StatusArgs {
	#[command(flatten)]
	pub browser: BrowserArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BrowserArgs {
	/// Persistent browser profile directory
	#[arg(long, value_name = "DIR")]
	pub profile_dir: Option<PathBuf>,

	/// Run the browser without a window (checkpoints cannot be cleared by hand)
	#[arg(long)]
	pub headless: bool,

	/// Chrome/Chromium executable (auto-detected when omitted)
	#[arg(long, value_name = "PATH")]
	pub chrome: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PollArgs {
	/// Number of post-submit location checks before giving up
	#[arg(long, value_name = "N")]
	pub max_checks: Option<u32>,

	/// Early checks during which a return to the login page is ignored
	#[arg(long, value_name = "N")]
	pub grace_checks: Option<u32>,

	/// Delay before each check
	#[arg(long, value_name = "MS")]
	pub poll_interval_ms: Option<u64>,
}

/// Help colours in cargo's style: green bold headers, cyan literals.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
		.valid(AnsiColor::Cyan.on_default())
}
