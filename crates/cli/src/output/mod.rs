//! Result envelope printed by every command.
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "ok": false,
//!   "command": "login",
//!   "data": { "outcome": "timedOut", "checks": 25, ... },
//!   "error": { "code": "AUTH_TIMED_OUT", "message": "no verdict after 25 checks" },
//!   "timings": { "durationMs": 78113 }
//! }
//! ```
//!
//! `login` keeps `data` on failure so callers can see how far the attempt got.

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use colored::Colorize;
use serde::{Deserialize, Serialize};
use signon::Outcome;

/// Current schema version for command output.
pub const SCHEMA_VERSION: u32 = 1;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text
	#[default]
	Text,
	/// Pretty-printed JSON
	Json,
	/// Single-line JSON
	Ndjson,
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Text => write!(f, "text"),
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Ndjson => write!(f, "ndjson"),
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T> {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub schema_version: Option<u32>,

	pub ok: bool,

	pub command: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub timings: Option<Timings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	pub code: ErrorCode,

	pub message: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Config file missing, unreadable or invalid
	InvalidConfig,
	/// Browser failed to launch
	BrowserLaunchFailed,
	/// A page command outside the login flow failed
	PageError,
	/// Login ended without a session
	AuthFailed,
	/// Login ran out of polling checks
	AuthTimedOut,
	/// No authenticated session present
	NotAuthenticated,
	/// File I/O error
	IoError,
}

impl ErrorCode {
	/// Error code reported for a non-successful login outcome.
	pub fn for_outcome(outcome: Outcome) -> Option<Self> {
		match outcome {
			Outcome::Authenticated => None,
			Outcome::Failed => Some(ErrorCode::AuthFailed),
			Outcome::TimedOut => Some(ErrorCode::AuthTimedOut),
		}
	}
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorCode::InvalidConfig => write!(f, "INVALID_CONFIG"),
			ErrorCode::BrowserLaunchFailed => write!(f, "BROWSER_LAUNCH_FAILED"),
			ErrorCode::PageError => write!(f, "PAGE_ERROR"),
			ErrorCode::AuthFailed => write!(f, "AUTH_FAILED"),
			ErrorCode::AuthTimedOut => write!(f, "AUTH_TIMED_OUT"),
			ErrorCode::NotAuthenticated => write!(f, "NOT_AUTHENTICATED"),
			ErrorCode::IoError => write!(f, "IO_ERROR"),
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
	pub duration_ms: u64,
}

impl From<Duration> for Timings {
	fn from(duration: Duration) -> Self {
		Timings {
			duration_ms: duration.as_millis() as u64,
		}
	}
}

/// One-line human summary for text output.
pub trait TextSummary {
	fn summary(&self) -> String;
}

pub struct ResultBuilder<T> {
	command: String,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
}

impl<T: Serialize> ResultBuilder<T> {
	/// Starts timing `command` now.
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			data: None,
			error: None,
			start_time: Instant::now(),
		}
	}

	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details: None,
		});
		self
	}

	pub fn error_with_details(mut self, code: ErrorCode, message: impl Into<String>, details: serde_json::Value) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details: Some(details),
		});
		self
	}

	pub fn build(self) -> CommandResult<T> {
		CommandResult {
			schema_version: Some(SCHEMA_VERSION),
			ok: self.error.is_none() && self.data.is_some(),
			command: self.command,
			data: self.data,
			error: self.error,
			timings: Some(Timings::from(self.start_time.elapsed())),
		}
	}
}

/// Print a command result to stdout in the specified format
pub fn print_result<T: Serialize + TextSummary>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Text => print_result_text(result),
		_ => print_json(result, format),
	}
}

/// Print the JSON form of a result. Text format prints nothing.
pub fn print_json<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
	let json = match format {
		OutputFormat::Json => serde_json::to_string_pretty(result),
		OutputFormat::Ndjson => serde_json::to_string(result),
		OutputFormat::Text => return,
	};
	if let Ok(json) = json {
		println!("{json}");
	}
}

fn print_result_text<T: TextSummary>(result: &CommandResult<T>) {
	let mut stdout = io::stdout().lock();
	if let Some(ref data) = result.data {
		let marker = if result.ok { "✔".green().bold() } else { "✘".red().bold() };
		let _ = writeln!(stdout, "{marker} {}", data.summary());
	}
	if let Some(ref error) = result.error {
		let _ = writeln!(stdout, "{} [{}]: {}", "Error".red().bold(), error.code, error.message);
	}
}

pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
	pub outcome: Outcome,
	pub existing_session: bool,
	pub checks: u32,
	pub max_checks: u32,
	pub login_url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason_code: Option<String>,
}

impl TextSummary for LoginData {
	fn summary(&self) -> String {
		match (self.outcome, self.existing_session) {
			(Outcome::Authenticated, true) => "already signed in (persistent profile)".to_string(),
			(Outcome::Authenticated, false) => format!("signed in after {} of {} checks", self.checks, self.max_checks),
			(outcome, _) => match &self.reason {
				Some(reason) => format!("login {outcome}: {reason}"),
				None => format!("login {outcome}"),
			},
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusData {
	pub authenticated: bool,
	pub landing_url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	pub profile_dir: PathBuf,
}

impl TextSummary for StatusData {
	fn summary(&self) -> String {
		let state = if self.authenticated { "signed in" } else { "signed out" };
		format!("{state} ({})", self.profile_dir.display())
	}
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigData {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub source: Option<PathBuf>,
	pub config: crate::config::AppConfig,
}

impl TextSummary for ConfigData {
	fn summary(&self) -> String {
		let source = match &self.source {
			Some(path) => format!("config from {}", path.display()),
			None => "built-in defaults".to_string(),
		};
		match serde_json::to_string_pretty(&self.config) {
			Ok(json) => format!("{source}\n{json}"),
			Err(_) => source,
		}
	}
}
