use std::path::PathBuf;

use signon::{ConfigError, PageError};
use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("invalid configuration: {0}")]
	Config(String),

	#[error("config file not found: {}", path.display())]
	ConfigMissing { path: PathBuf },

	#[error("failed to read config {}", path.display())]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config {}: {source}", path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("browser launch failed: {0}")]
	BrowserLaunch(String),

	#[error(transparent)]
	Page(#[from] PageError),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
	fn from(err: ConfigError) -> Self {
		CliError::Config(err.to_string())
	}
}

impl CliError {
	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, details) = match self {
			CliError::Config(_) => (ErrorCode::InvalidConfig, None),
			CliError::ConfigMissing { path } | CliError::ConfigRead { path, .. } | CliError::ConfigParse { path, .. } => {
				(ErrorCode::InvalidConfig, Some(serde_json::json!({ "path": path })))
			}
			CliError::BrowserLaunch(_) => (ErrorCode::BrowserLaunchFailed, None),
			CliError::Page(PageError::ElementNotFound { selector }) => {
				(ErrorCode::PageError, Some(serde_json::json!({ "selector": selector })))
			}
			CliError::Page(_) => (ErrorCode::PageError, None),
			CliError::Io(_) => (ErrorCode::IoError, None),
		};

		CommandError {
			code,
			message: self.to_string(),
			details,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_errors_carry_path() {
		let err = CliError::ConfigMissing {
			path: PathBuf::from("/tmp/nope/config.json"),
		};
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::InvalidConfig);
		assert_eq!(cmd.message, "config file not found: /tmp/nope/config.json");
		assert_eq!(cmd.details.unwrap()["path"], "/tmp/nope/config.json");
	}

	#[test]
	fn validation_error_converts() {
		let err: CliError = ConfigError::NoChecks.into();
		assert_eq!(err.to_command_error().code, ErrorCode::InvalidConfig);
		assert!(err.to_string().contains("maxChecks"));
	}

	#[test]
	fn page_errors_map_to_page_code() {
		let err = CliError::from(PageError::Unavailable("target closed".into()));
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::PageError);
		assert_eq!(cmd.message, "page unavailable: target closed");
	}

	#[test]
	fn every_variant_maps_to_a_specific_code() {
		let cases = [
			(CliError::Config("bad".into()), ErrorCode::InvalidConfig),
			(CliError::BrowserLaunch("no chrome".into()), ErrorCode::BrowserLaunchFailed),
			(
				CliError::Page(PageError::ElementNotFound {
					selector: "#user".into(),
				}),
				ErrorCode::PageError,
			),
			(CliError::from(std::io::Error::other("disk full")), ErrorCode::IoError),
		];
		for (err, code) in cases {
			assert_eq!(err.to_command_error().code, code, "{err}");
		}
	}
}
