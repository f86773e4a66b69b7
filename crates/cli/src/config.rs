//! On-disk configuration and flag overrides.
//!
//! The file is JSON with camelCase keys; every field is optional:
//!
//! ```json
//! {
//!   "target": { "timing": { "maxChecks": 40 } },
//!   "browser": { "headless": false, "profileDir": "/home/me/.local/share/signon/work" },
//!   "credentials": { "identifierEnv": "WORK_EMAIL", "secretEnv": "WORK_PASSWORD" }
//! }
//! ```
//!
//! Credential *values* never live in the file, only the names of the
//! environment variables that hold them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use signon::{Credentials, LoginTarget};
use tracing::debug;
use url::Url;

use crate::cli::{BrowserArgs, PollArgs};
use crate::error::{CliError, Result};

const APP_DIR: &str = "signon";
const CONFIG_FILE: &str = "config.json";
const PROFILE_DIR: &str = "chrome-profile";

/// Default config location, `<config_dir>/signon/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Default persistent browser profile, `<data_dir>/signon/chrome-profile`.
pub fn default_profile_dir() -> PathBuf {
	dirs::data_dir()
		.unwrap_or_else(|| PathBuf::from("."))
		.join(APP_DIR)
		.join(PROFILE_DIR)
}

/// Browser launch settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowserConfig {
	/// Persistent user-data directory. Cookies kept here make later runs
	/// take the fast path.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile_dir: Option<PathBuf>,
	pub headless: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chrome_path: Option<PathBuf>,
	/// How long element lookups and load waits may block.
	pub lookup_timeout_ms: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub window_size: Option<(u32, u32)>,
}

impl Default for BrowserConfig {
	fn default() -> Self {
		Self {
			profile_dir: None,
			headless: false,
			chrome_path: None,
			lookup_timeout_ms: 15_000,
			window_size: None,
		}
	}
}

impl BrowserConfig {
	pub fn profile_dir(&self) -> PathBuf {
		self.profile_dir.clone().unwrap_or_else(default_profile_dir)
	}

	pub fn lookup_timeout(&self) -> Duration {
		Duration::from_millis(self.lookup_timeout_ms)
	}
}

/// Where credentials come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialSource {
	pub identifier_env: String,
	pub secret_env: String,
}

impl Default for CredentialSource {
	fn default() -> Self {
		Self {
			identifier_env: "LINKEDIN_EMAIL".to_string(),
			secret_env: "LINKEDIN_PASSWORD".to_string(),
		}
	}
}

impl CredentialSource {
	/// Reads both variables. Called once per attempt.
	pub fn load(&self) -> Credentials {
		Credentials::from_env(&self.identifier_env, &self.secret_env)
	}
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
	pub target: LoginTarget,
	pub browser: BrowserConfig,
	pub credentials: CredentialSource,
}

impl AppConfig {
	/// Loads `explicit` if given (it must exist), otherwise the default path
	/// if present, otherwise built-in defaults. Returns the file actually
	/// read alongside the config.
	pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
		if let Some(path) = explicit {
			if !path.exists() {
				return Err(CliError::ConfigMissing { path: path.to_path_buf() });
			}
			return Ok((Self::from_path(path)?, Some(path.to_path_buf())));
		}

		match default_config_path() {
			Some(path) if path.exists() => Ok((Self::from_path(&path)?, Some(path))),
			_ => {
				debug!(target = "signon", "no config file, using defaults");
				Ok((Self::default(), None))
			}
		}
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
			path: path.to_path_buf(),
			source,
		})?;
		let config = serde_json::from_str(&content).map_err(|source| CliError::ConfigParse {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(target = "signon", path = %path.display(), "loaded config");
		Ok(config)
	}

	pub fn apply_browser(&mut self, args: &BrowserArgs) {
		if let Some(dir) = &args.profile_dir {
			self.browser.profile_dir = Some(dir.clone());
		}
		if args.headless {
			self.browser.headless = true;
		}
		if let Some(path) = &args.chrome {
			self.browser.chrome_path = Some(path.clone());
		}
	}

	pub fn apply_polling(&mut self, args: &PollArgs) {
		let timing = &mut self.target.timing;
		if let Some(max_checks) = args.max_checks {
			timing.max_checks = max_checks;
		}
		if let Some(grace_checks) = args.grace_checks {
			timing.grace_checks = grace_checks;
		}
		if let Some(interval) = args.poll_interval_ms {
			timing.poll_interval_ms = interval;
		}
	}

	pub fn validate(&self) -> Result<()> {
		self.target.validate()?;

		for (field, value) in [("target.loginUrl", &self.target.login_url), ("target.landingUrl", &self.target.landing_url)] {
			Url::parse(value).map_err(|e| CliError::Config(format!("{field} is not a valid URL ({value}): {e}")))?;
		}

		if self.credentials.identifier_env.is_empty() || self.credentials.secret_env.is_empty() {
			return Err(CliError::Config("credential environment variable names must not be empty".into()));
		}
		if self.browser.lookup_timeout_ms == 0 {
			return Err(CliError::Config("browser.lookupTimeoutMs must be greater than zero".into()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	fn write_config(contents: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn defaults_validate() {
		let config = AppConfig::default();
		config.validate().unwrap();
		assert_eq!(config.credentials.identifier_env, "LINKEDIN_EMAIL");
		assert_eq!(config.browser.lookup_timeout(), Duration::from_secs(15));
		assert!(!config.browser.headless);
	}

	#[test]
	fn partial_file_merges_with_defaults() {
		let file = write_config(
			r#"{
				"target": { "timing": { "maxChecks": 40 } },
				"browser": { "headless": true, "profileDir": "/tmp/signon-profile" },
				"credentials": { "identifierEnv": "WORK_EMAIL" }
			}"#,
		);
		let (config, source) = AppConfig::load(Some(file.path())).unwrap();

		assert_eq!(source.as_deref(), Some(file.path()));
		assert_eq!(config.target.timing.max_checks, 40);
		assert_eq!(config.target.timing.grace_checks, 5);
		assert_eq!(config.target.login_url, "https://www.linkedin.com/login");
		assert!(config.browser.headless);
		assert_eq!(config.browser.profile_dir(), PathBuf::from("/tmp/signon-profile"));
		assert_eq!(config.credentials.identifier_env, "WORK_EMAIL");
		assert_eq!(config.credentials.secret_env, "LINKEDIN_PASSWORD");
	}

	#[test]
	fn explicit_missing_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("absent.json");
		let err = AppConfig::load(Some(&missing)).unwrap_err();
		assert!(matches!(err, CliError::ConfigMissing { .. }));
	}

	#[test]
	fn malformed_file_reports_parse_error() {
		let file = write_config("{ \"target\": ");
		let err = AppConfig::load(Some(file.path())).unwrap_err();
		assert!(matches!(err, CliError::ConfigParse { .. }));
	}

	#[test]
	fn flags_override_file_values() {
		let mut config = AppConfig::default();
		config.apply_browser(&BrowserArgs {
			profile_dir: Some(PathBuf::from("/tmp/other")),
			headless: true,
			chrome: Some(PathBuf::from("/usr/bin/chromium")),
		});
		config.apply_polling(&PollArgs {
			max_checks: Some(8),
			grace_checks: Some(2),
			poll_interval_ms: Some(500),
		});

		assert_eq!(config.browser.profile_dir(), PathBuf::from("/tmp/other"));
		assert!(config.browser.headless);
		assert_eq!(config.browser.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
		assert_eq!(config.target.timing.max_checks, 8);
		assert_eq!(config.target.timing.grace_checks, 2);
		assert_eq!(config.target.timing.poll_interval_ms, 500);
		config.validate().unwrap();
	}

	#[test]
	fn absent_flags_leave_config_alone() {
		let mut config = AppConfig::default();
		config.browser.headless = true;
		config.apply_browser(&BrowserArgs::default());
		config.apply_polling(&PollArgs::default());
		assert_eq!(config.target, LoginTarget::default());
		assert!(config.browser.headless);
	}

	#[test]
	fn invalid_url_is_rejected() {
		let mut config = AppConfig::default();
		config.target.login_url = "linkedin.com/login".into();
		let err = config.validate().unwrap_err();
		assert!(err.to_string().contains("target.loginUrl"), "{err}");
	}

	#[test]
	fn grace_override_beyond_budget_is_rejected() {
		let mut config = AppConfig::default();
		config.apply_polling(&PollArgs {
			max_checks: Some(3),
			grace_checks: Some(3),
			poll_interval_ms: None,
		});
		assert!(matches!(config.validate(), Err(CliError::Config(_))));
	}
}
