//! Chromium session backing the login core.
//!
//! The session owns the browser process and a single tab. The profile
//! directory persists between runs, which is what lets a later `login` take
//! the fast path.

mod page;

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};
pub use page::ChromePage;
use tracing::{debug, info};

use crate::config::BrowserConfig;
use crate::error::{CliError, Result};

/// Flags carried over for every launch. Sandbox is turned off through the
/// launch options rather than a raw flag.
const LAUNCH_FLAGS: &[&str] = &["--disable-gpu", "--disable-dev-shm-usage", "--disable-blink-features=AutomationControlled"];

/// Slack added on top of the caller's expected busy time before the driver
/// gives up on an idle browser connection.
const IDLE_SLACK: Duration = Duration::from_secs(60);

/// A launched browser with one open tab.
pub struct BrowserSession {
	_browser: Browser,
	tab: Arc<Tab>,
	lookup_timeout: Duration,
}

impl BrowserSession {
	/// Launches Chromium with the configured profile.
	///
	/// `busy_for` is how long the caller may go without issuing commands
	/// (the polling budget for `login`); the driver's idle timeout is
	/// stretched to cover it.
	pub fn launch(config: &BrowserConfig, busy_for: Duration) -> Result<Self> {
		let profile_dir = config.profile_dir();
		std::fs::create_dir_all(&profile_dir)?;
		info!(target = "signon", profile = %profile_dir.display(), headless = config.headless, "launching chromium");

		let mut options = LaunchOptions::default_builder();
		options
			.headless(config.headless)
			.sandbox(false)
			.user_data_dir(Some(profile_dir))
			.window_size(config.window_size)
			.idle_browser_timeout(busy_for + IDLE_SLACK)
			.args(LAUNCH_FLAGS.iter().map(OsStr::new).collect());
		if let Some(path) = &config.chrome_path {
			options.path(Some(path.clone()));
		}
		let options = options
			.build()
			.map_err(|e| CliError::BrowserLaunch(format!("invalid launch options: {e}")))?;

		let browser = Browser::new(options).map_err(|e| CliError::BrowserLaunch(format!("{e:#}. Is Chrome/Chromium installed?")))?;
		let tab = browser
			.new_tab()
			.map_err(|e| CliError::BrowserLaunch(format!("could not open a tab: {e:#}")))?;
		debug!(target = "signon", "browser ready");

		Ok(Self {
			_browser: browser,
			tab,
			lookup_timeout: config.lookup_timeout(),
		})
	}

	/// The session's tab as a login-core page.
	pub fn page(&self) -> ChromePage<'_> {
		ChromePage::new(&self.tab, self.lookup_timeout)
	}

	/// Closes the tab so the profile is flushed, then shuts the browser down.
	pub fn close(self) {
		if let Err(err) = self.tab.close(true) {
			debug!(target = "signon", error = %err, "tab already gone at shutdown");
		}
	}
}
