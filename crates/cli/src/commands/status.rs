use std::time::Duration;

use signon::{Markers, Page, SessionDetector};

use crate::browser::BrowserSession;
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{self, ErrorCode, OutputFormat, ResultBuilder, StatusData};

/// Idle allowance for the status probe, which never waits on a person.
const STATUS_IDLE: Duration = Duration::from_secs(30);

pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<i32> {
	let builder = ResultBuilder::new("status");
	let target = &config.target;

	let session = BrowserSession::launch(&config.browser, STATUS_IDLE)?;
	let probed = {
		let page = session.page();
		probe(&page, &target.landing_url, &target.markers)
	};
	session.close();
	let (authenticated, location) = probed?;

	let data = StatusData {
		authenticated,
		landing_url: target.landing_url.clone(),
		location,
		profile_dir: config.browser.profile_dir(),
	};
	let builder = builder.data(data);
	let (result, exit) = if authenticated {
		(builder.build(), 0)
	} else {
		(builder.error(ErrorCode::NotAuthenticated, "profile is not signed in").build(), 1)
	};
	output::print_result(&result, format);
	Ok(exit)
}

/// Opens the landing page and lets the site decide: a signed-out profile is
/// redirected away from it.
fn probe<P: Page + ?Sized>(page: &P, landing_url: &str, markers: &Markers) -> Result<(bool, Option<String>)> {
	page.navigate(landing_url)?;
	page.wait_load()?;
	let authenticated = SessionDetector::new(page, markers).is_authenticated();
	Ok((authenticated, page.current_location().ok()))
}

#[cfg(test)]
mod tests {
	use signon::testing::ScriptedPage;

	use super::*;

	#[test]
	fn landing_page_kept_means_signed_in() {
		let page = ScriptedPage::new("about:blank");
		let (authenticated, location) = probe(&page, "https://www.linkedin.com/feed/", &Markers::default()).unwrap();
		assert!(authenticated);
		assert_eq!(location.as_deref(), Some("https://www.linkedin.com/feed/"));
	}

	#[test]
	fn landing_page_without_marker_is_signed_out() {
		let page = ScriptedPage::new("about:blank");
		let (authenticated, location) = probe(&page, "https://www.linkedin.com/uas/login", &Markers::default()).unwrap();
		assert!(!authenticated);
		assert_eq!(location.as_deref(), Some("https://www.linkedin.com/uas/login"));
		assert!(!page.was_submitted());
	}
}
