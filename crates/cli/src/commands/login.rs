use std::error::Error as _;

use signon::{AttemptReport, AuthError, Authenticator, Credentials, LoginTarget, Outcome, Page};
use tracing::{info, warn};

use crate::browser::BrowserSession;
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{self, ErrorCode, LoginData, OutputFormat, ResultBuilder};

pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<i32> {
	let builder = ResultBuilder::new("login");
	let target = &config.target;

	// Read once; the values are not looked at again for the rest of the run.
	let credentials = config.credentials.load();

	let session = BrowserSession::launch(&config.browser, target.timing.polling_budget())?;
	let report = {
		let page = session.page();
		run_attempt(&page, target, &credentials)
	};
	session.close();

	info!(target = "signon", outcome = %report.outcome, checks = report.checks, "login finished");

	let exit = exit_code(report.outcome);
	let result = envelope(builder, &report, config).build();
	output::print_result(&result, format);
	Ok(exit)
}

/// Loads the landing page first so the fast path sees where the profile's
/// cookies actually lead; a fresh tab sits on `about:blank`.
fn run_attempt<P: Page + ?Sized>(page: &P, target: &LoginTarget, credentials: &Credentials) -> AttemptReport {
	let opened = page.navigate(&target.landing_url).and_then(|()| page.wait_load());
	if let Err(err) = opened {
		warn!(target = "signon", url = %target.landing_url, error = %err, "landing page did not load, going straight to login");
	}
	Authenticator::new(page, target).attempt(credentials)
}

fn envelope(builder: ResultBuilder<LoginData>, report: &AttemptReport, config: &AppConfig) -> ResultBuilder<LoginData> {
	let data = LoginData {
		outcome: report.outcome,
		existing_session: report.existing_session,
		checks: report.checks,
		max_checks: config.target.timing.max_checks,
		login_url: config.target.login_url.clone(),
		reason: report.error.as_ref().map(describe),
		reason_code: report.error.as_ref().map(|err| err.code().to_string()),
	};

	let builder = builder.data(data);
	match (ErrorCode::for_outcome(report.outcome), &report.error) {
		(Some(code), Some(err)) => builder.error(code, describe(err)),
		(Some(code), None) => builder.error(code, format!("login {}", report.outcome)),
		(None, _) => builder,
	}
}

/// The error message followed by its source, e.g. the selector that was not
/// found behind an interaction failure.
fn describe(err: &AuthError) -> String {
	match err.source() {
		Some(source) => format!("{err}: {source}"),
		None => err.to_string(),
	}
}

fn exit_code(outcome: Outcome) -> i32 {
	match outcome {
		Outcome::Authenticated => 0,
		Outcome::Failed => 1,
		Outcome::TimedOut => 2,
	}
}
