//! One login attempt from fast-path check to terminal [`Outcome`].

use std::thread;

use tracing::{debug, info, warn};

use crate::config::LoginTarget;
use crate::credentials::Credentials;
use crate::detector::SessionDetector;
use crate::error::{AuthError, PageError};
use crate::markers::Classification;
use crate::outcome::Outcome;
use crate::page::Page;
use crate::poll::{self, AttemptState, Step};

/// Everything known about a finished attempt.
#[derive(Debug)]
pub struct AttemptReport {
	pub outcome: Outcome,
	/// Polling checks consumed. Zero when polling never started.
	pub checks: u32,
	/// True when the fast path found a live session and nothing was submitted.
	pub existing_session: bool,
	/// Why the attempt did not authenticate, if it did not.
	pub error: Option<AuthError>,
}

impl AttemptReport {
	fn existing_session() -> Self {
		Self {
			outcome: Outcome::Authenticated,
			checks: 0,
			existing_session: true,
			error: None,
		}
	}

	fn finished(result: Result<(), AuthError>, checks: u32) -> Self {
		match result {
			Ok(()) => Self {
				outcome: Outcome::Authenticated,
				checks,
				existing_session: false,
				error: None,
			},
			Err(err) => Self {
				outcome: err.outcome(),
				checks,
				existing_session: false,
				error: Some(err),
			},
		}
	}
}

/// Drives a borrowed [`Page`] through the login flow described by a
/// [`LoginTarget`].
///
/// Attempts are synchronous and block the calling thread for the settle and
/// polling delays. The page is never closed here.
pub struct Authenticator<'a, P: Page + ?Sized> {
	page: &'a P,
	target: &'a LoginTarget,
}

impl<'a, P: Page + ?Sized> Authenticator<'a, P> {
	pub fn new(page: &'a P, target: &'a LoginTarget) -> Self {
		Self { page, target }
	}

	/// Detector bound to the same page and markers this authenticator uses.
	pub fn detector(&self) -> SessionDetector<'a, P> {
		SessionDetector::new(self.page, &self.target.markers)
	}

	/// Runs one attempt and reports only its outcome.
	pub fn authenticate(&self, credentials: &Credentials) -> Outcome {
		self.attempt(credentials).outcome
	}

	/// Runs one attempt and reports the outcome with its diagnostics.
	pub fn attempt(&self, credentials: &Credentials) -> AttemptReport {
		if self.detector().is_authenticated() {
			info!(target = "signon", "session already active, skipping login");
			return AttemptReport::existing_session();
		}

		let mut state = AttemptState::new(self.target.timing.max_checks);
		let result = self.login(credentials, &mut state);
		match &result {
			Ok(()) => info!(target = "signon", checks = state.checks(), "login successful"),
			Err(err) => warn!(target = "signon", code = err.code(), checks = state.checks(), "login did not complete: {err}"),
		}
		AttemptReport::finished(result, state.checks())
	}

	fn login(&self, credentials: &Credentials, state: &mut AttemptState) -> Result<(), AuthError> {
		if let Some(field) = credentials.missing_field() {
			return Err(AuthError::Configuration(format!("{field} is empty")));
		}

		info!(target = "signon", url = %self.target.login_url, "performing login");
		self.submit(credentials)?;
		self.poll(state)
	}

	/// Fills and submits the form once. Nothing here is retried.
	fn submit(&self, credentials: &Credentials) -> Result<(), AuthError> {
		let selectors = &self.target.selectors;

		self.page
			.navigate(&self.target.login_url)
			.map_err(interaction("navigate"))?;
		self.page.wait_load().map_err(interaction("wait for load"))?;

		self.fill("identifier", &selectors.identifier, credentials.identifier())?;
		self.fill("secret", &selectors.secret, credentials.secret())?;

		let submit = self
			.page
			.find_clickable(&selectors.submit)
			.map_err(interaction("submit"))?;
		submit.click().map_err(interaction("submit"))?;
		debug!(target = "signon", "login form submitted");
		Ok(())
	}

	fn fill(&self, step: &'static str, selector: &str, value: &str) -> Result<(), AuthError> {
		let input = self.page.find_input(selector).map_err(interaction(step))?;
		input.focus().map_err(interaction(step))?;
		input.set_text(value).map_err(interaction(step))?;
		debug!(target = "signon", field = step, "field filled");

		// Lets the page's own input handlers catch up before the next control.
		thread::sleep(self.target.timing.settle());
		Ok(())
	}

	fn poll(&self, state: &mut AttemptState) -> Result<(), AuthError> {
		let timing = self.target.timing;
		let markers = &self.target.markers;

		while let Some(check) = state.next_check() {
			thread::sleep(timing.poll_interval());

			let observed = self.page.current_location();
			if let Ok(location) = &observed {
				info!(target = "signon", check, max_checks = state.max_checks(), location = %location, "login progress");
			}

			match poll::transition(check, observed.as_deref(), markers, timing.grace_checks) {
				Step::Authenticated => return Ok(()),
				Step::Rejected(location) => {
					return Err(AuthError::Rejected {
						check,
						location: location.to_string(),
					});
				}
				Step::SessionLost(source) => {
					return Err(AuthError::SessionLost {
						check,
						source: source.clone(),
					});
				}
				Step::Continue(Classification::Checkpoint) => {
					if state.note_checkpoint() {
						warn!(target = "signon", check, "verification checkpoint detected, awaiting manual resolution in the browser");
					} else {
						debug!(target = "signon", check, "still on verification checkpoint");
					}
				}
				Step::Continue(Classification::LoginSurface) => {
					debug!(target = "signon", check, grace_checks = timing.grace_checks, "login surface inside grace window");
				}
				Step::Continue(_) => {}
			}
		}

		Err(AuthError::BudgetExhausted { checks: state.checks() })
	}
}

fn interaction(step: &'static str) -> impl Fn(PageError) -> AuthError {
	move |source| AuthError::Interaction { step, source }
}
