//! Post-submit polling as a pure state machine.
//!
//! [`transition`] decides what one observation means given how far into the
//! attempt it was made. [`AttemptState`] counts checks against the budget.
//! Neither touches the clock, so sequences of locations can be replayed
//! directly in tests.

use crate::error::PageError;
use crate::markers::{Classification, Markers};

/// Result of feeding one observation into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
	/// No verdict yet. Carries what the location looked like.
	Continue(Classification),
	/// The authenticated area was reached.
	Authenticated,
	/// The login surface came back after the grace window.
	Rejected(&'a str),
	/// The location could not be read.
	SessionLost(&'a PageError),
}

/// Classifies the observation made at `check` (1-based).
///
/// A login-surface location only counts as a rejection once `check` exceeds
/// `grace_checks`; before that the page may still be mid-navigation from the
/// submit click.
pub fn transition<'a>(check: u32, observed: Result<&'a str, &'a PageError>, markers: &Markers, grace_checks: u32) -> Step<'a> {
	let location = match observed {
		Ok(location) => location,
		Err(err) => return Step::SessionLost(err),
	};

	match markers.classify(location) {
		Classification::Authenticated => Step::Authenticated,
		Classification::LoginSurface if check > grace_checks => Step::Rejected(location),
		other => Step::Continue(other),
	}
}

/// Per-attempt polling counter. Never outlives one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptState {
	checks: u32,
	max_checks: u32,
	checkpoint_seen: bool,
}

impl AttemptState {
	pub fn new(max_checks: u32) -> Self {
		Self {
			checks: 0,
			max_checks,
			checkpoint_seen: false,
		}
	}

	/// Claims the next check, or `None` once the budget is spent.
	pub fn next_check(&mut self) -> Option<u32> {
		if self.checks >= self.max_checks {
			return None;
		}
		self.checks += 1;
		Some(self.checks)
	}

	/// Checks consumed so far.
	pub fn checks(&self) -> u32 {
		self.checks
	}

	pub fn max_checks(&self) -> u32 {
		self.max_checks
	}

	/// Records a checkpoint sighting. Returns true only for the first one.
	pub fn note_checkpoint(&mut self) -> bool {
		!std::mem::replace(&mut self.checkpoint_seen, true)
	}
}
