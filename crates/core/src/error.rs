//! Error types for the login core.
//!
//! [`PageError`] is what the browser collaborator reports. [`AuthError`] is the
//! internal taxonomy of why an attempt ended without a session; every variant
//! collapses into an [`Outcome`] at the public boundary.

use thiserror::Error;

use crate::outcome::Outcome;

/// Result alias for collaborator operations.
pub type PageResult<T> = std::result::Result<T, PageError>;

/// Failure reported by the browser-control layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
	/// The page or its session is gone (closed tab, dead browser, lost connection).
	#[error("page unavailable: {0}")]
	Unavailable(String),

	/// A control was not present within the lookup timeout.
	#[error("element not found: {selector}")]
	ElementNotFound { selector: String },

	/// A command reached the page but did not complete.
	#[error("{command} failed: {message}")]
	Command { command: &'static str, message: String },
}

impl PageError {
	pub fn command(command: &'static str, message: impl Into<String>) -> Self {
		PageError::Command {
			command,
			message: message.into(),
		}
	}
}

/// Why an attempt ended without an authenticated session.
#[derive(Debug, Error)]
pub enum AuthError {
	/// Identifier or secret missing. No browser interaction happened.
	#[error("missing credentials: {0}")]
	Configuration(String),

	/// A login control could not be located or operated.
	#[error("login form interaction failed during {step}")]
	Interaction {
		step: &'static str,
		#[source]
		source: PageError,
	},

	/// The location could not be read while polling.
	#[error("session lost at check {check}")]
	SessionLost {
		check: u32,
		#[source]
		source: PageError,
	},

	/// The login surface was observed again after the grace window.
	#[error("credentials rejected: back on login surface at check {check} ({location})")]
	Rejected { check: u32, location: String },

	/// Every polling check was used without reaching a verdict.
	#[error("no verdict after {checks} checks")]
	BudgetExhausted { checks: u32 },
}

impl AuthError {
	/// Public outcome this error is reported as.
	pub fn outcome(&self) -> Outcome {
		match self {
			AuthError::BudgetExhausted { .. } => Outcome::TimedOut,
			AuthError::Configuration(_)
			| AuthError::Interaction { .. }
			| AuthError::SessionLost { .. }
			| AuthError::Rejected { .. } => Outcome::Failed,
		}
	}

	/// Stable machine-readable code, used in CLI output.
	pub fn code(&self) -> &'static str {
		match self {
			AuthError::Configuration(_) => "CONFIGURATION",
			AuthError::Interaction { .. } => "INTERACTION",
			AuthError::SessionLost { .. } => "SESSION_LOST",
			AuthError::Rejected { .. } => "REJECTED",
			AuthError::BudgetExhausted { .. } => "BUDGET_EXHAUSTED",
		}
	}
}
