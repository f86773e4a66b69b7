//! Login target description: where the form lives, how to fill it, how to
//! read the result, and how long to wait.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::markers::Markers;

/// Invalid [`LoginTarget`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("{field} must not be empty")]
	Empty { field: &'static str },

	#[error("timing.maxChecks must be at least 1")]
	NoChecks,

	#[error("timing.graceChecks ({grace}) must be smaller than timing.maxChecks ({max})")]
	GraceTooLong { grace: u32, max: u32 },
}

/// CSS selectors for the three login controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selectors {
	pub identifier: String,
	pub secret: String,
	pub submit: String,
}

impl Default for Selectors {
	fn default() -> Self {
		Self {
			identifier: r#"input[name="session_key"]"#.to_string(),
			secret: r#"input[name="session_password"]"#.to_string(),
			submit: r#"button[type="submit"]"#.to_string(),
		}
	}
}

/// Delays and budgets for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timing {
	/// Pause after each field is filled, before touching the next control.
	pub settle_ms: u64,
	/// Sleep before every polling check.
	pub poll_interval_ms: u64,
	/// Total polling checks per attempt.
	pub max_checks: u32,
	/// Checks during which landing on the login surface is not yet a rejection.
	pub grace_checks: u32,
}

impl Default for Timing {
	fn default() -> Self {
		Self {
			settle_ms: 400,
			poll_interval_ms: 3_000,
			max_checks: 25,
			grace_checks: 5,
		}
	}
}

impl Timing {
	/// Zero delays with the given budget. Mostly useful for tests.
	pub fn immediate(max_checks: u32, grace_checks: u32) -> Self {
		Self {
			settle_ms: 0,
			poll_interval_ms: 0,
			max_checks,
			grace_checks,
		}
	}

	pub fn settle(&self) -> Duration {
		Duration::from_millis(self.settle_ms)
	}

	pub fn poll_interval(&self) -> Duration {
		Duration::from_millis(self.poll_interval_ms)
	}

	/// Upper bound on time spent polling, ignoring command latency.
	pub fn polling_budget(&self) -> Duration {
		self.poll_interval() * self.max_checks
	}
}

/// Everything the orchestrator needs to know about the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginTarget {
	/// The login form.
	pub login_url: String,
	/// A page inside the authenticated area, used for status checks.
	pub landing_url: String,
	pub selectors: Selectors,
	pub markers: Markers,
	pub timing: Timing,
}

impl Default for LoginTarget {
	fn default() -> Self {
		Self {
			login_url: "https://www.linkedin.com/login".to_string(),
			landing_url: "https://www.linkedin.com/feed/".to_string(),
			selectors: Selectors::default(),
			markers: Markers::default(),
			timing: Timing::default(),
		}
	}
}

impl LoginTarget {
	pub fn validate(&self) -> Result<(), ConfigError> {
		let required = [
			("loginUrl", &self.login_url),
			("landingUrl", &self.landing_url),
			("selectors.identifier", &self.selectors.identifier),
			("selectors.secret", &self.selectors.secret),
			("selectors.submit", &self.selectors.submit),
			("markers.authenticated", &self.markers.authenticated),
			("markers.checkpoint", &self.markers.checkpoint),
			("markers.login", &self.markers.login),
		];
		if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
			return Err(ConfigError::Empty { field: *field });
		}

		let Timing {
			max_checks,
			grace_checks,
			..
		} = self.timing;
		if max_checks == 0 {
			return Err(ConfigError::NoChecks);
		}
		if grace_checks >= max_checks {
			return Err(ConfigError::GraceTooLong {
				grace: grace_checks,
				max: max_checks,
			});
		}
		Ok(())
	}
}
