//! Location markers and the matching rule shared by detection and polling.

use serde::{Deserialize, Serialize};

/// What a single observed location says about the login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
	/// Inside the authenticated area.
	Authenticated,
	/// A human-verification challenge is showing.
	Checkpoint,
	/// Back on (or still on) the login form.
	LoginSurface,
	/// Anything else, usually an intermediate redirect.
	Transitional,
}

/// Substrings that identify the interesting areas of the target site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Markers {
	/// Only reachable with a logged-in session.
	pub authenticated: String,
	/// Challenge page that needs a person at the keyboard.
	pub checkpoint: String,
	/// The login form itself.
	pub login: String,
}

impl Default for Markers {
	fn default() -> Self {
		Self {
			authenticated: "/feed".to_string(),
			checkpoint: "/checkpoint".to_string(),
			login: "/login".to_string(),
		}
	}
}

impl Markers {
	/// The success predicate. Both the fast path and the polling loop go
	/// through this method.
	pub fn is_authenticated(&self, location: &str) -> bool {
		location.contains(&self.authenticated)
	}

	/// Classifies `location`.
	///
	/// Precedence is authenticated, then checkpoint, then login surface, so a
	/// location carrying several markers at once resolves to the most
	/// positive reading.
	pub fn classify(&self, location: &str) -> Classification {
		if self.is_authenticated(location) {
			Classification::Authenticated
		} else if location.contains(&self.checkpoint) {
			Classification::Checkpoint
		} else if location.contains(&self.login) {
			Classification::LoginSurface
		} else {
			Classification::Transitional
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_default_markers() {
		let markers = Markers::default();
		let cases = [
			("https://www.linkedin.com/feed/", Classification::Authenticated),
			(
				"https://www.linkedin.com/checkpoint/challenge/AgF3",
				Classification::Checkpoint,
			),
			("https://www.linkedin.com/login", Classification::LoginSurface),
			(
				"https://www.linkedin.com/uas/login-submit",
				Classification::LoginSurface,
			),
			("https://www.linkedin.com/", Classification::Transitional),
			("about:blank", Classification::Transitional),
		];
		for (location, expected) in cases {
			assert_eq!(markers.classify(location), expected, "{location}");
		}
	}

	#[test]
	fn authenticated_wins_over_other_markers() {
		let markers = Markers::default();
		assert_eq!(
			markers.classify("https://example.com/checkpoint/done?next=/feed"),
			Classification::Authenticated
		);
		assert_eq!(
			markers.classify("https://example.com/login?redirect=/feed"),
			Classification::Authenticated
		);
	}

	#[test]
	fn checkpoint_wins_over_login() {
		let markers = Markers::default();
		assert_eq!(
			markers.classify("https://example.com/checkpoint/lg/login-submit"),
			Classification::Checkpoint
		);
	}

	#[test]
	fn custom_markers_deserialize_with_defaults() {
		let markers: Markers = serde_json::from_str(r#"{"authenticated": "/dashboard"}"#).unwrap();
		assert_eq!(markers.authenticated, "/dashboard");
		assert_eq!(markers.checkpoint, "/checkpoint");
		assert!(markers.is_authenticated("https://app.example.com/dashboard/home"));
		assert!(!markers.is_authenticated("https://app.example.com/feed"));
	}
}
