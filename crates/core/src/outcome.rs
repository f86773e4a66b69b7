use serde::{Deserialize, Serialize};

/// Terminal result of one login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
	/// The page reached the authenticated area.
	Authenticated,
	/// The attempt ended and no session exists.
	Failed,
	/// The polling budget ran out without a verdict.
	TimedOut,
}

impl Outcome {
	pub fn is_authenticated(self) -> bool {
		matches!(self, Outcome::Authenticated)
	}
}

impl std::fmt::Display for Outcome {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Outcome::Authenticated => write!(f, "authenticated"),
			Outcome::Failed => write!(f, "failed"),
			Outcome::TimedOut => write!(f, "timed out"),
		}
	}
}
