//! Login credentials handed to the orchestrator.

use std::fmt;

/// Identifier and secret for one attempt.
///
/// Neither field ever appears in `Debug` output, so a `Credentials` value can
/// sit inside structs that get logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	identifier: String,
	secret: String,
}

impl Credentials {
	pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
		Self {
			identifier: identifier.into(),
			secret: secret.into(),
		}
	}

	/// Builds credentials from two environment variables.
	///
	/// Unset or non-unicode variables become empty fields, which the
	/// orchestrator reports as a configuration failure.
	pub fn from_env(identifier_var: &str, secret_var: &str) -> Self {
		let read = |name: &str| std::env::var(name).unwrap_or_default();
		Self::new(read(identifier_var), read(secret_var))
	}

	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	pub fn secret(&self) -> &str {
		&self.secret
	}

	/// Names the first missing field, if any.
	pub fn missing_field(&self) -> Option<&'static str> {
		if self.identifier.is_empty() {
			Some("identifier")
		} else if self.secret.is_empty() {
			Some("secret")
		} else {
			None
		}
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let redact = |value: &str| if value.is_empty() { "<empty>" } else { "<redacted>" };
		f.debug_struct("Credentials")
			.field("identifier", &redact(&self.identifier))
			.field("secret", &redact(&self.secret))
			.finish()
	}
}
