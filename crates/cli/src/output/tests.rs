use super::*;

fn login_data(outcome: Outcome, existing_session: bool, reason: Option<&str>) -> LoginData {
	LoginData {
		outcome,
		existing_session,
		checks: 4,
		max_checks: 25,
		login_url: "https://www.linkedin.com/login".into(),
		reason: reason.map(str::to_string),
		reason_code: reason.map(|_| "REJECTED".to_string()),
	}
}

#[test]
fn result_builder_success() {
	let result = ResultBuilder::new("login")
		.data(login_data(Outcome::Authenticated, false, None))
		.build();

	assert!(result.ok);
	assert_eq!(result.command, "login");
	assert_eq!(result.schema_version, Some(SCHEMA_VERSION));
	assert!(result.error.is_none());
	assert!(result.timings.is_some());
}

#[test]
fn failed_login_keeps_data_but_is_not_ok() {
	let result = ResultBuilder::new("login")
		.data(login_data(Outcome::Failed, false, Some("credentials rejected")))
		.error(ErrorCode::AuthFailed, "credentials rejected")
		.build();

	assert!(!result.ok);
	assert!(result.data.is_some());
	assert_eq!(result.error.as_ref().map(|e| e.code), Some(ErrorCode::AuthFailed));
}

#[test]
fn builder_without_data_is_not_ok() {
	let result: CommandResult<StatusData> = ResultBuilder::new("status").build();
	assert!(!result.ok);
}

#[test]
fn envelope_serializes_camel_case() {
	let result = ResultBuilder::new("login")
		.data(login_data(Outcome::TimedOut, false, Some("no verdict after 25 checks")))
		.error(ErrorCode::AuthTimedOut, "no verdict after 25 checks")
		.build();

	let json = serde_json::to_value(&result).unwrap();
	assert_eq!(json["ok"], false);
	assert_eq!(json["schemaVersion"], SCHEMA_VERSION);
	assert_eq!(json["data"]["outcome"], "timedOut");
	assert_eq!(json["data"]["existingSession"], false);
	assert_eq!(json["data"]["maxChecks"], 25);
	assert_eq!(json["data"]["reasonCode"], "REJECTED");
	assert_eq!(json["error"]["code"], "AUTH_TIMED_OUT");
	assert!(json["timings"]["durationMs"].is_u64());
}

#[test]
fn error_code_display_matches_serde() {
	for code in [
		ErrorCode::InvalidConfig,
		ErrorCode::BrowserLaunchFailed,
		ErrorCode::AuthTimedOut,
		ErrorCode::NotAuthenticated,
	] {
		let serialized = serde_json::to_value(code).unwrap();
		assert_eq!(serialized, code.to_string());
	}
}

#[test]
fn outcome_error_codes() {
	assert_eq!(ErrorCode::for_outcome(Outcome::Authenticated), None);
	assert_eq!(ErrorCode::for_outcome(Outcome::Failed), Some(ErrorCode::AuthFailed));
	assert_eq!(ErrorCode::for_outcome(Outcome::TimedOut), Some(ErrorCode::AuthTimedOut));
}

#[test]
fn login_summaries() {
	assert_eq!(
		login_data(Outcome::Authenticated, true, None).summary(),
		"already signed in (persistent profile)"
	);
	assert_eq!(
		login_data(Outcome::Authenticated, false, None).summary(),
		"signed in after 4 of 25 checks"
	);
	assert_eq!(
		login_data(Outcome::Failed, false, Some("credentials rejected")).summary(),
		"login failed: credentials rejected"
	);
	assert_eq!(login_data(Outcome::TimedOut, false, None).summary(), "login timed out");
}
