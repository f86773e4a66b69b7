use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::*;

#[test]
fn cli_definition_is_consistent() {
	Cli::command().debug_assert();
}

#[test]
fn parse_login_defaults() {
	let cli = Cli::try_parse_from(["signon", "login"]).unwrap();

	assert_eq!(cli.verbose, 0);
	assert_eq!(cli.format, OutputFormat::Text);
	assert_eq!(cli.config, None);
	match cli.command {
		Commands::Login(args) => {
			assert_eq!(args.browser.profile_dir, None);
			assert!(!args.browser.headless);
			assert_eq!(args.polling.max_checks, None);
			assert_eq!(args.polling.grace_checks, None);
		}
		_ => panic!("Expected Login command"),
	}
}

#[test]
fn parse_login_overrides() {
	let cli = Cli::try_parse_from([
		"signon",
		"login",
		"--profile-dir",
		"/tmp/profile",
		"--headless",
		"--chrome",
		"/usr/bin/chromium",
		"--max-checks",
		"10",
		"--grace-checks",
		"3",
		"--poll-interval-ms",
		"1500",
	])
	.unwrap();

	match cli.command {
		Commands::Login(args) => {
			assert_eq!(args.browser.profile_dir, Some(PathBuf::from("/tmp/profile")));
			assert!(args.browser.headless);
			assert_eq!(args.browser.chrome, Some(PathBuf::from("/usr/bin/chromium")));
			assert_eq!(args.polling.max_checks, Some(10));
			assert_eq!(args.polling.grace_checks, Some(3));
			assert_eq!(args.polling.poll_interval_ms, Some(1500));
		}
		_ => panic!("Expected Login command"),
	}
}

#[test]
fn global_flags_after_subcommand() {
	let cli = Cli::try_parse_from(["signon", "status", "-vv", "-f", "json", "--config", "/tmp/signon.json"]).unwrap();

	assert_eq!(cli.verbose, 2);
	assert_eq!(cli.format, OutputFormat::Json);
	assert_eq!(cli.config, Some(PathBuf::from("/tmp/signon.json")));
	assert!(matches!(cli.command, Commands::Status(_)));
}

#[test]
fn status_rejects_polling_flags() {
	assert!(Cli::try_parse_from(["signon", "status", "--max-checks", "3"]).is_err());
}

#[test]
fn negative_check_count_is_rejected() {
	assert!(Cli::try_parse_from(["signon", "login", "--max-checks", "-1"]).is_err());
}

#[test]
fn config_command_parses() {
	let cli = Cli::try_parse_from(["signon", "--format", "ndjson", "config"]).unwrap();
	assert_eq!(cli.format, OutputFormat::Ndjson);
	assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn missing_subcommand_is_an_error() {
	assert!(Cli::try_parse_from(["signon"]).is_err());
}
