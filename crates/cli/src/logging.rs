use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

pub fn init_logging(verbosity: u8) {
	// 0 = warnings (checkpoint prompts, failed logins), CDP chatter silenced
	// 1 (-v) = login progress (info)
	// 2+ (-vv) = debug for signon, info for the browser driver
	let filter = match verbosity {
		0 => "warn,headless_chrome=off",
		1 => "info,headless_chrome=warn",
		_ => "debug,headless_chrome=info,tungstenite=warn",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.init();
}
