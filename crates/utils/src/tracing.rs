// Copyright 2023-2025 Irreducible Inc.

use tracing_subscriber::{
	EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::env::{LOG_SPANS_ENV, boolean_env_flag_set};

/// Installs the global tracing subscriber.
///
/// Verbosity follows `RUST_LOG` and defaults to `warn`. Setting `SHA512T_LOG_SPANS` adds an
/// event with the busy and idle time of every span when it closes. Calling this more than once
/// keeps the first subscriber.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let span_events = if boolean_env_flag_set(LOG_SPANS_ENV) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_span_events(span_events),
		)
		.try_init();
}
