// Copyright 2024-2025 Irreducible Inc.

/// Environment variable enabling span close events in the log output.
pub const LOG_SPANS_ENV: &str = "SHA512T_LOG_SPANS";

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => parse_boolean_flag(&val),
		Err(_) => false,
	}
}

fn parse_boolean_flag(val: &str) -> bool {
	["1", "on", "true", "yes"]
		.iter()
		.any(|accepted| val.eq_ignore_ascii_case(accepted))
}
