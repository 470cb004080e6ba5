// Copyright 2024 Irreducible Inc.

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

/// Read an unsigned integer from the environment variable.
///
/// Returns `None` when the variable is unset or does not hold a valid integer; the latter is
/// reported with a warning.
pub fn usize_env_var(name: &str) -> Option<usize> {
	let val = std::env::var(name).ok()?;
	match val.trim().parse::<usize>() {
		Ok(parsed) => Some(parsed),
		Err(err) => {
			tracing::warn!(%name, value = %val, %err, "ignoring invalid environment variable");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unset_variables() {
		assert!(!boolean_env_flag_set("MDSHA_TEST_SURELY_UNSET_FLAG"));
		assert_eq!(usize_env_var("MDSHA_TEST_SURELY_UNSET_NUMBER"), None);
	}

	#[test]
	fn test_usize_env_var_parses_and_ignores_garbage() {
		const NAME: &str = "MDSHA_TEST_USIZE_ENV_VAR";

		std::env::set_var(NAME, " 17 ");
		assert_eq!(usize_env_var(NAME), Some(17));

		std::env::set_var(NAME, "abc");
		assert_eq!(usize_env_var(NAME), None);

		std::env::set_var(NAME, "-3");
		assert_eq!(usize_env_var(NAME), None);

		std::env::remove_var(NAME);
	}
}
