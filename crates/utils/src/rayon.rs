// Copyright 2024 Irreducible Inc.

use std::{env, sync::OnceLock};

use crate::env::{boolean_env_flag_set, usize_env_var};

/// Environment flag that forces batch hashing onto the calling thread.
pub const SEQUENTIAL_FLAG: &str = "MDSHA_SEQUENTIAL";

/// Environment variable holding the smallest batch that is worth spreading over the pool.
pub const PARALLEL_THRESHOLD_VAR: &str = "MDSHA_PARALLEL_THRESHOLD";

const DEFAULT_PARALLEL_THRESHOLD: usize = 2;

/// In case when number of threads is set to 1, use rayon thread pool with
/// `use_current_thread` set to true, so that single-threaded runs behave as if rayon wasn't
/// used at all and traces stay on one thread.
///
/// NOTE: rayon doesn't allow initializing global thread pool several times, so
/// in case when it was initialized before this function returns an error.
/// The function returns reference to the result because `ThreadPoolBuildError`
/// doesn't implement `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// `rayon::current_num_threads` would initialize the global pool, so read the variable.
		match env::var("RAYON_NUM_THREADS") {
			Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global(),
			_ => Ok(()),
		}
	})
}

/// Decides whether a batch of `batch_len` independent jobs should run on the rayon pool.
///
/// An unparsable `MDSHA_PARALLEL_THRESHOLD` is treated as unset.
pub fn should_parallelize(batch_len: usize) -> bool {
	if boolean_env_flag_set(SEQUENTIAL_FLAG) {
		return false;
	}
	let threshold = usize_env_var(PARALLEL_THRESHOLD_VAR).unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
	batch_len >= threshold.max(2) && rayon::current_num_threads() > 1
}
