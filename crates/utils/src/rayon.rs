// Copyright 2024-2025 Irreducible Inc.

use std::sync::OnceLock;

/// Configures the global rayon thread pool with `n_threads` threads, or leaves rayon's default
/// when `None`.
///
/// A single thread runs on the calling thread through `use_current_thread`, which keeps the
/// performance on par with not using rayon at all and the traces free of worker noise.
///
/// NOTE: rayon doesn't allow initializing the global thread pool several times, so only the
/// first call has an effect. The function returns a reference to the result because
/// `ThreadPoolBuildError` doesn't implement `Clone`.
pub fn adjust_thread_pool(
	n_threads: Option<usize>,
) -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| match n_threads {
		Some(1) => rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global(),
		Some(n) => rayon::ThreadPoolBuilder::new()
			.num_threads(n)
			.build_global(),
		None => Ok(()),
	})
}
