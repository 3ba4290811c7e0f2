// Copyright 2024-2025 Irreducible Inc.

use digest::{Digest, Output};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use tracing::instrument;

/// An object that computes the digests of many independent messages in parallel.
///
/// Every message is hashed by its own clone of the hasher, so a hasher created with
/// [`ParallelDigest::new_with_prefix`] hashes `prefix || message` for each message.
pub trait ParallelDigest: Send + Sync {
	/// The corresponding non-parallelized hash function.
	type Digest: Digest + Send;

	/// Create new hasher instance with empty state.
	fn new() -> Self;

	/// Create new hasher instance which has processed the provided data.
	fn new_with_prefix(data: impl AsRef<[u8]>) -> Self;

	/// Calculate the digests of the messages yielded by `source`, writing the digest of the
	/// `i`-th message into `out[i]`.
	///
	/// # Panics
	/// Panics if `source` and `out` have different lengths.
	fn digest(
		&self,
		source: impl IndexedParallelIterator<Item: AsRef<[u8]>>,
		out: &mut [Output<Self::Digest>],
	);
}

impl<D: Digest + Send + Sync + Clone> ParallelDigest for D {
	type Digest = D;

	fn new() -> Self {
		Digest::new()
	}

	fn new_with_prefix(data: impl AsRef<[u8]>) -> Self {
		Digest::new_with_prefix(data)
	}

	#[instrument(skip_all, name = "ParallelDigest::digest", level = "debug", fields(n_messages = out.len()))]
	fn digest(
		&self,
		source: impl IndexedParallelIterator<Item: AsRef<[u8]>>,
		out: &mut [Output<Self::Digest>],
	) {
		assert_eq!(source.len(), out.len(), "one output slot is required per message");

		source.zip(out.par_iter_mut()).for_each(|(data, out)| {
			let mut hasher = self.clone();
			Digest::update(&mut hasher, data);
			*out = hasher.finalize();
		});
	}
}
