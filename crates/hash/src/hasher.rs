// Copyright 2023-2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
	#[error("Not enough data to finalize hash (expected {committed} bytes, hashed {hashed} bytes)")]
	NotEnoughData { committed: u64, hashed: u64 },
	#[error("Too much data to hash (expected {committed} bytes, received {received} bytes)")]
	TooMuchData { committed: u64, received: u64 },
}

/// Trait representing a hash function over a message whose length is committed up front.
///
/// This is the shape of hashing a body whose size was announced before the data arrives, e.g.
/// through a `Content-Length` header. The `[FixedLenHasher::finalize]` will fail if the amount
/// of data the hasher is updated with does not match the committed length. Data beyond the
/// committed length is counted but never hashed.
///
/// This interface is otherwise similar to [`digest::Digest`].
pub trait FixedLenHasher
where
	Self: Sized,
{
	/// The hash function output type.
	type Digest;

	/// Constructor.
	///
	/// `msg_len` is the total number of bytes to be hashed.
	fn new(msg_len: u64) -> Self;
	fn update(&mut self, data: impl AsRef<[u8]>);
	fn chain_update(self, data: impl AsRef<[u8]>) -> Self;
	fn finalize(self) -> Result<Self::Digest, HashError>;

	/// Resets with length initialized to the current context
	fn reset(&mut self);
}

pub fn fixed_len_hash<H: FixedLenHasher>(data: impl AsRef<[u8]>) -> Result<H::Digest, HashError> {
	H::new(data.as_ref().len() as u64)
		.chain_update(data)
		.finalize()
}
