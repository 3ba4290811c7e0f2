// Copyright 2025 Irreducible Inc.

use std::{cmp, fmt, io};

use digest::{
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
	consts::{U32, U128},
	core_api::BlockSizeUser,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{
	compress::compress,
	consts::{BLOCK_LEN, DIGEST_LEN, IV, LEN_FIELD_LEN, PADDING_START, STATE_LEN},
};

/// Largest message length in bytes whose length in bits still fits the 128-bit length field.
const MAX_MESSAGE_LEN: u128 = u128::MAX >> 3;

/// Streaming SHA-512/256 context, FIPS 180-4 section 6.7.
///
/// A context is created with [`Sha512_256::init`], fed with any number of
/// [`Sha512_256::update`] calls and consumed by [`Sha512_256::finish`]. The chaining state is
/// never exposed before finalization and every byte of the context is zeroed once the digest has
/// been extracted, as well as whenever a context is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha512_256 {
	state: [u64; STATE_LEN],
	/// Pending input. Only the first `count % BLOCK_LEN` bytes are meaningful, a full block is
	/// always compressed before `update` returns.
	buffer: [u8; BLOCK_LEN],
	/// Total number of bytes absorbed so far.
	count: u128,
}

impl Sha512_256 {
	/// Creates a context holding the SHA-512/256 initial hash value and no data.
	pub const fn init() -> Self {
		Self {
			state: IV,
			buffer: [0; BLOCK_LEN],
			count: 0,
		}
	}

	/// Absorbs `data`. Splitting a message over several calls does not change the digest.
	///
	/// # Panics
	/// Panics if the total message length in bits no longer fits into 128 bits.
	pub fn update(&mut self, data: impl AsRef<[u8]>) {
		self.absorb(data.as_ref());
	}

	/// Absorbs `data` in a chained manner.
	#[must_use]
	pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		self.absorb(data.as_ref());
		self
	}

	/// Pads the message, returns the digest and consumes the context.
	pub fn finish(mut self) -> [u8; DIGEST_LEN] {
		let mut out = [0; DIGEST_LEN];
		self.finish_into(&mut out);
		out
	}

	#[inline]
	fn buffered_len(&self) -> usize {
		(self.count % BLOCK_LEN as u128) as usize
	}

	fn absorb(&mut self, mut data: &[u8]) {
		if data.is_empty() {
			return;
		}

		let filled = self.buffered_len();
		self.count = self
			.count
			.checked_add(data.len() as u128)
			.filter(|&count| count <= MAX_MESSAGE_LEN)
			.expect("Overflow on message length");

		if filled != 0 {
			let to_copy = cmp::min(data.len(), BLOCK_LEN - filled);
			self.buffer[filled..filled + to_copy].copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];

			if filled + to_copy < BLOCK_LEN {
				return;
			}
			compress(&mut self.state, &self.buffer);
		}

		// Whole blocks are compressed straight from the input without staging them in the buffer.
		let mut blocks = data.chunks_exact(BLOCK_LEN);
		for block in &mut blocks {
			compress(&mut self.state, block.try_into().expect("chunk is 128 bytes"));
		}

		let remaining = blocks.remainder();
		self.buffer[..remaining.len()].copy_from_slice(remaining);
	}

	/// Finalizes the digest into `out` and zeroes the whole context.
	///
	/// The context must be re-initialized before it is used again.
	fn finish_into(&mut self, out: &mut [u8; DIGEST_LEN]) {
		let bit_len = self.count << 3;
		let mut filled = self.buffered_len();

		// There is always room for at least one byte, see `buffer`.
		self.buffer[filled] = PADDING_START;
		filled += 1;

		if BLOCK_LEN - filled < LEN_FIELD_LEN {
			self.buffer[filled..].fill(0);
			compress(&mut self.state, &self.buffer);
			filled = 0;
		}

		self.buffer[filled..BLOCK_LEN - LEN_FIELD_LEN].fill(0);
		self.buffer[BLOCK_LEN - LEN_FIELD_LEN..].copy_from_slice(&bit_len.to_be_bytes());
		compress(&mut self.state, &self.buffer);

		// SHA-512/256 keeps only the leftmost four words of the final state.
		for (chunk, word) in out.chunks_exact_mut(8).zip(&self.state) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}

		self.zeroize();
	}
}

impl Default for Sha512_256 {
	fn default() -> Self {
		Self::init()
	}
}

impl fmt::Debug for Sha512_256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha512_256 { ... }")
	}
}

impl HashMarker for Sha512_256 {}

impl Update for Sha512_256 {
	fn update(&mut self, data: &[u8]) {
		self.absorb(data);
	}
}

impl OutputSizeUser for Sha512_256 {
	type OutputSize = U32;
}

impl BlockSizeUser for Sha512_256 {
	type BlockSize = U128;
}

impl FixedOutput for Sha512_256 {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		let mut digest = [0; DIGEST_LEN];
		self.finish_into(&mut digest);
		out.copy_from_slice(&digest);
	}
}

impl Reset for Sha512_256 {
	fn reset(&mut self) {
		*self = Self::init();
	}
}

impl FixedOutputReset for Sha512_256 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		let mut digest = [0; DIGEST_LEN];
		self.finish_into(&mut digest);
		out.copy_from_slice(&digest);
		Reset::reset(self);
	}
}

impl io::Write for Sha512_256 {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.absorb(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Computes the SHA-512/256 digest of `data` in one call.
pub fn sha512_256(data: impl AsRef<[u8]>) -> [u8; DIGEST_LEN] {
	Sha512_256::init().chain_update(data).finish()
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	fn assert_zeroed(ctx: &Sha512_256) {
		assert_eq!(ctx.state, [0; STATE_LEN]);
		assert_eq!(ctx.buffer, [0; BLOCK_LEN]);
		assert_eq!(ctx.count, 0);
	}

	#[test]
	fn test_init_state() {
		let ctx = Sha512_256::init();
		assert_eq!(ctx.state, IV);
		assert_eq!(ctx.count, 0);
		assert_eq!(ctx.buffered_len(), 0);
	}

	#[test]
	fn test_empty_update_is_noop() {
		let mut ctx = Sha512_256::init();
		ctx.update(b"");
		assert_eq!(ctx.state, IV);
		assert_eq!(ctx.count, 0);
		assert_eq!(
			ctx.finish(),
			hex!("c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a")
		);
	}

	#[test]
	fn test_buffer_never_holds_full_block() {
		let mut ctx = Sha512_256::init();
		ctx.update([0x61u8; BLOCK_LEN - 1]);
		assert_eq!(ctx.buffered_len(), BLOCK_LEN - 1);
		assert_eq!(ctx.state, IV);

		ctx.update([0x61u8]);
		assert_eq!(ctx.buffered_len(), 0);
		assert_ne!(ctx.state, IV);

		ctx.update([0x61u8; 3 * BLOCK_LEN + 5]);
		assert_eq!(ctx.buffered_len(), 5);
		assert_eq!(ctx.count, 4 * BLOCK_LEN as u128 + 5);
	}

	#[test]
	fn test_finish_zeroes_context() {
		let mut ctx = Sha512_256::init();
		ctx.update(b"user:realm:correct horse battery staple");
		assert_ne!(ctx.buffer, [0; BLOCK_LEN]);

		let mut out = [0; DIGEST_LEN];
		ctx.finish_into(&mut out);
		assert_zeroed(&ctx);
		assert_ne!(out, [0; DIGEST_LEN]);
	}

	#[test]
	fn test_finish_zeroes_context_after_extra_block() {
		// 120 buffered bytes leave no room for the length field, so padding spills over.
		let mut ctx = Sha512_256::init();
		ctx.update([0xa5u8; 120]);

		let mut out = [0; DIGEST_LEN];
		ctx.finish_into(&mut out);
		assert_zeroed(&ctx);
	}

	#[test]
	fn test_finalize_reset_restarts() {
		let mut ctx = Sha512_256::init();
		ctx.update(b"abc");
		let first = FixedOutputReset::finalize_fixed_reset(&mut ctx);
		assert_eq!(ctx.state, IV);
		assert_eq!(ctx.count, 0);

		ctx.update(b"abc");
		assert_eq!(first.as_slice(), &ctx.finish()[..]);
	}

	#[test]
	fn test_io_write() {
		let mut ctx = Sha512_256::init();
		let mut reader: &[u8] = b"abc";
		io::copy(&mut reader, &mut ctx).unwrap();
		assert_eq!(ctx.finish(), sha512_256(b"abc"));
	}

	#[test]
	fn test_debug_hides_state() {
		let ctx = Sha512_256::init().chain_update(b"secret");
		assert_eq!(format!("{ctx:?}"), "Sha512_256 { ... }");
	}

	#[test]
	#[should_panic(expected = "Overflow on message length")]
	fn test_length_field_overflow() {
		let mut ctx = Sha512_256::init();
		ctx.count = MAX_MESSAGE_LEN;
		ctx.update([0u8]);
	}
}
