// Copyright 2025 Irreducible Inc.

//! The SHA-512 compression function, FIPS 180-4 section 6.4.2.
//!
//! Two evaluation strategies are provided. `unrolled` spells out all 80 rounds and rotates the
//! roles of the working variables through macro arguments; `looped` walks the round constant
//! table and shifts the working variables every round. Both produce identical results, the
//! `favor_small_code` feature trades speed for code size by selecting the loop.

use cfg_if::cfg_if;

use super::consts::{BLOCK_LEN, STATE_LEN};

#[cfg_attr(not(any(test, feature = "favor_small_code")), allow(dead_code))]
mod looped;
#[cfg_attr(all(not(test), feature = "favor_small_code"), allow(dead_code))]
mod unrolled;

cfg_if! {
	if #[cfg(feature = "favor_small_code")] {
		pub(crate) use looped::compress;
	} else {
		pub(crate) use unrolled::compress;
	}
}

/// Number of message schedule words kept alive during compression.
const SCHEDULE_WINDOW: usize = 16;

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
	z ^ (x & (y ^ z))
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
	(x & y) ^ (z & (x ^ y))
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
	x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
	x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
	x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
	x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// Decodes a block into the first 16 words of the message schedule.
///
/// Words are read big-endian from byte slices, so neither host byte order nor the alignment of
/// `block` matter.
#[inline(always)]
fn load_schedule(block: &[u8; BLOCK_LEN]) -> [u64; SCHEDULE_WINDOW] {
	let mut w = [0u64; SCHEDULE_WINDOW];
	for (word, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
		*word = u64::from_be_bytes(chunk.try_into().expect("chunk is 8 bytes"));
	}
	w
}

/// Computes `W[t]` for `16 <= t < 80` from the rolling window holding `W[t - 16..t]`.
///
/// `W[t - 16]` shares its slot with `W[t]`, so the result can be stored at `t & 15`.
#[inline(always)]
fn schedule_word(w: &[u64; SCHEDULE_WINDOW], t: usize) -> u64 {
	w[(t - 16) & 15]
		.wrapping_add(small_sigma1(w[(t - 2) & 15]))
		.wrapping_add(w[(t - 7) & 15])
		.wrapping_add(small_sigma0(w[(t - 15) & 15]))
}

#[inline(always)]
fn feed_forward(state: &mut [u64; STATE_LEN], working: [u64; STATE_LEN]) {
	for (h, v) in state.iter_mut().zip(working) {
		*h = h.wrapping_add(v);
	}
}
