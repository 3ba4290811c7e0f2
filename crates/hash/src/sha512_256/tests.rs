// Copyright 2025 Irreducible Inc.

use digest::Digest;
use proptest::prelude::*;
use sha2::Sha512_256 as ReferenceSha512_256;

use super::{BLOCK_LEN, Sha512_256};

fn reference_digest(input: &[u8]) -> [u8; 32] {
	ReferenceSha512_256::digest(input).into()
}

/// Splits `input` at the given cut points, which may be unsorted and out of range.
fn split_at_cuts<'a>(input: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
	let mut cuts = cuts
		.iter()
		.map(|&cut| cut % (input.len() + 1))
		.collect::<Vec<_>>();
	cuts.sort_unstable();

	let mut chunks = Vec::with_capacity(cuts.len() + 1);
	let mut start = 0;
	for cut in cuts {
		chunks.push(&input[start..cut]);
		start = cut;
	}
	chunks.push(&input[start..]);
	chunks
}

proptest! {
	#[test]
	fn test_sha512_256_vs_reference(
		input in prop::collection::vec(any::<u8>(), 0..=4 * BLOCK_LEN + 17),
	) {
		prop_assert_eq!(
			Sha512_256::init().chain_update(&input).finish(),
			reference_digest(&input)
		);
	}

	#[test]
	fn test_chunking_invariance(
		input in prop::collection::vec(any::<u8>(), 0..=3 * BLOCK_LEN),
		cuts in prop::collection::vec(any::<usize>(), 0..8),
	) {
		let whole = Sha512_256::init().chain_update(&input).finish();

		let mut chunked = Sha512_256::init();
		for chunk in split_at_cuts(&input, &cuts) {
			chunked.update(chunk);
		}
		prop_assert_eq!(chunked.finish(), whole);
	}

	#[test]
	fn test_context_isolation(
		a in prop::collection::vec(any::<u8>(), 0..=2 * BLOCK_LEN),
		b in prop::collection::vec(any::<u8>(), 0..=2 * BLOCK_LEN),
		chunk_len in 1usize..=BLOCK_LEN + 1,
	) {
		let mut ctx_a = Sha512_256::init();
		let mut ctx_b = Sha512_256::init();
		let mut chunks_a = a.chunks(chunk_len);
		let mut chunks_b = b.chunks(chunk_len);
		loop {
			let next_a = chunks_a.next();
			let next_b = chunks_b.next();
			if next_a.is_none() && next_b.is_none() {
				break;
			}
			if let Some(chunk) = next_a {
				ctx_a.update(chunk);
			}
			if let Some(chunk) = next_b {
				ctx_b.update(chunk);
			}
		}

		prop_assert_eq!(ctx_a.finish(), super::sha512_256(&a));
		prop_assert_eq!(ctx_b.finish(), super::sha512_256(&b));
	}
}

#[test]
fn test_padding_boundaries_vs_reference() {
	for len in [0, 1, 110, 111, 112, 113, 119, 120, 126, 127, 128, 129, 239, 240, 255, 256, 257] {
		let input = (0..len).map(|i| (i * 7 + 3) as u8).collect::<Vec<_>>();
		assert_eq!(
			super::sha512_256(&input),
			reference_digest(&input),
			"length {len}"
		);
	}
}

#[test]
fn test_byte_at_a_time_vs_reference() {
	let input = (0..3 * BLOCK_LEN + 1).map(|i| i as u8).collect::<Vec<_>>();
	let mut ctx = Sha512_256::init();
	for byte in &input {
		ctx.update(std::slice::from_ref(byte));
	}
	assert_eq!(ctx.finish(), reference_digest(&input));
}

#[test]
fn test_digest_trait_vs_reference() {
	let input = b"message digest";
	assert_eq!(<Sha512_256 as Digest>::digest(input), ReferenceSha512_256::digest(input));
}
