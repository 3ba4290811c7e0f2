// Copyright 2025 Irreducible Inc.

use seq_macro::seq;

use super::{
	BLOCK_LEN, STATE_LEN, big_sigma0, big_sigma1, ch, feed_forward, load_schedule, maj,
	schedule_word,
};
use crate::sha512_256::consts::K;

/// One round without moving the working variables.
///
/// The caller passes the variables in rotated order for the next round, so the value
/// accumulated in `$h` becomes the next round's `a` and `$d` becomes the next round's `e`.
/// For rounds `t >= 16` the schedule word is generated in place inside the rolling window.
macro_rules! round {
	($w:ident, $t:expr, $a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident) => {{
		const T: usize = $t;
		if T >= 16 {
			$w[T & 15] = schedule_word(&$w, T);
		}
		$h = $h
			.wrapping_add(big_sigma1($e))
			.wrapping_add(ch($e, $f, $g))
			.wrapping_add(K[T])
			.wrapping_add($w[T & 15]);
		$d = $d.wrapping_add($h);
		$h = $h.wrapping_add(big_sigma0($a)).wrapping_add(maj($a, $b, $c));
	}};
}

#[allow(clippy::erasing_op, clippy::identity_op)]
pub fn compress(state: &mut [u64; STATE_LEN], block: &[u8; BLOCK_LEN]) {
	let mut w = load_schedule(block);
	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

	// Eight rounds bring the roles back to their starting assignment.
	seq!(R in 0..10 {
		round!(w, R * 8, a, b, c, d, e, f, g, h);
		round!(w, R * 8 + 1, h, a, b, c, d, e, f, g);
		round!(w, R * 8 + 2, g, h, a, b, c, d, e, f);
		round!(w, R * 8 + 3, f, g, h, a, b, c, d, e);
		round!(w, R * 8 + 4, e, f, g, h, a, b, c, d);
		round!(w, R * 8 + 5, d, e, f, g, h, a, b, c);
		round!(w, R * 8 + 6, c, d, e, f, g, h, a, b);
		round!(w, R * 8 + 7, b, c, d, e, f, g, h, a);
	});

	feed_forward(state, [a, b, c, d, e, f, g, h]);
}
