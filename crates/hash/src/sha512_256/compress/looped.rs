// Copyright 2025 Irreducible Inc.

use super::{
	BLOCK_LEN, STATE_LEN, big_sigma0, big_sigma1, ch, feed_forward, load_schedule, maj,
	schedule_word,
};
use crate::sha512_256::consts::K;

pub fn compress(state: &mut [u64; STATE_LEN], block: &[u8; BLOCK_LEN]) {
	let mut w = load_schedule(block);
	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

	for (t, &k) in K.iter().enumerate() {
		if t >= 16 {
			w[t & 15] = schedule_word(&w, t);
		}
		let t1 = h
			.wrapping_add(big_sigma1(e))
			.wrapping_add(ch(e, f, g))
			.wrapping_add(k)
			.wrapping_add(w[t & 15]);
		let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	feed_forward(state, [a, b, c, d, e, f, g, h]);
}
