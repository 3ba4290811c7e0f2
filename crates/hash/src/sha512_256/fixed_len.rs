// Copyright 2025 Irreducible Inc.

use std::cmp;

use super::{consts::DIGEST_LEN, context::Sha512_256};
use crate::hasher::{FixedLenHasher, HashError};

/// SHA-512/256 over a message of a length committed at construction time.
#[derive(Debug, Clone)]
pub struct Sha512_256FixedLen {
	inner: Sha512_256,
	committed: u64,
	received: u64,
}

impl Sha512_256FixedLen {
	/// Number of bytes still expected before the commitment is met.
	pub fn remaining(&self) -> u64 {
		self.committed.saturating_sub(self.received)
	}
}

impl FixedLenHasher for Sha512_256FixedLen {
	type Digest = [u8; DIGEST_LEN];

	fn new(msg_len: u64) -> Self {
		Self {
			inner: Sha512_256::init(),
			committed: msg_len,
			received: 0,
		}
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		let data = data.as_ref();
		let accepted = cmp::min(self.remaining(), data.len() as u64) as usize;
		self.inner.update(&data[..accepted]);
		self.received = self.received.saturating_add(data.len() as u64);
	}

	fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		FixedLenHasher::update(&mut self, data);
		self
	}

	fn finalize(self) -> Result<Self::Digest, HashError> {
		let Self {
			inner,
			committed,
			received,
		} = self;

		match received.cmp(&committed) {
			cmp::Ordering::Less => {
				tracing::debug!(committed, received, "message shorter than committed length");
				Err(HashError::NotEnoughData {
					committed,
					hashed: received,
				})
			}
			cmp::Ordering::Greater => {
				tracing::debug!(committed, received, "message longer than committed length");
				Err(HashError::TooMuchData {
					committed,
					received,
				})
			}
			cmp::Ordering::Equal => Ok(inner.finish()),
		}
	}

	fn reset(&mut self) {
		*self = Self::new(self.committed);
	}
}
