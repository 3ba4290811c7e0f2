// Copyright 2025 Irreducible Inc.

//! SHA-512/256: the SHA-512 compression function with its own initial hash value and the
//! output truncated to the leftmost 256 bits.

mod compress;
mod consts;
mod context;
mod fixed_len;

#[cfg(test)]
mod tests;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use context::*;
pub use fixed_len::*;
