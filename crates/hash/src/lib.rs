// Copyright 2023-2025 Irreducible Inc.

//! Streaming SHA-512/256 as specified in FIPS PUB 180-4.

pub mod hasher;
pub mod parallel_digest;
pub mod sha512_256;

pub use digest::{self, Digest};
pub use hasher::*;
pub use parallel_digest::ParallelDigest;
pub use sha512_256::*;
