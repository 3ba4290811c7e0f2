// Copyright 2024-2025 Irreducible Inc.

pub mod env;
pub mod rayon;
pub mod tracing;
