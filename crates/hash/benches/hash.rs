// Copyright 2024-2025 Irreducible Inc.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use digest::Digest;
use rand::{RngCore, thread_rng};
use sha512t_hash::{ParallelDigest, Sha512_256};

fn bench_sha512_256(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-512/256");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("Sha512_256", |bench| {
		bench.iter(|| Sha512_256::init().chain_update(&data).finish())
	});

	group.bench_function("Sha512_256-RustCrypto", |bench| {
		bench.iter(|| <sha2::Sha512_256 as Digest>::digest(&data))
	});

	group.finish()
}

fn bench_sha512_256_short(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-512/256 short messages");

	// Typical size of a digest authentication input
	const N: usize = 96;
	let mut data = [0u8; N];
	thread_rng().fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("Sha512_256", |bench| {
		bench.iter(|| Sha512_256::init().chain_update(data).finish())
	});

	group.finish()
}

fn bench_sha512_256_parallel(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-512/256 parallel");

	const N_MESSAGES: usize = 1 << 10;
	const N: usize = 1 << 10;
	let mut rng = thread_rng();
	let messages = (0..N_MESSAGES)
		.map(|_| {
			let mut message = vec![0u8; N];
			rng.fill_bytes(&mut message);
			message
		})
		.collect::<Vec<_>>();
	let mut out = vec![digest::Output::<Sha512_256>::default(); N_MESSAGES];

	group.throughput(Throughput::Bytes((N_MESSAGES * N) as u64));
	group.bench_function("Sha512_256 ParallelDigest", |bench| {
		let hasher = <Sha512_256 as ParallelDigest>::new();
		bench.iter(|| {
			use rayon::prelude::*;
			hasher.digest(messages.par_iter(), &mut out)
		})
	});

	group.finish()
}

criterion_group!(hash, bench_sha512_256, bench_sha512_256_short, bench_sha512_256_parallel);
criterion_main!(hash);
