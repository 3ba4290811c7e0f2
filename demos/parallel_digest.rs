// Copyright 2025 Irreducible Inc.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use bytesize::ByteSize;
use clap::{Parser, value_parser};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use rayon::iter::IntoParallelRefIterator;
use sha512t_hash::{ParallelDigest, Sha512_256, digest::Output};
use sha512t_utils::{rayon::adjust_thread_pool, tracing::init_tracing};

#[derive(Debug, Parser)]
struct Args {
	/// The number of independent messages to hash.
	#[arg(short, long, default_value_t = 4096, value_parser = value_parser!(u32).range(1..))]
	n_messages: u32,
	/// The length of every message in bytes.
	#[arg(short, long, default_value_t = 4096)]
	message_len: usize,
	/// The number of worker threads, rayon's default when omitted.
	#[arg(long, value_parser = value_parser!(u32).range(1..))]
	threads: Option<u32>,
	/// Seed of the message generator.
	#[arg(long, default_value_t = 0)]
	seed: u64,
}

fn throughput(total: u64, elapsed: Duration) -> ByteSize {
	ByteSize::b((total as f64 / elapsed.as_secs_f64().max(f64::EPSILON)) as u64)
}

fn total_len(n_messages: usize, message_len: usize) -> Result<u64> {
	let total = n_messages
		.checked_mul(message_len)
		.context("total size overflows")?;
	Ok(total as u64)
}

fn main() -> Result<()> {
	let args = Args::parse();

	init_tracing();
	if let Err(err) = adjust_thread_pool(args.threads.map(|n| n as usize)) {
		anyhow::bail!("failed to init thread pool: {err}");
	}

	let n_messages = args.n_messages as usize;
	let total_len = total_len(n_messages, args.message_len)?;
	println!("Hashing {n_messages} messages of {} each", ByteSize::b(args.message_len as u64));

	let gen_scope = tracing::info_span!("Generating messages", n_messages).entered();
	let mut rng = StdRng::seed_from_u64(args.seed);
	let messages = (0..n_messages)
		.map(|_| {
			let mut message = vec![0u8; args.message_len];
			rng.fill_bytes(&mut message);
			message
		})
		.collect::<Vec<_>>();
	drop(gen_scope);

	let start = Instant::now();
	let serial = messages
		.iter()
		.map(|message| Sha512_256::init().chain_update(message).finish())
		.collect::<Vec<_>>();
	let serial_elapsed = start.elapsed();

	let mut parallel = vec![Output::<Sha512_256>::default(); n_messages];
	let start = Instant::now();
	<Sha512_256 as ParallelDigest>::new().digest(messages.par_iter(), &mut parallel);
	let parallel_elapsed = start.elapsed();

	let mismatches = serial
		.iter()
		.zip(&parallel)
		.filter(|(serial, parallel)| serial.as_slice() != parallel.as_slice())
		.count();
	ensure!(mismatches == 0, "{mismatches} parallel digests differ from the serial ones");

	println!(
		"Serial:   {serial_elapsed:?} ({}/s)",
		throughput(total_len, serial_elapsed)
	);
	println!(
		"Parallel: {parallel_elapsed:?} ({}/s) on {} threads",
		throughput(total_len, parallel_elapsed),
		rayon::current_num_threads()
	);

	Ok(())
}
