// Copyright 2025 Irreducible Inc.

use std::{
	fs::{self, File},
	io::{self, Read},
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use sha512t_hash::{DIGEST_LEN, Sha512_256};
use sha512t_utils::tracing::init_tracing;

/// Print or check SHA-512/256 checksums.
#[derive(Debug, Parser)]
struct Args {
	/// Files to hash. Standard input is read when no file or `-` is given.
	files: Vec<PathBuf>,
	/// Read checksum lines from this file and verify them.
	#[arg(short, long, value_name = "FILE", conflicts_with = "files")]
	check: Option<PathBuf>,
	/// Don't print `OK` for each successfully verified file.
	#[arg(short, long, requires = "check")]
	quiet: bool,
}

const STDIN_NAME: &str = "-";

fn hash_reader(mut reader: impl Read) -> io::Result<[u8; DIGEST_LEN]> {
	let mut hasher = Sha512_256::init();
	io::copy(&mut reader, &mut hasher)?;
	Ok(hasher.finish())
}

fn hash_path(path: &Path) -> Result<[u8; DIGEST_LEN]> {
	if path.as_os_str() == STDIN_NAME {
		return hash_reader(io::stdin().lock()).context("failed to read standard input");
	}
	let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
	hash_reader(file).with_context(|| format!("failed to read {}", path.display()))
}

/// Parses a `<hex digest>  <name>` line. A `*` in front of the name marks binary mode and is
/// accepted for compatibility.
fn parse_checksum_line(line: &str) -> Result<([u8; DIGEST_LEN], &str)> {
	let (digest_hex, name) = line
		.split_once(' ')
		.context("expected `<digest>  <name>`")?;

	let mut digest = [0u8; DIGEST_LEN];
	hex::decode_to_slice(digest_hex, &mut digest)
		.with_context(|| format!("invalid SHA-512/256 digest {digest_hex:?}"))?;

	let name = name
		.strip_prefix(' ')
		.or_else(|| name.strip_prefix('*'))
		.context("expected `<digest>  <name>`")?;
	if name.is_empty() {
		bail!("missing file name");
	}
	Ok((digest, name))
}

fn print_checksums(files: &[PathBuf]) -> Result<()> {
	let stdin = [PathBuf::from(STDIN_NAME)];
	let files = if files.is_empty() { &stdin[..] } else { files };

	for path in files {
		let digest = hash_path(path)?;
		println!("{}  {}", hex::encode(digest), path.display());
	}
	Ok(())
}

/// Verifies every line of a checksum list, failing if any line is malformed or any digest does
/// not match.
fn verify_checksum_lines(contents: &str, quiet: bool) -> Result<()> {
	let mut n_checked = 0usize;
	let mut n_failed = 0usize;
	let mut n_malformed = 0usize;
	for (line_no, line) in contents.lines().enumerate() {
		if line.trim().is_empty() {
			continue;
		}

		let (expected, name) = match parse_checksum_line(line) {
			Ok(parsed) => parsed,
			Err(err) => {
				tracing::warn!(line = line_no + 1, "malformed checksum line: {err:#}");
				n_malformed += 1;
				continue;
			}
		};

		n_checked += 1;
		let ok = match hash_path(Path::new(name)) {
			Ok(actual) => actual == expected,
			Err(err) => {
				tracing::warn!("{err:#}");
				false
			}
		};
		if !ok {
			n_failed += 1;
			println!("{name}: FAILED");
		} else if !quiet {
			println!("{name}: OK");
		}
	}

	if n_failed > 0 {
		bail!("{n_failed} computed checksum(s) did NOT match");
	}
	if n_malformed > 0 {
		bail!("{n_malformed} line(s) are improperly formatted");
	}
	if n_checked == 0 {
		bail!("no checksum lines found");
	}
	Ok(())
}

fn verify_checksums(list: &Path, quiet: bool) -> Result<()> {
	let contents =
		fs::read_to_string(list).with_context(|| format!("failed to read {}", list.display()))?;
	verify_checksum_lines(&contents, quiet)
		.with_context(|| format!("checking {} failed", list.display()))
}

fn main() -> Result<()> {
	init_tracing();

	let args = Args::parse();

	match &args.check {
		Some(list) => verify_checksums(list, args.quiet),
		None => print_checksums(&args.files),
	}
}
