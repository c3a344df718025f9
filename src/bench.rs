//! Hash timing benchmark over the generated file catalogue.
//!
//! For the selected algorithm, each existing catalogue file is hashed
//! three times in-process. Wall-clock time is measured around each run
//! with a monotonic clock and the arithmetic mean is reported to three
//! decimal places. Results go to the terminal and to a per-algorithm
//! log file that is truncated at the start of every run.

use crate::catalog::SizeEntry;
use crate::digest::{hash_file, HashAlgorithm};
use crate::utils::BenchLog;
use anyhow::{bail, Context, Result};
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};

pub const RUNS_PER_FILE: u32 = 3;

/// Prints the algorithm menu and reads one selection from stdin.
/// Invalid input is an error; the caller exits non-zero without
/// touching any log file.
pub fn prompt_algorithm() -> Result<HashAlgorithm> {
    println!("Select a hash algorithm:");
    println!("  1) MD5");
    println!("  2) SHA-1");
    println!("  3) SHA-256");
    print!("Enter choice (1/2/3): ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin()
        .lock()
        .read_line(&mut choice)
        .context("failed to read selection")?;

    let choice = choice.trim();
    match HashAlgorithm::from_menu_choice(choice) {
        Some(algo) => Ok(algo),
        None => bail!("invalid selection {:?}: expected 1, 2 or 3", choice),
    }
}

/// Runs the benchmark for one algorithm over the catalogue, in order.
/// Missing files are recorded as skips and processing continues.
pub fn run_bench(catalog: &[SizeEntry], dir: &Path, algo: HashAlgorithm) -> Result<()> {
    let log_path = dir.join(format!("hash_results_{}.log", algo.log_name()));
    let log = BenchLog::create(&log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;

    log.line(&format!(
        "{} benchmark started at {} ({} runs per file)",
        algo.log_name(),
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        RUNS_PER_FILE
    ))?;
    log.blank()?;

    for entry in catalog {
        let path = dir.join(entry.file_name());
        if !path.exists() {
            log.line(&format!(
                "{}: {} not found, skipping",
                entry.label,
                entry.file_name()
            ))?;
            log.blank()?;
            continue;
        }

        let mut samples = Vec::with_capacity(RUNS_PER_FILE as usize);
        for run in 1..=RUNS_PER_FILE {
            let started = Instant::now();
            let digest = hash_file(&path, algo)
                .with_context(|| format!("failed to hash {}", path.display()))?;
            let elapsed = started.elapsed();

            log.line(&format!(
                "{}: run {}/{} took {:.3}s ({} {})",
                entry.label,
                run,
                RUNS_PER_FILE,
                elapsed.as_secs_f64(),
                algo.log_name(),
                digest
            ))?;
            samples.push(elapsed);
        }

        log.line(&format!(
            "{}: average time {:.3}s",
            entry.label,
            average_secs(&samples)
        ))?;
        log.blank()?;
    }

    println!("Results written to {}", log_path.display());
    Ok(())
}

/// Arithmetic mean of the sampled durations, in seconds.
pub fn average_secs(samples: &[Duration]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(Duration::as_secs_f64).sum::<f64>() / samples.len() as f64
}
