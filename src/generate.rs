//! Test file generation.
//!
//! Writes every catalogue entry as a `file_<label>.txt` of exactly the
//! declared length, filled with base64-encoded pseudo-random bytes. The
//! content is therefore ASCII, not raw random bytes.

use crate::catalog::SizeEntry;
use crate::utils::format_bytes;
use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::RngCore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Raw bytes drawn from the RNG per encoding round. Base64 turns every
// 3 input bytes into 4 output characters, so this encodes to 256KB.
const RAW_CHUNK: usize = 3 * 64 * 1024;

/// Generates all catalogue files into `dir`, overwriting existing ones.
pub fn run_generate(catalog: &[SizeEntry], dir: &Path) -> Result<()> {
    let total_bytes: u64 = catalog.iter().map(|e| e.bytes).sum();
    println!(
        "Generating {} test files ({})...",
        catalog.len(),
        format_bytes(total_bytes)
    );

    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg}\n[{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, ETA: {eta})")?
            .progress_chars("=>-"),
    );

    let mut rng = rand::thread_rng();
    for entry in catalog {
        let path = dir.join(entry.file_name());
        pb.set_message(format!("{} ({})", entry.file_name(), format_bytes(entry.bytes)));
        write_random_file(&path, entry.bytes, &mut rng, &pb)
            .with_context(|| format!("failed to generate {}", path.display()))?;
    }

    pb.finish_with_message(format!(
        "Generated {} files ({})",
        catalog.len(),
        format_bytes(total_bytes)
    ));
    Ok(())
}

/// Writes exactly `byte_count` bytes of base64-encoded random data to
/// `path`. An existing file is truncated first, so repeated generation
/// always converges on the declared length.
pub fn write_random_file<R: RngCore>(
    path: &Path,
    byte_count: u64,
    rng: &mut R,
    pb: &ProgressBar,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut raw = vec![0u8; RAW_CHUNK];
    let mut remaining = byte_count;

    while remaining > 0 {
        rng.fill_bytes(&mut raw);
        let encoded = STANDARD.encode(&raw);
        let take = remaining.min(encoded.len() as u64) as usize;
        writer.write_all(&encoded.as_bytes()[..take])?;
        remaining -= take as u64;
        pb.inc(take as u64);
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KB_SET;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;

    #[test]
    fn test_exact_file_length() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut rng = StdRng::seed_from_u64(42);
        let pb = ProgressBar::hidden();

        // 4KB entry from the catalogue plus an awkward non-multiple-of-4 length
        let path = dir.path().join(KB_SET[2].file_name());
        write_random_file(&path, KB_SET[2].bytes, &mut rng, &pb)?;
        assert_eq!(fs::metadata(&path)?.len(), 4096);

        let odd = dir.path().join("odd.txt");
        write_random_file(&odd, 1001, &mut rng, &pb)?;
        assert_eq!(fs::metadata(&odd)?.len(), 1001);
        Ok(())
    }

    #[test]
    fn test_overwrite_converges_on_declared_length() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut rng = StdRng::seed_from_u64(7);
        let pb = ProgressBar::hidden();
        let path = dir.path().join("file_1KB.txt");

        write_random_file(&path, 4096, &mut rng, &pb)?;
        write_random_file(&path, 1024, &mut rng, &pb)?;
        assert_eq!(fs::metadata(&path)?.len(), 1024);
        Ok(())
    }

    #[test]
    fn test_content_is_base64_ascii() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut rng = StdRng::seed_from_u64(3);
        let pb = ProgressBar::hidden();
        let path = dir.path().join("file_2KB.txt");

        write_random_file(&path, 2048, &mut rng, &pb)?;
        let content = fs::read(&path)?;
        assert!(content.iter().all(|b| {
            b.is_ascii_alphanumeric() || matches!(*b, b'+' | b'/' | b'=')
        }));
        Ok(())
    }

    #[test]
    fn test_run_generate_covers_catalog() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let small = &KB_SET[..3]; // 1KB, 2KB, 4KB

        run_generate(small, dir.path())?;

        for entry in small {
            let path = dir.path().join(entry.file_name());
            assert!(path.exists(), "{} missing", entry.label);
            assert_eq!(fs::metadata(&path)?.len(), entry.bytes);
        }
        Ok(())
    }
}
