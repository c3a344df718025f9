use anyhow::Result;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Formats byte count in human-readable form (e.g., "1.5 GB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Per-algorithm results log. Truncated when created, so each benchmark
/// run starts from an empty file. Every informational line is echoed to
/// the terminal as well.
pub struct BenchLog {
    file_path: PathBuf,
}

impl BenchLog {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        File::create(&path)?;
        Ok(Self {
            file_path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Writes one informational line to both terminal and log file.
    pub fn line(&self, message: &str) -> Result<()> {
        println!("{}", message);
        let mut file = OpenOptions::new().append(true).open(&self.file_path)?;
        writeln!(file, "{}", message)?;
        Ok(())
    }

    /// Blank separator between file entries.
    pub fn blank(&self) -> Result<()> {
        println!();
        let mut file = OpenOptions::new().append(true).open(&self.file_path)?;
        writeln!(file)?;
        Ok(())
    }
}
