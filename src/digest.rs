//! In-process digest computation for the three supported algorithms.

use anyhow::Result;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const BLOCK_SIZE: usize = 5 * 1024 * 1024; // 5MB read blocks

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// Maps a trimmed interactive menu choice to an algorithm.
    /// Anything other than "1", "2" or "3" is an invalid selection.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(HashAlgorithm::Md5),
            "2" => Some(HashAlgorithm::Sha1),
            "3" => Some(HashAlgorithm::Sha256),
            _ => None,
        }
    }

    /// Display name used in log lines and the results file name.
    pub fn log_name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
        }
    }

    pub fn hasher(&self) -> Box<dyn DynDigest> {
        match self {
            HashAlgorithm::Md5 => Box::new(Md5Wrapper(Md5::new())),
            HashAlgorithm::Sha1 => Box::new(Sha1Wrapper(Sha1::new())),
            HashAlgorithm::Sha256 => Box::new(Sha256Wrapper(Sha256::new())),
        }
    }
}

pub trait DynDigest {
    fn update(&mut self, data: &[u8]);
    fn finalize_hex(&self) -> String;
}

struct Md5Wrapper(Md5);
impl DynDigest for Md5Wrapper {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
    fn finalize_hex(&self) -> String {
        hex::encode(self.0.clone().finalize())
    }
}

struct Sha1Wrapper(Sha1);
impl DynDigest for Sha1Wrapper {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
    fn finalize_hex(&self) -> String {
        hex::encode(self.0.clone().finalize())
    }
}

struct Sha256Wrapper(Sha256);
impl DynDigest for Sha256Wrapper {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
    fn finalize_hex(&self) -> String {
        hex::encode(self.0.clone().finalize())
    }
}

/// Streams a file through the selected digest and returns the hex digest.
/// Read errors surface to the caller; there is no silent zero-length result.
pub fn hash_file(path: &Path, algo: HashAlgorithm) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = algo.hasher();
    let mut buffer = vec![0u8; BLOCK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize_hex())
}
