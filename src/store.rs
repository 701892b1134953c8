//! Key-value store the ledger persists through.
//!
//! `FileStore` keeps every entry in one checksummed binary file so a hand
//! edited or truncated balance is detected instead of trusted.

use crate::utils::persistence::save_path;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Magic header of the store file ("REELKV" + format version).
pub const STORE_VERSION_MAGIC: u64 = 0x5245_454C_4B56_0001;

pub const LEDGER_FILE: &str = "ledger.dat";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("store encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("invalid store version: expected 0x{expected:016X}, got 0x{found:016X}")]
    Version { expected: u64, found: u64 },
    #[error("store checksum verification failed")]
    Checksum,
    #[error("store unavailable")]
    Unavailable,
}

impl StoreError {
    /// The file exists but its contents cannot be trusted.
    pub fn is_corruption(&self) -> bool {
        match self {
            StoreError::Version { .. } | StoreError::Checksum | StoreError::Encoding(_) => true,
            StoreError::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            StoreError::Unavailable => false,
        }
    }
}

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store; nothing survives the session.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single checksummed file.
///
/// File format:
/// - Version magic (8 bytes)
/// - Payload length (4 bytes)
/// - bincode-encoded `BTreeMap<String, String>` (variable length)
/// - SHA256 over magic + length + payload (32 bytes)
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at ~/.slots/ledger.dat.
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self {
            path: save_path(LEDGER_FILE)?,
        })
    }

    /// Store at an explicit path. The parent directory must exist.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let mut file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != STORE_VERSION_MAGIC {
            return Err(StoreError::Version {
                expected: STORE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(StoreError::Checksum);
        }

        Ok(bincode::deserialize(&data)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let data = bincode::serialize(entries)?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(STORE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.path)?;
        file.write_all(&STORE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            // A damaged file is replaced; any other failure leaves it untouched
            Err(e) if e.is_corruption() => {
                log::warn!("replacing damaged {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }
}
