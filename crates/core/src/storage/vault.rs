//! Encrypted vault container for a [`Ledger`].
//!
//! Flow: Ledger → bincode → AES-256-GCM(Argon2id(password)) → MSVT bytes.
//!
//! Byte layout:
//! ```text
//! [MSVT: 4B] [version: 2B LE] [memory_kib: 4B LE] [iterations: 4B LE]
//! [lanes: 4B LE] [salt: 16B] [nonce: 12B] [ciphertext: rest of file]
//! ```
//! The ciphertext runs to the end of the file; the GCM tag at its tail
//! authenticates the payload, so no separate length or checksum is stored.

use crate::errors::CoreError;
use crate::models::ledger::Ledger;

use super::cipher::{self, KdfParams, NONCE_LEN, SALT_LEN};

/// Magic bytes identifying a Money Stories vault file.
pub const MAGIC: &[u8; 4] = b"MSVT";

/// Current vault format version.
pub const CURRENT_VERSION: u16 = 1;

/// Fixed header size: magic(4) + version(2) + kdf(12) + salt(16) + nonce(12).
pub const HEADER_SIZE: usize = 46;

/// Encrypt and serialize a ledger to portable vault bytes.
/// A fresh salt and nonce are drawn on every save.
pub fn seal_ledger(ledger: &Ledger, password: &str) -> Result<Vec<u8>, CoreError> {
    let plaintext = bincode::serialize(ledger)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))?;

    let salt = cipher::random_salt()?;
    let nonce = cipher::random_nonce()?;
    let params = KdfParams::default();
    let key = cipher::derive_key(password, &salt, &params)?;
    let ciphertext = cipher::seal(&plaintext, &key, &nonce)?;

    let mut buf = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&CURRENT_VERSION.to_le_bytes());
    buf.extend_from_slice(&params.memory_kib.to_le_bytes());
    buf.extend_from_slice(&params.iterations.to_le_bytes());
    buf.extend_from_slice(&params.lanes.to_le_bytes());
    buf.extend_from_slice(&salt);
    buf.extend_from_slice(&nonce);
    buf.extend_from_slice(&ciphertext);
    Ok(buf)
}

/// Decrypt and deserialize a ledger from vault bytes.
pub fn open_ledger(data: &[u8], password: &str) -> Result<Ledger, CoreError> {
    if data.len() < HEADER_SIZE {
        return Err(CoreError::InvalidVaultFormat(
            "File too small to be a vault".into(),
        ));
    }
    if &data[..4] != MAGIC {
        return Err(CoreError::InvalidVaultFormat(
            "Missing MSVT magic bytes".into(),
        ));
    }

    let version = u16::from_le_bytes([data[4], data[5]]);
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let params = KdfParams {
        memory_kib: read_u32(data, 6)?,
        iterations: read_u32(data, 10)?,
        lanes: read_u32(data, 14)?,
    };
    params.validate()?;

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&data[18..18 + SALT_LEN]);
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&data[34..34 + NONCE_LEN]);

    let key = cipher::derive_key(password, &salt, &params)?;
    let plaintext = cipher::open(&data[HEADER_SIZE..], &key, &nonce)?;

    bincode::deserialize(&plaintext)
        .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize ledger: {e}")))
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, CoreError> {
    data[offset..offset + 4]
        .try_into()
        .map(u32::from_le_bytes)
        .map_err(|_| CoreError::InvalidVaultFormat(format!("Truncated header at byte {offset}")))
}

/// Save a ledger to an encrypted vault file on disk (native only).
#[cfg(not(target_arch = "wasm32"))]
pub fn save_to_file(ledger: &Ledger, path: &str, password: &str) -> Result<(), CoreError> {
    let bytes = seal_ledger(ledger, password)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Load a ledger from an encrypted vault file on disk (native only).
#[cfg(not(target_arch = "wasm32"))]
pub fn load_from_file(path: &str, password: &str) -> Result<Ledger, CoreError> {
    let bytes = std::fs::read(path)?;
    open_ledger(&bytes, password)
}
