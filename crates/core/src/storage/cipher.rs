use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::errors::CoreError;

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 12;
pub const KEY_LEN: usize = 32;

/// Argon2id cost parameters for key derivation.
/// Written into the vault header so future versions can raise them
/// without breaking existing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB (default: 65536 = 64 MB)
    pub memory_kib: u32,
    /// Number of passes over memory (default: 3)
    pub iterations: u32,
    /// Degree of parallelism (default: 4 lanes)
    pub lanes: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 65_536, // 64 MB
            iterations: 3,
            lanes: 4,
        }
    }
}

impl KdfParams {
    /// Bounds accepted when reading params back out of a vault header.
    /// A crafted file must not be able to request absurd KDF work.
    ///
    /// memory: 8 KiB (Argon2 minimum) to 1 GiB; iterations: 1..=20;
    /// lanes: 1..=16.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(8..=1_048_576).contains(&self.memory_kib) {
            return Err(CoreError::InvalidVaultFormat(format!(
                "KDF memory cost out of safe range: {} KiB (expected 8..1048576)",
                self.memory_kib
            )));
        }
        if !(1..=20).contains(&self.iterations) {
            return Err(CoreError::InvalidVaultFormat(format!(
                "KDF iteration count out of safe range: {} (expected 1..20)",
                self.iterations
            )));
        }
        if !(1..=16).contains(&self.lanes) {
            return Err(CoreError::InvalidVaultFormat(format!(
                "KDF lane count out of safe range: {} (expected 1..16)",
                self.lanes
            )));
        }
        Ok(())
    }
}

/// Derive a 256-bit encryption key from a password using Argon2id.
///
/// Argon2id resists both side-channel and GPU-based attacks. The salt must
/// be random and unique per vault save.
pub fn derive_key(
    password: &str,
    salt: &[u8; SALT_LEN],
    params: &KdfParams,
) -> Result<[u8; KEY_LEN], CoreError> {
    let argon2_params = Params::new(
        params.memory_kib,
        params.iterations,
        params.lanes,
        Some(KEY_LEN),
    )
    .map_err(|e| CoreError::Encryption(format!("Invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut key)
        .map_err(|e| CoreError::Encryption(format!("Argon2 key derivation failed: {e}")))?;

    Ok(key)
}

/// Encrypt plaintext using AES-256-GCM.
/// Returns ciphertext with the 16-byte authentication tag appended.
pub fn seal(
    plaintext: &[u8],
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
) -> Result<Vec<u8>, CoreError> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| CoreError::Encryption(format!("Failed to create cipher: {e}")))?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| CoreError::Encryption(format!("Encryption failed: {e}")))
}

/// Decrypt ciphertext using AES-256-GCM.
///
/// Verifies the authentication tag. Returns [`CoreError::Decryption`] if the
/// password is wrong or the data has been tampered with.
pub fn open(
    ciphertext: &[u8],
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
) -> Result<Vec<u8>, CoreError> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| CoreError::Encryption(format!("Failed to create cipher: {e}")))?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CoreError::Decryption)
}

/// Cryptographically secure random salt.
pub fn random_salt() -> Result<[u8; SALT_LEN], CoreError> {
    let mut salt = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt)
        .map_err(|e| CoreError::Encryption(format!("Failed to generate random salt: {e}")))?;
    Ok(salt)
}

/// Cryptographically secure random nonce.
pub fn random_nonce() -> Result<[u8; NONCE_LEN], CoreError> {
    let mut nonce = [0u8; NONCE_LEN];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| CoreError::Encryption(format!("Failed to generate random nonce: {e}")))?;
    Ok(nonce)
}
