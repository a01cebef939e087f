//! AES-256-GCM sealing of the credentials file.
//!
//! Sealed layout: 12-byte random nonce, then the ciphertext with its tag.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::Aes256Gcm;
use log::info;
use rand::Rng;

use super::CredentialsError;

pub(crate) const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Reads the key file.
pub(crate) fn read_key(path: &Path) -> Result<[u8; KEY_LEN], CredentialsError> {
    let bytes = fs::read(path).map_err(|e| CredentialsError::io(path, e))?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        CredentialsError::Crypto(format!(
            "key file {} holds {} bytes, expected {}",
            path.display(),
            bytes.len(),
            KEY_LEN
        ))
    })
}

/// Reads the key file, generating and storing a new random key if it does not exist.
pub(crate) fn read_or_create_key(path: &Path) -> Result<[u8; KEY_LEN], CredentialsError> {
    if path.exists() {
        return read_key(path);
    }

    let mut key = [0u8; KEY_LEN];
    rand::rng().fill(&mut key);
    let mut file = owner_only()
        .open(path)
        .map_err(|e| CredentialsError::io(path, e))?;
    file.write_all(&key).map_err(|e| CredentialsError::io(path, e))?;
    info!("Generated new credentials key at {}", path.display());
    Ok(key)
}

/// Options for a new file readable by its owner only (0600 on unix).
///
/// `create_new` refuses to reuse a file that appeared in the meantime.
fn owner_only() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

pub(crate) fn seal(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>, CredentialsError> {
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key));
    let mut nonce = [0u8; NONCE_LEN];
    rand::rng().fill(&mut nonce);

    let ciphertext = cipher
        .encrypt(GenericArray::from_slice(&nonce), plaintext)
        .map_err(|_| CredentialsError::Crypto("encryption failed".to_string()))?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

pub(crate) fn open(key: &[u8; KEY_LEN], sealed: &[u8]) -> Result<Vec<u8>, CredentialsError> {
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(CredentialsError::Crypto(
            "encrypted credentials are truncated".to_string(),
        ));
    }
    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new(GenericArray::from_slice(key));
    cipher
        .decrypt(GenericArray::from_slice(nonce), ciphertext)
        .map_err(|_| {
            CredentialsError::Crypto("wrong key or corrupted credentials file".to_string())
        })
}
