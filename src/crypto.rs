// src/crypto.rs
//! Hash demonstrator: shows how the same password looks under five storage
//! schemes. Educational only - the bcrypt/Argon2 costs here are fixed low
//! demo parameters, far below what a production system should use.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use utoipa::ToSchema;

#[cfg(feature = "argon2")]
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};

// Demo cost parameters. Low on purpose so responses stay fast.
pub const BCRYPT_DEMO_COST: u32 = 6;
#[cfg(feature = "argon2")]
const ARGON2_DEMO_MEMORY_KIB: u32 = 8192;
#[cfg(feature = "argon2")]
const ARGON2_DEMO_TIME_COST: u32 = 2;
#[cfg(feature = "argon2")]
const ARGON2_DEMO_PARALLELISM: u32 = 1;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Hashing backend unavailable: {0}")]
    BackendUnavailable(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// One password rendered under every storage scheme.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HashDemo {
    /// The password exactly as typed - what a plaintext store leaks
    pub plaintext: String,
    pub md5: String,
    pub sha256: String,
    pub bcrypt: String,
    /// Omitted when the Argon2 backend is compiled out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argon2: Option<String>,
}

/// Whether the Argon2 backend was compiled in.
pub fn argon2_available() -> bool {
    cfg!(feature = "argon2")
}

/// Hex MD5 digest. Deterministic, which is exactly its weakness.
pub fn md5_hash(password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hex SHA-256 digest. Deterministic and unsalted.
pub fn sha256_hash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Salted bcrypt hash at the demo cost factor.
pub fn bcrypt_hash(password: &str) -> Result<String> {
    bcrypt::hash(password, BCRYPT_DEMO_COST).map_err(|e| CryptoError::HashingError(e.to_string()))
}

/// Salted Argon2id hash at the demo parameters.
#[cfg(feature = "argon2")]
pub fn argon2_hash(password: &str) -> Result<String> {
    let params = argon2::Params::new(
        ARGON2_DEMO_MEMORY_KIB,
        ARGON2_DEMO_TIME_COST,
        ARGON2_DEMO_PARALLELISM,
        None,
    )
    .map_err(|e| CryptoError::HashingError(e.to_string()))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CryptoError::HashingError(e.to_string()))?;

    Ok(hash.to_string())
}

#[cfg(not(feature = "argon2"))]
pub fn argon2_hash(_password: &str) -> Result<String> {
    Err(CryptoError::BackendUnavailable(
        "Argon2 support was not compiled in".to_string(),
    ))
}

/// Compute the full comparison table. A missing Argon2 backend degrades to
/// an omitted entry instead of failing the call.
pub fn hash_comparison(password: &str) -> Result<HashDemo> {
    let argon2 = match argon2_hash(password) {
        Ok(hash) => Some(hash),
        Err(CryptoError::BackendUnavailable(reason)) => {
            log::warn!("Omitting Argon2 demo hash: {}", reason);
            None
        }
        Err(e) => return Err(e),
    };

    Ok(HashDemo {
        plaintext: password.to_string(),
        md5: md5_hash(password),
        sha256: sha256_hash(password),
        bcrypt: bcrypt_hash(password)?,
        argon2,
    })
}
