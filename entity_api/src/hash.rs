//! One-way, salted password hashing.
//!
//! Plaintext secrets are replaced by their hash before a user is persisted. Two
//! drivers are available: Argon2 (the default, via `password-auth`) and bcrypt.
//! The driver is chosen from [`Config`] at startup and shared behind
//! `Arc<dyn Hasher>`.

use entity::users;
use log::*;
use sea_orm::Set;
use service::config::{Config, HashDriver};
use std::sync::Arc;
use thiserror::Error;

pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Invalid bcrypt cost: {0} (must be 4-31)")]
    InvalidCost(u32),

    #[error("Password hashing failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Turns plaintext secrets into stored hashes and checks plaintext against them.
pub trait Hasher: Send + Sync {
    /// Hashes `plaintext` with a fresh random salt.
    fn make(&self, plaintext: &str) -> Result<String, HashError>;

    /// Returns `true` if `plaintext` matches `hash`. Hashes made by any of the
    /// supported drivers are accepted so that switching drivers doesn't lock
    /// users out; an unparseable hash is a mismatch.
    fn check(&self, plaintext: &str, hash: &str) -> bool {
        verify_any(plaintext, hash)
    }

    /// Returns `true` if `hash` was produced with different parameters than the
    /// ones this driver uses for new hashes.
    fn needs_rehash(&self, hash: &str) -> bool;
}

/// Argon2id hashes in PHC string format.
#[derive(Clone, Copy, Debug, Default)]
pub struct Argon2Hasher;

impl Hasher for Argon2Hasher {
    fn make(&self, plaintext: &str) -> Result<String, HashError> {
        Ok(password_auth::generate_hash(plaintext))
    }

    fn needs_rehash(&self, hash: &str) -> bool {
        password_auth::is_hash_obsolete(hash).unwrap_or(true)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Result<Self, HashError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            warn!("Rejecting bcrypt cost {cost}");
            return Err(HashError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Hasher for BcryptHasher {
    fn make(&self, plaintext: &str) -> Result<String, HashError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    fn needs_rehash(&self, hash: &str) -> bool {
        match hash.parse::<bcrypt::HashParts>() {
            Ok(parts) => parts.get_cost() != self.cost,
            Err(_) => true,
        }
    }
}

/// Verifies `plaintext` against a bcrypt (`$2*$`) or PHC-format hash, picking
/// the verifier from the hash prefix.
pub fn verify_any(plaintext: &str, hash: &str) -> bool {
    if is_bcrypt_hash(hash) {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    } else {
        password_auth::verify_password(plaintext, hash).is_ok()
    }
}

fn is_bcrypt_hash(hash: &str) -> bool {
    hash.starts_with("$2")
}

/// Builds the hasher selected by `hash_driver`.
pub fn hasher_from_config(config: &Config) -> Result<Arc<dyn Hasher>, HashError> {
    debug!("Using {} password hashing driver", config.hash_driver);

    Ok(match config.hash_driver {
        HashDriver::Argon2 => Arc::new(Argon2Hasher),
        HashDriver::Bcrypt => Arc::new(BcryptHasher::new(config.hash_bcrypt_cost)?),
    })
}

/// Something that stores a hashed secret.
pub trait Hashable {
    /// Replaces the stored secret with the hash of `plaintext`. No other
    /// attribute is touched.
    fn set_password(&mut self, hasher: &dyn Hasher, plaintext: &str) -> Result<(), HashError>;
}

impl Hashable for users::Model {
    fn set_password(&mut self, hasher: &dyn Hasher, plaintext: &str) -> Result<(), HashError> {
        self.password = hasher.make(plaintext)?;
        Ok(())
    }
}

impl Hashable for users::ActiveModel {
    fn set_password(&mut self, hasher: &dyn Hasher, plaintext: &str) -> Result<(), HashError> {
        self.password = Set(hasher.make(plaintext)?);
        Ok(())
    }
}
