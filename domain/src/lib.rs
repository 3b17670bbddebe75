//! Authentication domain: password verification, bearer-token issuance and the
//! service registry that hands those services to callers.
//!
//! Items from `entity_api` are re-exported so that consumers of the `domain` crate
//! do not need to depend on `entity_api` directly.
pub use entity_api::hash::{
    hasher_from_config, Argon2Hasher, BcryptHasher, HashError, Hashable, Hasher,
};
pub use entity_api::{users, Id};

pub mod error;
pub mod facade;
pub mod jwt;
pub mod registry;
pub mod user;
