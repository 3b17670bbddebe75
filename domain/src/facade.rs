//! Typed entry points to services held in a [`ServiceRegistry`].
//!
//! A facade pairs a registry name with the type registered under it, so callers
//! write `Hash::make(&registry, "secret")` instead of resolving by string and
//! downcasting themselves.

use crate::error::Error;
use crate::jwt::{CustomClaims, Jwt, TokenClaims, TokenIssuable, TokenIssuer};
use crate::registry::{ServiceRegistry, ServiceRegistryBuilder};
use entity_api::hash::Hasher;
use serde_json::Value;
use std::sync::Arc;

pub trait Facade {
    type Service: ?Sized + Send + Sync + 'static;

    /// The name the service is registered under.
    const ACCESSOR: &'static str;

    fn resolve(registry: &ServiceRegistry) -> Result<Arc<Self::Service>, Error> {
        registry.resolve::<Self::Service>(Self::ACCESSOR)
    }
}

impl ServiceRegistryBuilder {
    /// Registers `service` under the facade's accessor name.
    pub fn with_facade<F: Facade>(self, service: Arc<F::Service>) -> Self {
        self.register::<F::Service>(F::ACCESSOR, service)
    }
}

/// The password hasher, registered as `"hash"`.
pub struct Hash;

impl Facade for Hash {
    type Service = dyn Hasher;
    const ACCESSOR: &'static str = "hash";
}

impl Hash {
    pub fn make(registry: &ServiceRegistry, plaintext: &str) -> Result<String, Error> {
        Ok(Self::resolve(registry)?.make(plaintext)?)
    }

    pub fn check(registry: &ServiceRegistry, plaintext: &str, hash: &str) -> Result<bool, Error> {
        Ok(Self::resolve(registry)?.check(plaintext, hash))
    }

    pub fn needs_rehash(registry: &ServiceRegistry, hash: &str) -> Result<bool, Error> {
        Ok(Self::resolve(registry)?.needs_rehash(hash))
    }
}

/// The token issuer, registered as `"jwt"`.
pub struct Token;

impl Facade for Token {
    type Service = TokenIssuer;
    const ACCESSOR: &'static str = "jwt";
}

impl Token {
    pub fn issue_token<P>(
        registry: &ServiceRegistry,
        principal: &mut P,
        custom: &CustomClaims,
    ) -> Result<Jwt, Error>
    where
        P: TokenIssuable + ?Sized,
    {
        Self::resolve(registry)?.issue_token(principal, custom)
    }

    pub fn verify_token(
        registry: &ServiceRegistry,
        token: &str,
    ) -> Result<TokenClaims<Value>, Error> {
        Self::resolve(registry)?.verify_token(token)
    }
}
