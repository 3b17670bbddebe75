//! Error types for the `domain` layer.
use entity_api::error::{EntityApiErrorKind, Error as EntityApiError};
use entity_api::hash::HashError;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. The intent is to translate errors between layers while maintaining
/// layer boundaries. Ex. `domain` is dependent on `entity_api`, and callers of `domain`
/// should not need to depend, directly, on `entity_api` to inspect an error.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Entity(EntityErrorKind),
    /// Required configuration is missing or malformed.
    Config(ConfigErrorKind),
    /// A token was requested for a principal that has not been persisted.
    State,
    /// No service is registered under the given name (or it has another type).
    Resolution(String),
    Token(TokenErrorKind),
    Hashing,
}

#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    MissingSecret,
    MissingAlgorithm,
    MissingExpiry,
    MissingPublicKey,
    InvalidSecret,
    InvalidPublicKey,
}

/// Errors surfaced by the JWT codec, or while computing claims for it.
#[derive(Debug, PartialEq)]
pub enum TokenErrorKind {
    Encoding,
    Decoding,
    ExpiryOutOfRange,
}

/// Enum representing the various kinds of entity errors that can bubble up from the "Entity" layer (`entity_api` and `entity`).
/// These errors are translated from the `entity_api` layer to the `domain` layer and reduced to a subset of error kinds
/// that are relevant to the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    NotFound,
    Invalid,
    Unauthenticated,
    DbTransaction,
    Other(String),
}

impl Error {
    pub(crate) fn internal(kind: InternalErrorKind) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(kind),
        }
    }

    pub(crate) fn config(kind: ConfigErrorKind) -> Self {
        Self::internal(InternalErrorKind::Config(kind))
    }

    pub(crate) fn token<E>(kind: TokenErrorKind, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error {
            source: Some(Box::new(source)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Token(kind)),
        }
    }

    pub(crate) fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `entity_api` layer to the `domain` layer.
impl From<EntityApiError> for Error {
    fn from(err: EntityApiError) -> Self {
        let internal_kind = match err.error_kind {
            EntityApiErrorKind::RecordNotFound => {
                InternalErrorKind::Entity(EntityErrorKind::NotFound)
            }
            EntityApiErrorKind::RecordUnauthenticated => {
                InternalErrorKind::Entity(EntityErrorKind::Unauthenticated)
            }
            EntityApiErrorKind::ValidationError => {
                InternalErrorKind::Entity(EntityErrorKind::Invalid)
            }
            EntityApiErrorKind::SystemError => {
                InternalErrorKind::Entity(EntityErrorKind::DbTransaction)
            }
            EntityApiErrorKind::HashingError => InternalErrorKind::Hashing,
            EntityApiErrorKind::RecordNotUpdated => InternalErrorKind::Entity(
                EntityErrorKind::Other("RecordNotUpdated".to_string()),
            ),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(internal_kind),
        }
    }
}

impl From<HashError> for Error {
    fn from(err: HashError) -> Self {
        EntityApiError::from(err).into()
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Error::token(TokenErrorKind::Encoding, err)
    }
}
