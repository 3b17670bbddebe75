//! Decoding of configured key material.
//!
//! Keys are configured as URL-safe base64 (`-` and `_` instead of `+` and `/`),
//! with or without padding. They are translated to the standard alphabet and
//! decoded to the raw bytes handed to the JWT codec.

use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
    Engine,
};
use thiserror::Error;

const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error("Key decodes to zero bytes")]
    Empty,

    #[error("Key is not valid base64url: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Decodes a base64url encoded key into raw key bytes.
pub fn decode_signing_key(key: &str) -> Result<Vec<u8>, KeyError> {
    let standard: String = key
        .trim()
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = KEY_ENGINE.decode(standard)?;
    if bytes.is_empty() {
        return Err(KeyError::Empty);
    }
    Ok(bytes)
}
