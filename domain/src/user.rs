use crate::error::Error;
use crate::jwt::{CustomClaims, Jwt, TokenIssuable, TokenIssuer};
use crate::{users, Id};
use entity_api::hash::Hasher;
use log::*;
use sea_orm::ConnectionTrait;

pub use entity_api::user::{
    create, delete, find_by_email, find_by_id, update_password, verify_password, Credentials,
};

/// Authenticates `creds` and, when the stored hash was made with outdated
/// parameters, stores a fresh hash of the now-verified password.
pub async fn authenticate(
    db: &impl ConnectionTrait,
    hasher: &dyn Hasher,
    creds: &Credentials,
) -> Result<users::Model, Error> {
    let user = entity_api::user::authenticate(db, hasher, creds).await?;

    if hasher.needs_rehash(&user.password) {
        info!("Upgrading password hash for user {}", user.id);
        return Ok(update_password(db, hasher, user.id, &creds.password).await?);
    }

    Ok(user)
}

/// Loads the user with `user_id` and issues a token for it. The returned model
/// carries the issued token in `token`.
pub async fn issue_token(
    db: &impl ConnectionTrait,
    issuer: &TokenIssuer,
    user_id: Id,
    custom: &CustomClaims,
) -> Result<(users::Model, Jwt), Error> {
    let mut user = find_by_id(db, user_id).await?;
    let jwt = user.create_token(issuer, custom)?;
    Ok((user, jwt))
}
