use super::error::{EntityApiErrorKind, Error};
use crate::hash::{Hashable, Hasher};
use chrono::Utc;

use entity::users::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;
use sea_orm::{entity::prelude::*, ConnectionTrait, IntoActiveModel, Set};
use serde::Deserialize;

/// An email and plaintext password pair presented at login.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Persists a new user. `user_model.password` is taken as plaintext and replaced
/// by its hash before the insert.
pub async fn create(
    db: &impl ConnectionTrait,
    hasher: &dyn Hasher,
    user_model: Model,
) -> Result<Model, Error> {
    debug!("New User Model to be inserted for email: {}", user_model.email);

    let now = Utc::now();
    let mut user_active_model: ActiveModel = ActiveModel {
        email: Set(user_model.email),
        first_name: Set(user_model.first_name),
        last_name: Set(user_model.last_name),
        display_name: Set(user_model.display_name),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    user_active_model.set_password(hasher, &user_model.password)?;

    Ok(user_active_model.insert(db).await?)
}

pub async fn find_by_email(db: &impl ConnectionTrait, email: &str) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| {
        warn!("User with id {id} not found");
        Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        }
    })
}

/// Replaces a user's password hash with the hash of `new_password`.
pub async fn update_password(
    db: &impl ConnectionTrait,
    hasher: &dyn Hasher,
    user_id: Id,
    new_password: &str,
) -> Result<Model, Error> {
    let existing_user = find_by_id(db, user_id).await?;

    let mut active_model = existing_user.into_active_model();
    active_model.set_password(hasher, new_password)?;
    active_model.updated_at = Set(Utc::now().into());

    Ok(active_model.update(db).await?)
}

pub async fn delete(db: &impl ConnectionTrait, user_id: Id) -> Result<(), Error> {
    Entity::delete_by_id(user_id).exec(db).await?;
    Ok(())
}

pub fn verify_password(
    hasher: &dyn Hasher,
    password_to_verify: &str,
    password_hash: &str,
) -> Result<(), Error> {
    if hasher.check(password_to_verify, password_hash) {
        Ok(())
    } else {
        Err(Error::unauthenticated())
    }
}

/// Looks up the user for `creds` and checks the password. An unknown email and a
/// wrong password are indistinguishable to the caller.
pub async fn authenticate(
    db: &impl ConnectionTrait,
    hasher: &dyn Hasher,
    creds: &Credentials,
) -> Result<Model, Error> {
    match find_by_email(db, &creds.email).await? {
        Some(user) => {
            verify_password(hasher, &creds.password, &user.password)?;
            Ok(user)
        }
        None => {
            debug!("No user found for email {}", creds.email);
            Err(Error::unauthenticated())
        }
    }
}
