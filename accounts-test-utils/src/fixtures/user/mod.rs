//! User account fixture utilities.
//!
//! This module provides methods for inserting and inspecting `account_user` records, and
//! factory functions for creating in-memory model instances and request payloads.

pub mod factory;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::{error::TestError, model::UserModel};

/// Database fixtures for user accounts.
pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a regular user account, storing an Argon2 hash of `password`.
    pub async fn insert_user(&self, email: &str, password: &str) -> Result<UserModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        Ok(
            entity::prelude::AccountUser::insert(entity::account_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set(String::new()),
                password: ActiveValue::Set(password_hash),
                is_active: ActiveValue::Set(true),
                is_staff: ActiveValue::Set(false),
                is_superuser: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?,
        )
    }

    /// Find the account stored under exactly `email`.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, TestError> {
        Ok(entity::prelude::AccountUser::find()
            .filter(entity::account_user::Column::Email.eq(email))
            .one(self.db)
            .await?)
    }

    /// Count the accounts stored under exactly `email`.
    pub async fn count_by_email(&self, email: &str) -> Result<u64, TestError> {
        Ok(entity::prelude::AccountUser::find()
            .filter(entity::account_user::Column::Email.eq(email))
            .count(self.db)
            .await?)
    }

    /// Count every account in the store.
    pub async fn count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::AccountUser::find().count(self.db).await?)
    }
}
