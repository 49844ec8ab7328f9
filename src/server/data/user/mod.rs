//! User account repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Data access for the `account_user` table.
///
/// Generic over [`ConnectionTrait`] so the same queries run on a pool or inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    ///
    /// `password_hash` is stored as given, callers are responsible for hashing. Superusers are
    /// also flagged as staff.
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
        is_superuser: bool,
    ) -> Result<entity::account_user::Model, DbErr> {
        let user = entity::account_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.to_string()),
            password: ActiveValue::Set(password_hash.to_string()),
            is_active: ActiveValue::Set(true),
            is_staff: ActiveValue::Set(is_superuser),
            is_superuser: ActiveValue::Set(is_superuser),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by primary key
    pub async fn get(&self, user_id: i32) -> Result<Option<entity::account_user::Model>, DbErr> {
        entity::prelude::AccountUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds the user stored under exactly `email`
    ///
    /// No normalization is applied here.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::account_user::Model>, DbErr> {
        entity::prelude::AccountUser::find()
            .filter(entity::account_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Returns whether any user is stored under exactly `email`
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AccountUser::find()
            .filter(entity::account_user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
