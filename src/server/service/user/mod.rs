//! User service layer.
//!
//! Business logic for user account creation and lookup. Input is validated and the password
//! hashed before the account store is touched; the duplicate check and insert then run in a
//! single transaction with automatic retry for transient database failures.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        service::retry::RetryContext,
        util::{
            password::hash_password_blocking,
            validate::{normalize_email, validate_email, validate_name, validate_password},
        },
    },
};

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new regular user account.
    ///
    /// Validates the payload, hashes the password, then checks for an existing account and
    /// inserts the new one inside a single transaction. Nothing is written when any step fails.
    ///
    /// # Arguments
    /// - `payload` - Name, email and plaintext password for the new account
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Account created, without its password
    /// - `Err(Error::UserError)` - Invalid input or an account already exists for the email
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    /// - `Err(Error::PasswordHashError)` - Password hashing failed
    pub async fn create_user(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        self.create(payload, false).await
    }

    /// Creates an administrative account with staff and superuser flags set.
    ///
    /// Subject to the same validation and uniqueness rules as [`Self::create_user`].
    pub async fn create_superuser(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        self.create(payload, true).await
    }

    /// Looks up an account by email.
    ///
    /// The email is normalized first, so lookups match the way registration stored it.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Account found
    /// - `Ok(None)` - No account for the email
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserDto>, Error> {
        let ctx = RetryContext::new();
        let email = normalize_email(email);
        let db = self.db.clone();

        ctx.execute_with_retry("get user by email", || {
            let db = db.clone();
            let email = email.clone();

            Box::pin(async move {
                let user_repo = UserRepository::new(&db);
                let user = user_repo.find_by_email(&email).await?;

                Ok(user.map(UserDto::from))
            })
        })
        .await
    }

    async fn create(&self, payload: CreateUserDto, is_superuser: bool) -> Result<UserDto, Error> {
        let email = validate_email(&payload.email)?;
        let name = validate_name(payload.name.as_deref())?;
        validate_password(&payload.password)?;

        let password_hash = hash_password_blocking(payload.password).await?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        let user = ctx
            .execute_with_retry("create user", || {
                let db = db.clone();
                let email = email.clone();
                let name = name.clone();
                let password_hash = password_hash.clone();

                Box::pin(async move {
                    // Rolled back on drop unless committed
                    let txn = db.begin().await?;
                    let user_repo = UserRepository::new(&txn);

                    if user_repo.exists_by_email(&email).await? {
                        return Err(UserError::DuplicateEmail(email).into());
                    }

                    let user = user_repo
                        .create(&email, &name, &password_hash, is_superuser)
                        .await
                        .map_err(|e| duplicate_email_or(e, &email))?;

                    txn.commit().await?;

                    Ok(user)
                })
            })
            .await?;

        tracing::info!(
            user_id = user.id,
            is_superuser = user.is_superuser,
            "Created user account"
        );

        Ok(UserDto::from(user))
    }
}

/// Maps a unique-constraint violation on insert to [`UserError::DuplicateEmail`].
///
/// Covers the window where a concurrent registration commits the same email between the
/// existence check and the insert.
fn duplicate_email_or(err: DbErr, email: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            UserError::DuplicateEmail(email.to_string()).into()
        }
        _ => err.into(),
    }
}
