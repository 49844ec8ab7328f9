use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}
