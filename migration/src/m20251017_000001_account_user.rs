use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACCOUNT_USER_EMAIL: &str = "idx-account_user-email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountUser::Id))
                    .col(string_len(AccountUser::Email, 255))
                    .col(string_len(AccountUser::Name, 255))
                    .col(string(AccountUser::Password))
                    .col(boolean(AccountUser::IsActive))
                    .col(boolean(AccountUser::IsStaff))
                    .col(boolean(AccountUser::IsSuperuser))
                    .col(timestamp(AccountUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_USER_EMAIL)
                    .table(AccountUser::Table)
                    .col(AccountUser::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_USER_EMAIL)
                    .table(AccountUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccountUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AccountUser {
    Table,
    Id,
    Email,
    Name,
    Password,
    IsActive,
    IsStaff,
    IsSuperuser,
    CreatedAt,
}
