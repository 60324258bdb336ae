use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuthRoles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuthRoles::Role)
                            .string_len(16)
                            .not_null()
                            .default("user"),
                    )
                    // One role per token: the unique FK column is the exclusive edge.
                    .col(
                        ColumnDef::new(AuthRoles::TokenId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AuthRoles::Table, AuthRoles::TokenId)
                            .to(AuthTokens::Table, AuthTokens::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthRoles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AuthRoles {
    Table,
    Id,
    Role,
    TokenId,
}

#[derive(Iden)]
enum AuthTokens {
    Table,
    Id,
}
