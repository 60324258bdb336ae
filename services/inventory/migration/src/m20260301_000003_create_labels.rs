use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Labels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Labels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Labels::GroupId).uuid().not_null())
                    .col(ColumnDef::new(Labels::Name).string().not_null())
                    .col(
                        ColumnDef::new(Labels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Labels::Table, Labels::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_labels_group_id")
                    .table(Labels::Table)
                    .col(Labels::GroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Labels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Labels {
    Table,
    Id,
    GroupId,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Groups {
    Table,
    Id,
}
