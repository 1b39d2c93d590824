use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Channels::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Channels::Name).string().not_null())
                    .col(ColumnDef::new(Channels::Category).string().not_null())
                    .col(ColumnDef::new(Channels::Logo).string())
                    .col(ColumnDef::new(Channels::StreamUrl).string().not_null())
                    .col(ColumnDef::new(Channels::EpgId).string())
                    .col(
                        ColumnDef::new(Channels::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(self.timestamp_column(manager, Channels::CreatedAt))
                    .col(self.timestamp_column(manager, Channels::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // stream_url is the dedup identity key; enforce it at the store level
        manager
            .create_index(
                Index::create()
                    .name("idx_channels_stream_url_unique")
                    .table(Channels::Table)
                    .col(Channels::StreamUrl)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_channels_category")
                    .table(Channels::Table)
                    .col(Channels::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Channels::Table).to_owned())
            .await?;

        Ok(())
    }
}

impl Migration {
    // Postgres gets a real timestamp type; SQLite stores timestamps as text
    fn timestamp_column(&self, manager: &SchemaManager, column: impl IntoIden) -> ColumnDef {
        let mut col = ColumnDef::new(column);
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => col.timestamp_with_time_zone().not_null(),
            _ => col.string().not_null(),
        };
        col
    }
}

#[derive(DeriveIden)]
enum Channels {
    Table,
    Id,
    Name,
    Category,
    Logo,
    StreamUrl,
    EpgId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
