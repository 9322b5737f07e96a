use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Repairs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Repairs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Repairs::Username).string().not_null())
                    .col(ColumnDef::new(Repairs::LaptopBrands).string().not_null())
                    .col(
                        ColumnDef::new(Repairs::SubmitDate)
                            .date_time()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_owned()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing sorts newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_repairs_submit_date")
                    .table(Repairs::Table)
                    .col(Repairs::SubmitDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Repairs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Repairs {
    Table,
    Id,
    Username,
    LaptopBrands,
    SubmitDate,
}
