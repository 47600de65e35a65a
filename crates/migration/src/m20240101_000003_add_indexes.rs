use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sessions are listed per member
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_workoutsessions_member")
                    .table(Workoutsessions::Table)
                    .col(Workoutsessions::MemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_workoutsessions_member")
                    .table(Workoutsessions::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Workoutsessions {
    #[sea_orm(iden = "Workoutsessions")]
    Table,
    MemberId,
}
