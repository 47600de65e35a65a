//! Create `Workoutsessions` table.
//! `member_id` points at a member by convention only; there is no foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workoutsessions::Table)
                    .if_not_exists()
                    .col(pk_auto(Workoutsessions::SessionId))
                    .col(integer(Workoutsessions::MemberId))
                    .col(date(Workoutsessions::Date))
                    .col(integer_null(Workoutsessions::DurationMinutes))
                    .col(integer_null(Workoutsessions::CaloriesBurned))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Workoutsessions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Workoutsessions {
    #[sea_orm(iden = "Workoutsessions")]
    Table,
    SessionId,
    MemberId,
    Date,
    DurationMinutes,
    CaloriesBurned,
}
