use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_members::Members;

#[derive(DeriveIden)]
enum ResetTokens {
    Table,
    Id,
    MemberId,
    Token,
    Method,
    ExpiresAt,
    Used,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 重置令牌: email 方式为 43 位随机串, phone 方式为 6 位数字验证码;
/// 两者共用 token 唯一索引
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResetTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResetTokens::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResetTokens::MemberId).integer().not_null())
                    .col(ColumnDef::new(ResetTokens::Token).string().not_null())
                    .col(ColumnDef::new(ResetTokens::Method).string_len(16).not_null())
                    .col(
                        ColumnDef::new(ResetTokens::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResetTokens::Used)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ResetTokens::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reset_tokens_member_id")
                            .from(ResetTokens::Table, ResetTokens::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reset_tokens_token_unique")
                    .table(ResetTokens::Table)
                    .col(ResetTokens::Token)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResetTokens::Table).to_owned())
            .await
    }
}
