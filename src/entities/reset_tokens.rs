use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum ResetMethod {
    #[sea_orm(string_value = "email")]
    Email,
    #[sea_orm(string_value = "phone")]
    Phone,
}

impl std::fmt::Display for ResetMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetMethod::Email => write!(f, "email"),
            ResetMethod::Phone => write!(f, "phone"),
        }
    }
}

/// 密码重置令牌实体
/// 说明:
/// - email 方式的 token 为随机串，phone 方式为 6 位数字验证码
/// - 令牌只能使用一次，used 置为 true 后不可再用
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "reset_tokens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    #[sea_orm(unique)]
    pub token: String,
    pub method: ResetMethod,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl Model {
    /// 是否已过期
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// 未使用且未过期
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.used && !self.is_expired(now)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::MemberId",
        to = "super::members::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(used: bool, expires_at: DateTime<Utc>) -> Model {
        Model {
            id: 1,
            member_id: 1,
            token: "123456".to_string(),
            method: ResetMethod::Phone,
            expires_at,
            used,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_usability() {
        let now = Utc::now();
        assert!(token(false, now + Duration::minutes(5)).is_usable(now));
        assert!(!token(true, now + Duration::minutes(5)).is_usable(now));

        let expired = token(false, now - Duration::seconds(1));
        assert!(expired.is_expired(now));
        assert!(!expired.is_usable(now));
    }
}
