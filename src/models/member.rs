use crate::entities::member_entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    #[schema(example = "王小明")]
    pub name: String,
    #[schema(example = "driver@example.com")]
    pub email: String,
    #[schema(example = 30)]
    pub age: i32,
    #[schema(example = "password123")]
    pub password: String,
    #[schema(example = "0912345678")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub phone_number: Option<String>,
}

impl From<member_entity::Model> for MemberResponse {
    fn from(m: member_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            age: m.age,
            phone_number: m.phone_number,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "driver@example.com")]
    pub email: String,
    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub member: MemberResponse,
}

/// 删除会员的结果（级联删除的行程与数据条数）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteMemberResponse {
    pub member_id: i32,
    pub driving_records_deleted: u64,
    pub data_logs_deleted: u64,
    pub reset_tokens_deleted: u64,
}
