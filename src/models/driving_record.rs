use crate::entities::{driving_record_entity, FatigueLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDrivingRecordRequest {
    pub member_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[schema(example = "Taipei")]
    pub location_start: String,
    #[schema(example = "Hsinchu")]
    pub location_end: String,
    pub fatigue_level: Option<FatigueLevel>,
    pub fatigue_detected: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrivingRecordResponse {
    pub id: i32,
    pub member_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location_start: String,
    pub location_end: String,
    pub fatigue_level: Option<FatigueLevel>,
    pub fatigue_detected: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl From<driving_record_entity::Model> for DrivingRecordResponse {
    fn from(m: driving_record_entity::Model) -> Self {
        Self {
            id: m.id,
            member_id: m.member_id,
            start_time: m.start_time,
            end_time: m.end_time,
            location_start: m.location_start,
            location_end: m.location_end,
            fatigue_level: m.fatigue_level,
            fatigue_detected: m.fatigue_detected,
            created_at: m.created_at,
        }
    }
}

/// 行程列表查询参数
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct DrivingRecordQuery {
    /// 只返回该会员的行程
    pub member_id: Option<i32>,
}

/// 删除行程的结果
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteDrivingRecordResponse {
    pub driving_record_id: i32,
    pub data_logs_deleted: u64,
}
