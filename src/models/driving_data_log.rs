use crate::entities::driving_data_log_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 上传一条连续监测数据；timestamp 缺省为服务器当前时间
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDrivingDataLogRequest {
    pub driving_record_id: i32,
    pub timestamp: Option<DateTime<Utc>>,
    /// 眨眼次数/分钟
    pub blink_rate: Option<f64>,
    /// 哈欠次数/分钟
    pub yawn_rate: Option<f64>,
    /// 闭眼持续时间(秒)
    pub eye_closure_duration: Option<f64>,
    /// 疲劳指数(1-10)
    pub fatigue_index: Option<f64>,
    #[serde(default)]
    pub fatigue_detected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrivingDataLogResponse {
    pub driving_record_id: i32,
    pub timestamp: DateTime<Utc>,
    pub blink_rate: Option<f64>,
    pub yawn_rate: Option<f64>,
    pub eye_closure_duration: Option<f64>,
    pub fatigue_index: Option<f64>,
    pub fatigue_detected: bool,
    pub created_at: DateTime<Utc>,
}

impl From<driving_data_log_entity::Model> for DrivingDataLogResponse {
    fn from(m: driving_data_log_entity::Model) -> Self {
        Self {
            driving_record_id: m.driving_record_id,
            timestamp: m.timestamp,
            blink_rate: m.blink_rate,
            yawn_rate: m.yawn_rate,
            eye_closure_duration: m.eye_closure_duration,
            fatigue_index: m.fatigue_index,
            fatigue_detected: m.fatigue_detected,
            created_at: m.created_at,
        }
    }
}
