use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 行程中的一条连续监测数据
/// 说明:
/// - 主键为 (driving_record_id, timestamp)，同一行程同一时刻只能有一条
/// - blink_rate / yawn_rate 单位为 次/分钟
/// - eye_closure_duration 单位为 秒
/// - fatigue_index 取值 1-10
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "driving_data_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub driving_record_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub timestamp: DateTime<Utc>,
    pub blink_rate: Option<f64>,
    pub yawn_rate: Option<f64>,
    pub eye_closure_duration: Option<f64>,
    pub fatigue_index: Option<f64>,
    pub fatigue_detected: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::driving_records::Entity",
        from = "Column::DrivingRecordId",
        to = "super::driving_records::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DrivingRecord,
}

impl Related<super::driving_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DrivingRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
