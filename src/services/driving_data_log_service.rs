use crate::entities::{driving_data_log_entity as logs, driving_record_entity as records};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::{SubsecRound, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct DrivingDataLogService {
    pool: DatabaseConnection,
}

impl DrivingDataLogService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 新增一条连续监测数据
    ///
    /// timestamp 缺省为当前时间，并截断到微秒以便与数据库精度一致。
    /// 同一行程同一时间戳只能有一条。
    pub async fn create_log(
        &self,
        request: CreateDrivingDataLogRequest,
    ) -> AppResult<DrivingDataLogResponse> {
        Self::validate_metrics(&request)?;

        records::Entity::find_by_id(request.driving_record_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Driving record not found".to_string()))?;

        let timestamp = request.timestamp.unwrap_or_else(Utc::now).trunc_subsecs(6);

        let exists = logs::Entity::find_by_id((request.driving_record_id, timestamp))
            .one(&self.pool)
            .await?
            .is_some();
        if exists {
            return Err(duplicate_timestamp());
        }

        let result = logs::ActiveModel {
            driving_record_id: Set(request.driving_record_id),
            timestamp: Set(timestamp),
            blink_rate: Set(request.blink_rate),
            yawn_rate: Set(request.yawn_rate),
            eye_closure_duration: Set(request.eye_closure_duration),
            fatigue_index: Set(request.fatigue_index),
            fatigue_detected: Set(request.fatigue_detected),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await;

        match result {
            Ok(log) => {
                if log.fatigue_detected {
                    log::info!(
                        "Fatigue detected on driving record {} at {}",
                        log.driving_record_id,
                        log.timestamp
                    );
                }
                Ok(log.into())
            }
            Err(e) => {
                let err = AppError::from(e);
                if err.is_unique_violation() {
                    Err(duplicate_timestamp())
                } else {
                    Err(err)
                }
            }
        }
    }

    /// 查询某次行程的全部连续数据，按时间升序
    pub async fn list_logs(&self, driving_record_id: i32) -> AppResult<Vec<DrivingDataLogResponse>> {
        let list = logs::Entity::find()
            .filter(logs::Column::DrivingRecordId.eq(driving_record_id))
            .order_by_asc(logs::Column::Timestamp)
            .all(&self.pool)
            .await?;

        Ok(list.into_iter().map(Into::into).collect())
    }

    fn validate_metrics(request: &CreateDrivingDataLogRequest) -> AppResult<()> {
        let rates = [
            ("blink_rate", request.blink_rate),
            ("yawn_rate", request.yawn_rate),
            ("eye_closure_duration", request.eye_closure_duration),
        ];
        for (name, value) in rates {
            if let Some(v) = value
                && (!v.is_finite() || v < 0.0)
            {
                return Err(AppError::ValidationError(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }

        if let Some(index) = request.fatigue_index
            && !(1.0..=10.0).contains(&index)
        {
            return Err(AppError::ValidationError(
                "fatigue_index must be between 1 and 10".to_string(),
            ));
        }

        Ok(())
    }
}

fn duplicate_timestamp() -> AppError {
    AppError::ValidationError("Log with same timestamp already exists".to_string())
}
