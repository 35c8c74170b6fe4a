use crate::entities::{
    driving_data_log_entity as logs, driving_record_entity as records, member_entity as members,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

#[derive(Clone)]
pub struct DrivingRecordService {
    pool: DatabaseConnection,
}

impl DrivingRecordService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 新增一次驾驶行程
    pub async fn create_record(
        &self,
        request: CreateDrivingRecordRequest,
    ) -> AppResult<DrivingRecordResponse> {
        if request.end_time < request.start_time {
            return Err(AppError::ValidationError(
                "end_time must not be earlier than start_time".to_string(),
            ));
        }

        let location_start = request.location_start.trim().to_string();
        let location_end = request.location_end.trim().to_string();
        if location_start.is_empty() || location_end.is_empty() {
            return Err(AppError::ValidationError(
                "Start and end locations are required".to_string(),
            ));
        }

        members::Entity::find_by_id(request.member_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let record = records::ActiveModel {
            member_id: Set(request.member_id),
            start_time: Set(request.start_time),
            end_time: Set(request.end_time),
            location_start: Set(location_start),
            location_end: Set(location_end),
            fatigue_level: Set(request.fatigue_level),
            fatigue_detected: Set(request.fatigue_detected),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Created driving record {} for member {}",
            record.id,
            record.member_id
        );

        Ok(record.into())
    }

    /// 查询行程列表，可按会员过滤，按出发时间升序
    pub async fn list_records(
        &self,
        query: &DrivingRecordQuery,
    ) -> AppResult<Vec<DrivingRecordResponse>> {
        let mut select = records::Entity::find();
        if let Some(member_id) = query.member_id {
            select = select.filter(records::Column::MemberId.eq(member_id));
        }

        let list = select
            .order_by_asc(records::Column::StartTime)
            .order_by_asc(records::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get_record(&self, record_id: i32) -> AppResult<DrivingRecordResponse> {
        let record = records::Entity::find_by_id(record_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Driving record not found".to_string()))?;
        Ok(record.into())
    }

    /// 删除行程及其全部连续数据
    pub async fn delete_record(&self, record_id: i32) -> AppResult<DeleteDrivingRecordResponse> {
        let txn = self.pool.begin().await?;

        records::Entity::find_by_id(record_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Driving record not found".to_string()))?;

        let data_logs_deleted = logs::Entity::delete_many()
            .filter(logs::Column::DrivingRecordId.eq(record_id))
            .exec(&txn)
            .await?
            .rows_affected;

        records::Entity::delete_by_id(record_id).exec(&txn).await?;

        txn.commit().await?;

        log::info!("Deleted driving record {record_id} with {data_logs_deleted} data logs");

        Ok(DeleteDrivingRecordResponse {
            driving_record_id: record_id,
            data_logs_deleted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FatigueLevel;
    use crate::test_utils::*;
    use chrono::{DateTime, Duration};
    use sea_orm::PaginatorTrait;

    fn new_record(member_id: i32, start: DateTime<Utc>) -> CreateDrivingRecordRequest {
        CreateDrivingRecordRequest {
            member_id,
            start_time: start,
            end_time: start + Duration::minutes(90),
            location_start: " Taipei ".to_string(),
            location_end: "Taichung".to_string(),
            fatigue_level: Some(FatigueLevel::Medium),
            fatigue_detected: Some(true),
        }
    }

    #[tokio::test]
    async fn test_create_record() {
        let db = setup_db().await;
        let member = create_member(&db, "driver@example.com", None).await;
        let service = DrivingRecordService::new(db.clone());

        let record = service
            .create_record(new_record(member.id, Utc::now()))
            .await
            .unwrap();

        assert_eq!(record.member_id, member.id);
        assert_eq!(record.location_start, "Taipei");
        assert_eq!(record.fatigue_level, Some(FatigueLevel::Medium));

        let stored = records::Entity::find_by_id(record.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.fatigue_level, Some(FatigueLevel::Medium));
    }

    #[tokio::test]
    async fn test_create_record_validation() {
        let db = setup_db().await;
        let member = create_member(&db, "driver@example.com", None).await;
        let service = DrivingRecordService::new(db.clone());

        let mut reversed = new_record(member.id, Utc::now());
        reversed.end_time = reversed.start_time - Duration::minutes(1);
        assert!(matches!(
            service.create_record(reversed).await,
            Err(AppError::ValidationError(_))
        ));

        let mut blank = new_record(member.id, Utc::now());
        blank.location_end = "  ".to_string();
        assert!(matches!(
            service.create_record(blank).await,
            Err(AppError::ValidationError(_))
        ));

        assert!(matches!(
            service.create_record(new_record(member.id + 100, Utc::now())).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(records::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_records_filters_and_orders() {
        let db = setup_db().await;
        let alice = create_member(&db, "alice@example.com", None).await;
        let bob = create_member(&db, "bob@example.com", None).await;
        let service = DrivingRecordService::new(db);

        let now = Utc::now();
        let later = service
            .create_record(new_record(alice.id, now))
            .await
            .unwrap();
        let earlier = service
            .create_record(new_record(alice.id, now - Duration::days(1)))
            .await
            .unwrap();
        service.create_record(new_record(bob.id, now)).await.unwrap();

        let all = service
            .list_records(&DrivingRecordQuery::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let alice_records = service
            .list_records(&DrivingRecordQuery {
                member_id: Some(alice.id),
            })
            .await
            .unwrap();
        let ids: Vec<i32> = alice_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![earlier.id, later.id]);
    }

    #[tokio::test]
    async fn test_delete_record_removes_logs() {
        let db = setup_db().await;
        let member = create_member(&db, "driver@example.com", None).await;
        let record = create_driving_record(&db, member.id).await;

        logs::ActiveModel {
            driving_record_id: Set(record.id),
            timestamp: Set(Utc::now()),
            blink_rate: Set(Some(20.0)),
            yawn_rate: Set(Some(1.0)),
            eye_closure_duration: Set(Some(0.4)),
            fatigue_index: Set(Some(6.5)),
            fatigue_detected: Set(true),
            created_at: Set(Utc::now()),
        }
        .insert(&db)
        .await
        .unwrap();

        let service = DrivingRecordService::new(db.clone());
        let summary = service.delete_record(record.id).await.unwrap();

        assert_eq!(summary.data_logs_deleted, 1);
        assert_eq!(logs::Entity::find().count(&db).await.unwrap(), 0);
        assert!(matches!(
            service.get_record(record.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_record(record.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
