use crate::entities::{
    driving_data_log_entity as logs, driving_record_entity as records,
    member_entity as members, reset_token_entity as tokens,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

#[derive(Clone)]
pub struct MemberService {
    pool: DatabaseConnection,
}

impl MemberService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 批量注册会员
    ///
    /// 先校验全部请求，任一无效则整批拒绝。之后逐条写入，
    /// 邮箱已存在的会员被跳过，不影响同批其余会员。
    pub async fn register_members(
        &self,
        requests: Vec<CreateMemberRequest>,
    ) -> AppResult<Vec<MemberResponse>> {
        let requests = requests
            .into_iter()
            .map(Self::validate_new_member)
            .collect::<AppResult<Vec<_>>>()?;

        let mut created = Vec::with_capacity(requests.len());
        for request in requests {
            match self.insert_member(&request).await? {
                Some(member) => {
                    log::info!("Registered member {} ({})", member.id, member.email);
                    created.push(MemberResponse::from(member));
                }
                None => {
                    log::warn!("Skipping member with duplicate email: {}", request.email);
                }
            }
        }

        Ok(created)
    }

    /// 查询全部会员
    pub async fn list_members(&self) -> AppResult<Vec<MemberResponse>> {
        let list = members::Entity::find()
            .order_by_asc(members::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get_member(&self, member_id: i32) -> AppResult<MemberResponse> {
        let member = members::Entity::find_by_id(member_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;
        Ok(member.into())
    }

    /// 删除会员，并在同一事务内删除其行程、行程数据与重置令牌
    pub async fn delete_member(&self, member_id: i32) -> AppResult<DeleteMemberResponse> {
        let txn = self.pool.begin().await?;

        members::Entity::find_by_id(member_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let record_ids: Vec<i32> = records::Entity::find()
            .filter(records::Column::MemberId.eq(member_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();

        let data_logs_deleted = if record_ids.is_empty() {
            0
        } else {
            logs::Entity::delete_many()
                .filter(logs::Column::DrivingRecordId.is_in(record_ids))
                .exec(&txn)
                .await?
                .rows_affected
        };

        let driving_records_deleted = records::Entity::delete_many()
            .filter(records::Column::MemberId.eq(member_id))
            .exec(&txn)
            .await?
            .rows_affected;

        let reset_tokens_deleted = tokens::Entity::delete_many()
            .filter(tokens::Column::MemberId.eq(member_id))
            .exec(&txn)
            .await?
            .rows_affected;

        members::Entity::delete_by_id(member_id).exec(&txn).await?;

        txn.commit().await?;

        log::info!(
            "Deleted member {member_id} with {driving_records_deleted} driving records and {data_logs_deleted} data logs"
        );

        Ok(DeleteMemberResponse {
            member_id,
            driving_records_deleted,
            data_logs_deleted,
            reset_tokens_deleted,
        })
    }

    /// 邮箱密码登录，不签发任何会话或令牌
    pub async fn login(&self, request: LoginRequest) -> AppResult<MemberResponse> {
        let email = normalize_email(&request.email);

        let member = members::Entity::find()
            .filter(members::Column::Email.eq(email.as_str()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &member.password)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        log::info!("Member {} logged in", member.id);
        Ok(member.into())
    }

    fn validate_new_member(mut request: CreateMemberRequest) -> AppResult<CreateMemberRequest> {
        request.name = request.name.trim().to_string();
        if request.name.is_empty() {
            return Err(AppError::ValidationError("Name must not be empty".to_string()));
        }

        request.email = normalize_email(&request.email);
        validate_email(&request.email)?;

        if !(0..=150).contains(&request.age) {
            return Err(AppError::ValidationError(
                "Age must be between 0 and 150".to_string(),
            ));
        }

        validate_password(&request.password)?;

        request.phone_number = match request.phone_number.as_deref().map(normalize_phone) {
            Some(phone) if phone.is_empty() => None,
            Some(phone) => {
                validate_phone(&phone)?;
                Some(phone)
            }
            None => None,
        };

        Ok(request)
    }

    /// 写入单个会员；邮箱重复时返回 None
    async fn insert_member(
        &self,
        request: &CreateMemberRequest,
    ) -> AppResult<Option<members::Model>> {
        let exists = members::Entity::find()
            .filter(members::Column::Email.eq(request.email.as_str()))
            .one(&self.pool)
            .await?
            .is_some();
        if exists {
            return Ok(None);
        }

        let password_hash = hash_password(&request.password)?;

        let result = members::ActiveModel {
            name: Set(request.name.clone()),
            email: Set(request.email.clone()),
            age: Set(request.age),
            password: Set(password_hash),
            phone_number: Set(request.phone_number.clone()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await;

        match result {
            Ok(member) => Ok(Some(member)),
            // 并发注册同一邮箱时由唯一索引兜底
            Err(e) => {
                let err = AppError::from(e);
                if err.is_unique_violation() {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }
}
