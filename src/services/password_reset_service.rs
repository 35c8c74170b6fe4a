use crate::config::ResetConfig;
use crate::entities::{member_entity as members, reset_token_entity as tokens, ResetMethod};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::*;
use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 生成验证码时的最大重试次数
const MAX_CODE_ATTEMPTS: usize = 10;

#[derive(Clone)]
pub struct PasswordResetService {
    pool: DatabaseConnection,
    config: ResetConfig,
}

impl PasswordResetService {
    pub fn new(pool: DatabaseConnection, config: ResetConfig) -> Self {
        Self { pool, config }
    }

    /// 忘记密码（邮箱）：生成重置令牌，并以日志代替发送邮件
    pub async fn request_email_reset(
        &self,
        request: ForgotPasswordRequest,
    ) -> AppResult<ResetIssuedResponse> {
        let email = normalize_email(&request.email);

        let member = members::Entity::find()
            .filter(members::Column::Email.eq(email.as_str()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Email not found".to_string()))?;

        let ttl = ttl_from_minutes(self.config.email_token_ttl_minutes)?;
        let token = generate_url_safe_token();
        self.store_token(member.id, &token, ResetMethod::Email, ttl)
            .await?;

        log::info!(
            "Password reset link for member {}: {}?token={}",
            member.id,
            self.config.link_base_url,
            token
        );

        Ok(ResetIssuedResponse {
            expires_in: ttl.num_seconds(),
        })
    }

    /// 使用邮件令牌重置密码
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> AppResult<()> {
        validate_password(&request.new_password)?;

        let txn = self.pool.begin().await?;

        let token = tokens::Entity::find()
            .filter(tokens::Column::Token.eq(request.token.as_str()))
            .filter(tokens::Column::Method.eq(ResetMethod::Email))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::ValidationError("Invalid token".to_string()))?;

        if token.used {
            return Err(AppError::ValidationError("Token already used".to_string()));
        }
        if token.is_expired(Utc::now()) {
            return Err(AppError::ValidationError("Token expired".to_string()));
        }

        let password_hash = hash_password(&request.new_password)?;
        Self::consume_token(&txn, &token, password_hash).await?;

        txn.commit().await?;

        log::info!("Password reset by email for member {}", token.member_id);
        Ok(())
    }

    /// 忘记密码（手机）：生成 6 位验证码，并以日志代替发送短信
    pub async fn request_phone_reset(
        &self,
        request: ForgotPasswordByPhoneRequest,
    ) -> AppResult<ResetIssuedResponse> {
        let phone = normalize_phone(&request.phone_number);

        let member = members::Entity::find()
            .filter(members::Column::PhoneNumber.eq(phone.as_str()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Phone number not found".to_string()))?;

        let ttl = ttl_from_minutes(self.config.phone_code_ttl_minutes)?;
        self.purge_stale_phone_codes().await?;
        let code = self.unique_code().await?;
        self.store_token(member.id, &code, ResetMethod::Phone, ttl)
            .await?;

        log::info!("Password reset code for member {}: {}", member.id, code);

        Ok(ResetIssuedResponse {
            expires_in: ttl.num_seconds(),
        })
    }

    /// 校验手机验证码，不消耗验证码
    pub async fn verify_phone_code(&self, request: VerifyPhoneCodeRequest) -> AppResult<()> {
        let token = self
            .find_phone_code(&request.phone_number, &request.code)
            .await?
            .ok_or_else(invalid_code)?;

        if token.is_expired(Utc::now()) {
            return Err(AppError::ValidationError("Code expired".to_string()));
        }

        Ok(())
    }

    /// 使用手机验证码重置密码
    pub async fn reset_password_by_phone(
        &self,
        request: ResetPasswordByPhoneRequest,
    ) -> AppResult<()> {
        validate_password(&request.new_password)?;

        let token = self
            .find_phone_code(&request.phone_number, &request.code)
            .await?
            .filter(|t| t.is_usable(Utc::now()))
            .ok_or_else(invalid_code)?;

        let password_hash = hash_password(&request.new_password)?;

        let txn = self.pool.begin().await?;
        Self::consume_token(&txn, &token, password_hash).await?;
        txn.commit().await?;

        log::info!("Password reset by phone for member {}", token.member_id);
        Ok(())
    }

    async fn store_token(
        &self,
        member_id: i32,
        token: &str,
        method: ResetMethod,
        ttl: Duration,
    ) -> AppResult<tokens::Model> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::ConfigError("Reset token TTL out of range".to_string()))?;
        let model = tokens::ActiveModel {
            member_id: Set(member_id),
            token: Set(token.to_string()),
            method: Set(method),
            expires_at: Set(expires_at),
            used: Set(false),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(model)
    }

    /// 删除已使用或已过期的手机验证码
    ///
    /// token 列唯一，旧验证码不清理会持续占用 6 位数字空间。
    async fn purge_stale_phone_codes(&self) -> AppResult<u64> {
        let purged = tokens::Entity::delete_many()
            .filter(tokens::Column::Method.eq(ResetMethod::Phone))
            .filter(
                Condition::any()
                    .add(tokens::Column::Used.eq(true))
                    .add(tokens::Column::ExpiresAt.lt(Utc::now())),
            )
            .exec(&self.pool)
            .await?
            .rows_affected;

        if purged > 0 {
            log::debug!("Purged {purged} stale phone reset codes");
        }
        Ok(purged)
    }

    /// 生成未被任何令牌占用的验证码
    async fn unique_code(&self) -> AppResult<String> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_six_digit_code();
            let taken = tokens::Entity::find()
                .filter(tokens::Column::Token.eq(code.as_str()))
                .one(&self.pool)
                .await?
                .is_some();
            if !taken {
                return Ok(code);
            }
        }
        Err(AppError::InternalError(
            "Failed to generate a unique reset code".to_string(),
        ))
    }

    /// 查找属于该手机号、尚未使用的验证码
    async fn find_phone_code(&self, phone_number: &str, code: &str) -> AppResult<Option<tokens::Model>> {
        let phone = normalize_phone(phone_number);

        let token = tokens::Entity::find()
            .inner_join(members::Entity)
            .filter(members::Column::PhoneNumber.eq(phone.as_str()))
            .filter(tokens::Column::Token.eq(code.trim()))
            .filter(tokens::Column::Method.eq(ResetMethod::Phone))
            .filter(tokens::Column::Used.eq(false))
            .order_by_desc(tokens::Column::CreatedAt)
            .one(&self.pool)
            .await?;

        Ok(token)
    }

    /// 标记令牌已使用并更新密码
    ///
    /// 以 `used = false` 为条件更新，影响行数为 0 说明已被并发请求使用。
    async fn consume_token(
        txn: &DatabaseTransaction,
        token: &tokens::Model,
        password_hash: String,
    ) -> AppResult<()> {
        let result = tokens::Entity::update_many()
            .col_expr(tokens::Column::Used, Expr::value(true))
            .filter(tokens::Column::Id.eq(token.id))
            .filter(tokens::Column::Used.eq(false))
            .exec(txn)
            .await?;

        if result.rows_affected != 1 {
            return Err(AppError::ValidationError("Token already used".to_string()));
        }

        let member = members::Entity::find_by_id(token.member_id)
            .one(txn)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut member: members::ActiveModel = member.into();
        member.password = Set(password_hash);
        member.update(txn).await?;

        Ok(())
    }
}

fn ttl_from_minutes(minutes: i64) -> AppResult<Duration> {
    Duration::try_minutes(minutes)
        .filter(|ttl| *ttl > Duration::zero())
        .ok_or_else(|| AppError::ConfigError(format!("Invalid reset token TTL: {minutes} minutes")))
}

fn invalid_code() -> AppError {
    AppError::ValidationError("Invalid or expired code".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn service(db: &DatabaseConnection) -> PasswordResetService {
        PasswordResetService::new(db.clone(), ResetConfig::default())
    }

    fn validation_message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    async fn stored_password(db: &DatabaseConnection, member_id: i32) -> String {
        members::Entity::find_by_id(member_id)
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .password
    }

    #[tokio::test]
    async fn test_email_token_accepted_exactly_once() {
        let db = setup_db().await;
        let member = create_member(&db, "reset@example.com", None).await;
        let service = service(&db);

        let issued = service
            .request_email_reset(ForgotPasswordRequest {
                email: "Reset@Example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(issued.expires_in, 600);

        let token = tokens::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(token.method, ResetMethod::Email);
        assert_eq!(token.token.len(), URL_SAFE_TOKEN_LEN);

        service
            .reset_password(ResetPasswordRequest {
                token: token.token.clone(),
                new_password: "brandNewPass1".to_string(),
            })
            .await
            .unwrap();
        assert!(verify_password("brandNewPass1", &stored_password(&db, member.id).await).unwrap());

        let again = service
            .reset_password(ResetPasswordRequest {
                token: token.token.clone(),
                new_password: "anotherPass1".to_string(),
            })
            .await;
        assert_eq!(validation_message(again), "Token already used");
        assert!(verify_password("brandNewPass1", &stored_password(&db, member.id).await).unwrap());
    }

    #[tokio::test]
    async fn test_email_token_rejected_after_expiry() {
        let db = setup_db().await;
        let member = create_member(&db, "late@example.com", None).await;
        create_reset_token(
            &db,
            member.id,
            "expired-token",
            ResetMethod::Email,
            Utc::now() - Duration::seconds(1),
        )
        .await;

        let result = service(&db)
            .reset_password(ResetPasswordRequest {
                token: "expired-token".to_string(),
                new_password: "brandNewPass1".to_string(),
            })
            .await;
        assert_eq!(validation_message(result), "Token expired");
        assert!(verify_password(TEST_PASSWORD, &stored_password(&db, member.id).await).unwrap());
    }

    #[tokio::test]
    async fn test_unknown_email_and_token() {
        let db = setup_db().await;
        let service = service(&db);

        let missing = service
            .request_email_reset(ForgotPasswordRequest {
                email: "nobody@example.com".to_string(),
            })
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let invalid = service
            .reset_password(ResetPasswordRequest {
                token: "no-such-token".to_string(),
                new_password: "brandNewPass1".to_string(),
            })
            .await;
        assert_eq!(validation_message(invalid), "Invalid token");
    }

    #[tokio::test]
    async fn test_phone_code_cannot_reset_by_email_route() {
        let db = setup_db().await;
        let member = create_member(&db, "phone@example.com", Some("0912345678")).await;
        create_reset_token(
            &db,
            member.id,
            "123456",
            ResetMethod::Phone,
            Utc::now() + Duration::minutes(5),
        )
        .await;

        let result = service(&db)
            .reset_password(ResetPasswordRequest {
                token: "123456".to_string(),
                new_password: "brandNewPass1".to_string(),
            })
            .await;
        assert_eq!(validation_message(result), "Invalid token");
    }

    #[tokio::test]
    async fn test_phone_code_flow() {
        let db = setup_db().await;
        let member = create_member(&db, "phone@example.com", Some("0912345678")).await;
        let service = service(&db);

        let issued = service
            .request_phone_reset(ForgotPasswordByPhoneRequest {
                phone_number: "0912-345-678".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(issued.expires_in, 300);

        let code = tokens::Entity::find().one(&db).await.unwrap().unwrap().token;
        assert_eq!(code.len(), 6);

        service
            .verify_phone_code(VerifyPhoneCodeRequest {
                phone_number: "0912345678".to_string(),
                code: code.clone(),
            })
            .await
            .unwrap();

        // 校验不消耗验证码
        service
            .reset_password_by_phone(ResetPasswordByPhoneRequest {
                phone_number: "0912345678".to_string(),
                code: code.clone(),
                new_password: "phonePass123".to_string(),
            })
            .await
            .unwrap();
        assert!(verify_password("phonePass123", &stored_password(&db, member.id).await).unwrap());

        let reused = service
            .reset_password_by_phone(ResetPasswordByPhoneRequest {
                phone_number: "0912345678".to_string(),
                code: code.clone(),
                new_password: "otherPass123".to_string(),
            })
            .await;
        assert_eq!(validation_message(reused), "Invalid or expired code");

        let verify_used = service
            .verify_phone_code(VerifyPhoneCodeRequest {
                phone_number: "0912345678".to_string(),
                code,
            })
            .await;
        assert_eq!(validation_message(verify_used), "Invalid or expired code");
    }

    #[tokio::test]
    async fn test_phone_code_expired_or_wrong_owner() {
        let db = setup_db().await;
        let member = create_member(&db, "phone@example.com", Some("0912345678")).await;
        create_member(&db, "other@example.com", Some("0987654321")).await;
        create_reset_token(
            &db,
            member.id,
            "222222",
            ResetMethod::Phone,
            Utc::now() - Duration::minutes(1),
        )
        .await;
        let service = service(&db);

        let expired = service
            .verify_phone_code(VerifyPhoneCodeRequest {
                phone_number: "0912345678".to_string(),
                code: "222222".to_string(),
            })
            .await;
        assert_eq!(validation_message(expired), "Code expired");

        let expired_reset = service
            .reset_password_by_phone(ResetPasswordByPhoneRequest {
                phone_number: "0912345678".to_string(),
                code: "222222".to_string(),
                new_password: "phonePass123".to_string(),
            })
            .await;
        assert_eq!(validation_message(expired_reset), "Invalid or expired code");

        let wrong_owner = service
            .verify_phone_code(VerifyPhoneCodeRequest {
                phone_number: "0987654321".to_string(),
                code: "222222".to_string(),
            })
            .await;
        assert_eq!(validation_message(wrong_owner), "Invalid or expired code");
    }

    #[tokio::test]
    async fn test_out_of_range_ttl_is_config_error() {
        let db = setup_db().await;
        create_member(&db, "ttl@example.com", Some("0912345678")).await;
        let config = ResetConfig {
            email_token_ttl_minutes: i64::MAX / 2,
            phone_code_ttl_minutes: i64::MAX / 2,
            ..ResetConfig::default()
        };
        let service = PasswordResetService::new(db.clone(), config);

        let email = service
            .request_email_reset(ForgotPasswordRequest {
                email: "ttl@example.com".to_string(),
            })
            .await;
        assert!(matches!(email, Err(AppError::ConfigError(_))));

        let phone = service
            .request_phone_reset(ForgotPasswordByPhoneRequest {
                phone_number: "0912345678".to_string(),
            })
            .await;
        assert!(matches!(phone, Err(AppError::ConfigError(_))));
        assert!(tokens::Entity::find().one(&db).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_new_phone_code_purges_stale_codes() {
        let db = setup_db().await;
        let member = create_member(&db, "phone@example.com", Some("0912345678")).await;
        let other = create_member(&db, "other@example.com", Some("0987654321")).await;
        let now = Utc::now();

        create_reset_token(&db, member.id, "111111", ResetMethod::Phone, now - Duration::minutes(1)).await;
        let used = create_reset_token(&db, other.id, "222222", ResetMethod::Phone, now + Duration::minutes(5)).await;
        let mut used: tokens::ActiveModel = used.into();
        used.used = Set(true);
        used.update(&db).await.unwrap();
        create_reset_token(&db, other.id, "333333", ResetMethod::Phone, now + Duration::minutes(5)).await;
        create_reset_token(&db, member.id, "expired-email", ResetMethod::Email, now - Duration::minutes(1)).await;

        service(&db)
            .request_phone_reset(ForgotPasswordByPhoneRequest {
                phone_number: "0912345678".to_string(),
            })
            .await
            .unwrap();

        let remaining: Vec<String> = tokens::Entity::find()
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect();
        assert!(!remaining.contains(&"111111".to_string()));
        assert!(!remaining.contains(&"222222".to_string()));
        assert!(remaining.contains(&"333333".to_string()));
        assert!(remaining.contains(&"expired-email".to_string()));
        assert_eq!(remaining.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_phone_and_weak_password() {
        let db = setup_db().await;
        create_member(&db, "phone@example.com", Some("0912345678")).await;
        let service = service(&db);

        let missing = service
            .request_phone_reset(ForgotPasswordByPhoneRequest {
                phone_number: "0900000000".to_string(),
            })
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let weak = service
            .reset_password(ResetPasswordRequest {
                token: "whatever".to_string(),
                new_password: "short".to_string(),
            })
            .await;
        assert!(matches!(weak, Err(AppError::ValidationError(_))));
    }
}
