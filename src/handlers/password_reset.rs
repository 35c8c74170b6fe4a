use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;
use crate::models::*;
use crate::services::PasswordResetService;

#[utoipa::path(
    post,
    path = "/forgot-password",
    tag = "password_reset",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "重置链接已发送", body = ResetIssuedResponse),
        (status = 404, description = "邮箱不存在", body = ApiErrorResponse)
    )
)]
pub async fn forgot_password(
    reset_service: web::Data<PasswordResetService>,
    request: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse> {
    match reset_service.request_email_reset(request.into_inner()).await {
        Ok(issued) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": issued,
            "message": "Password reset link sent"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/reset-password",
    tag = "password_reset",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "密码已重置", body = MessageResponse),
        (status = 400, description = "令牌无效、已使用或已过期", body = ApiErrorResponse),
        (status = 404, description = "用户不存在", body = ApiErrorResponse)
    )
)]
pub async fn reset_password(
    reset_service: web::Data<PasswordResetService>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse> {
    match reset_service.reset_password(request.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Password has been reset successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/forgot-password-phone",
    tag = "password_reset",
    request_body = ForgotPasswordByPhoneRequest,
    responses(
        (status = 200, description = "验证码已发送", body = ResetIssuedResponse),
        (status = 404, description = "手机号不存在", body = ApiErrorResponse)
    )
)]
pub async fn forgot_password_phone(
    reset_service: web::Data<PasswordResetService>,
    request: web::Json<ForgotPasswordByPhoneRequest>,
) -> Result<HttpResponse> {
    match reset_service.request_phone_reset(request.into_inner()).await {
        Ok(issued) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": issued,
            "message": "Verification code sent to phone"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/verify-phone-code",
    tag = "password_reset",
    request_body = VerifyPhoneCodeRequest,
    responses(
        (status = 200, description = "验证码有效", body = MessageResponse),
        (status = 400, description = "验证码无效或已过期", body = ApiErrorResponse)
    )
)]
pub async fn verify_phone_code(
    reset_service: web::Data<PasswordResetService>,
    request: web::Json<VerifyPhoneCodeRequest>,
) -> Result<HttpResponse> {
    match reset_service.verify_phone_code(request.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Phone code verified"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/reset-password-phone",
    tag = "password_reset",
    request_body = ResetPasswordByPhoneRequest,
    responses(
        (status = 200, description = "密码已重置", body = MessageResponse),
        (status = 400, description = "验证码无效或已过期", body = ApiErrorResponse),
        (status = 404, description = "用户不存在", body = ApiErrorResponse)
    )
)]
pub async fn reset_password_phone(
    reset_service: web::Data<PasswordResetService>,
    request: web::Json<ResetPasswordByPhoneRequest>,
) -> Result<HttpResponse> {
    match reset_service.reset_password_by_phone(request.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Password has been reset via phone successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn password_reset_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/forgot-password", web::post().to(forgot_password))
        .route("/reset-password", web::post().to(reset_password))
        .route("/forgot-password-phone", web::post().to(forgot_password_phone))
        .route("/verify-phone-code", web::post().to(verify_phone_code))
        .route("/reset-password-phone", web::post().to(reset_password_phone));
}
