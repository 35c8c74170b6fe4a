use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    #[schema(example = "driver@example.com")]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[schema(example = "newPassword123")]
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordByPhoneRequest {
    #[schema(example = "0912345678")]
    pub phone_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPhoneCodeRequest {
    #[schema(example = "0912345678")]
    pub phone_number: String,
    #[schema(example = "123456")]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordByPhoneRequest {
    #[schema(example = "0912345678")]
    pub phone_number: String,
    #[schema(example = "123456")]
    pub code: String,
    #[schema(example = "newPassword123")]
    pub new_password: String,
}

/// 令牌/验证码已生成
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResetIssuedResponse {
    /// 有效期(秒)
    pub expires_in: i64,
}
