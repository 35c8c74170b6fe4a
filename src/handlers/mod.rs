pub mod driving_data_log;
pub mod driving_record;
pub mod member;
pub mod password_reset;
pub mod quiz;

pub use driving_data_log::driving_data_log_config;
pub use driving_record::driving_record_config;
pub use member::member_config;
pub use password_reset::password_reset_config;
pub use quiz::quiz_config;

use actix_web::error::InternalError;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use serde_json::json;
use std::fmt::{Debug, Display};

use crate::error::AppError;

#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "首页问候", body = crate::models::MessageResponse)
    )
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Hello, this is the homepage!"
    }))
}

/// 请求体、路径与查询参数解析失败时统一返回 400 错误结构
pub fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, req| bad_request(err, req)))
        .app_data(web::PathConfig::default().error_handler(|err, req| bad_request(err, req)))
        .app_data(web::QueryConfig::default().error_handler(|err, req| bad_request(err, req)));
}

fn bad_request<E>(err: E, req: &HttpRequest) -> actix_web::Error
where
    E: Debug + Display + 'static,
{
    log::debug!("Rejected request to {}: {}", req.path(), err);
    let response = AppError::ValidationError(err.to_string()).error_response();
    InternalError::from_response(err, response).into()
}
