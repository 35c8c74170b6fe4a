use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;
use crate::models::*;
use crate::services::DrivingDataLogService;

#[utoipa::path(
    post,
    path = "/driving_data_logs",
    tag = "driving_data_log",
    request_body = CreateDrivingDataLogRequest,
    responses(
        (status = 200, description = "数据已记录", body = DrivingDataLogResponse),
        (status = 400, description = "参数错误或同一时间戳已存在", body = ApiErrorResponse),
        (status = 404, description = "行程不存在", body = ApiErrorResponse)
    )
)]
pub async fn create_log(
    log_service: web::Data<DrivingDataLogService>,
    request: web::Json<CreateDrivingDataLogRequest>,
) -> Result<HttpResponse> {
    match log_service.create_log(request.into_inner()).await {
        Ok(log) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": log
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/driving_data_logs/{driving_record_id}",
    tag = "driving_data_log",
    params(
        ("driving_record_id" = i32, Path, description = "行程ID")
    ),
    responses(
        (status = 200, description = "按时间升序的连续数据", body = Vec<DrivingDataLogResponse>)
    )
)]
pub async fn list_logs(
    log_service: web::Data<DrivingDataLogService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match log_service.list_logs(path.into_inner()).await {
        Ok(logs) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": logs
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn driving_data_log_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/driving_data_logs")
            .route("", web::post().to(create_log))
            .route("/{driving_record_id}", web::get().to(list_logs)),
    );
}
