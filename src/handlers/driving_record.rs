use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;
use crate::models::*;
use crate::services::DrivingRecordService;

#[utoipa::path(
    post,
    path = "/driving_records",
    tag = "driving_record",
    request_body = CreateDrivingRecordRequest,
    responses(
        (status = 200, description = "行程已创建", body = DrivingRecordResponse),
        (status = 400, description = "请求参数错误", body = ApiErrorResponse),
        (status = 404, description = "会员不存在", body = ApiErrorResponse)
    )
)]
pub async fn create_record(
    record_service: web::Data<DrivingRecordService>,
    request: web::Json<CreateDrivingRecordRequest>,
) -> Result<HttpResponse> {
    match record_service.create_record(request.into_inner()).await {
        Ok(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": record
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/driving_records",
    tag = "driving_record",
    params(DrivingRecordQuery),
    responses(
        (status = 200, description = "行程列表", body = Vec<DrivingRecordResponse>)
    )
)]
pub async fn list_records(
    record_service: web::Data<DrivingRecordService>,
    query: web::Query<DrivingRecordQuery>,
) -> Result<HttpResponse> {
    match record_service.list_records(&query).await {
        Ok(records) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": records
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/driving_records/{id}",
    tag = "driving_record",
    params(
        ("id" = i32, Path, description = "行程ID")
    ),
    responses(
        (status = 200, description = "行程详情", body = DrivingRecordResponse),
        (status = 404, description = "行程不存在", body = ApiErrorResponse)
    )
)]
pub async fn get_record(
    record_service: web::Data<DrivingRecordService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match record_service.get_record(path.into_inner()).await {
        Ok(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": record
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/driving_records/{id}",
    tag = "driving_record",
    params(
        ("id" = i32, Path, description = "行程ID")
    ),
    responses(
        (status = 200, description = "行程及其连续数据已删除", body = DeleteDrivingRecordResponse),
        (status = 404, description = "行程不存在", body = ApiErrorResponse)
    )
)]
pub async fn delete_record(
    record_service: web::Data<DrivingRecordService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match record_service.delete_record(path.into_inner()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": summary,
            "message": "Driving record deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn driving_record_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/driving_records")
            .route("", web::post().to(create_record))
            .route("", web::get().to(list_records))
            .route("/{id}", web::get().to(get_record))
            .route("/{id}", web::delete().to(delete_record)),
    );
}
