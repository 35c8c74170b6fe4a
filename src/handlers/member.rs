use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;
use crate::models::*;
use crate::services::MemberService;

#[utoipa::path(
    post,
    path = "/members",
    tag = "member",
    request_body = Vec<CreateMemberRequest>,
    responses(
        (status = 200, description = "批量注册完成，返回实际新增的会员", body = Vec<MemberResponse>),
        (status = 400, description = "请求参数错误", body = ApiErrorResponse),
        (status = 500, description = "服务器内部错误", body = ApiErrorResponse)
    )
)]
pub async fn create_members(
    member_service: web::Data<MemberService>,
    request: web::Json<Vec<CreateMemberRequest>>,
) -> Result<HttpResponse> {
    match member_service.register_members(request.into_inner()).await {
        Ok(members) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": members
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "member",
    responses(
        (status = 200, description = "会员列表", body = Vec<MemberResponse>)
    )
)]
pub async fn list_members(member_service: web::Data<MemberService>) -> Result<HttpResponse> {
    match member_service.list_members().await {
        Ok(members) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": members
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "member",
    params(
        ("id" = i32, Path, description = "会员ID")
    ),
    responses(
        (status = 200, description = "会员详情", body = MemberResponse),
        (status = 404, description = "会员不存在", body = ApiErrorResponse)
    )
)]
pub async fn get_member(
    member_service: web::Data<MemberService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match member_service.get_member(path.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "member",
    params(
        ("id" = i32, Path, description = "会员ID")
    ),
    responses(
        (status = 200, description = "会员及其行程数据已删除", body = DeleteMemberResponse),
        (status = 404, description = "会员不存在", body = ApiErrorResponse)
    )
)]
pub async fn delete_member(
    member_service: web::Data<MemberService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match member_service.delete_member(path.into_inner()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": summary,
            "message": "Member deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "member",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "登录成功", body = LoginResponse),
        (status = 401, description = "邮箱或密码错误", body = ApiErrorResponse),
        (status = 400, description = "请求参数错误", body = ApiErrorResponse)
    )
)]
pub async fn login(
    member_service: web::Data<MemberService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    match member_service.login(request.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": LoginResponse { member },
            "message": "Login success"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn member_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("", web::post().to(create_members))
            .route("", web::get().to(list_members))
            .route("/{id}", web::get().to(get_member))
            .route("/{id}", web::delete().to(delete_member)),
    )
    .route("/login", web::post().to(login));
}
