use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;
use crate::models::*;
use crate::services::QuizService;

#[utoipa::path(
    get,
    path = "/question/{id}",
    tag = "quiz",
    params(
        ("id" = i32, Path, description = "题目ID")
    ),
    responses(
        (status = 200, description = "题目", body = QuestionResponse),
        (status = 404, description = "题目不存在", body = ApiErrorResponse)
    )
)]
pub async fn get_question(
    quiz_service: web::Data<QuizService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match quiz_service.get_question(path.into_inner()).await {
        Ok(question) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": question
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/choice/{question_id}",
    tag = "quiz",
    params(
        ("question_id" = i32, Path, description = "题目ID")
    ),
    responses(
        (status = 200, description = "题目的全部选项", body = Vec<ChoiceResponse>),
        (status = 404, description = "没有选项", body = ApiErrorResponse)
    )
)]
pub async fn list_choices(
    quiz_service: web::Data<QuizService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match quiz_service.list_choices(path.into_inner()).await {
        Ok(choices) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": choices
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/questions",
    tag = "quiz",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "题目已创建", body = QuestionWithChoicesResponse),
        (status = 400, description = "请求参数错误", body = ApiErrorResponse),
        (status = 409, description = "题目已存在", body = ApiErrorResponse)
    )
)]
pub async fn create_question(
    quiz_service: web::Data<QuizService>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse> {
    match quiz_service.create_question(request.into_inner()).await {
        Ok(created) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": created
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn quiz_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/question/{id}", web::get().to(get_question))
        .route("/choice/{question_id}", web::get().to(list_choices))
        .route("/questions", web::post().to(create_question));
}
