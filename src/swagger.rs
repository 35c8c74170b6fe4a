use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{FatigueLevel, ResetMethod};
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::index,
        handlers::member::create_members,
        handlers::member::list_members,
        handlers::member::get_member,
        handlers::member::delete_member,
        handlers::member::login,
        handlers::driving_record::create_record,
        handlers::driving_record::list_records,
        handlers::driving_record::get_record,
        handlers::driving_record::delete_record,
        handlers::driving_data_log::create_log,
        handlers::driving_data_log::list_logs,
        handlers::password_reset::forgot_password,
        handlers::password_reset::reset_password,
        handlers::password_reset::forgot_password_phone,
        handlers::password_reset::verify_phone_code,
        handlers::password_reset::reset_password_phone,
        handlers::quiz::get_question,
        handlers::quiz::list_choices,
        handlers::quiz::create_question,
    ),
    components(
        schemas(
            CreateMemberRequest,
            MemberResponse,
            LoginRequest,
            LoginResponse,
            DeleteMemberResponse,
            CreateDrivingRecordRequest,
            DrivingRecordResponse,
            DeleteDrivingRecordResponse,
            FatigueLevel,
            CreateDrivingDataLogRequest,
            DrivingDataLogResponse,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            ForgotPasswordByPhoneRequest,
            VerifyPhoneCodeRequest,
            ResetPasswordByPhoneRequest,
            ResetIssuedResponse,
            ResetMethod,
            ChoiceBase,
            CreateQuestionRequest,
            QuestionResponse,
            ChoiceResponse,
            QuestionWithChoicesResponse,
            ApiError,
            ApiErrorResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "root", description = "Homepage"),
        (name = "member", description = "Member registration and login API"),
        (name = "driving_record", description = "Driving record API"),
        (name = "driving_data_log", description = "Continuous driving telemetry API"),
        (name = "password_reset", description = "Password reset by email token or phone code"),
        (name = "quiz", description = "Driving safety quiz API"),
    ),
    info(
        title = "Fatigue Backend API",
        version = "1.0.0",
        description = "Membership and driving-fatigue monitoring REST API"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
