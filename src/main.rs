use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use fatigue_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().map_err(std::io::Error::other)?;

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .map_err(std::io::Error::other)?;

    // 建表
    run_migrations(&pool)
        .await
        .map_err(std::io::Error::other)?;

    // 创建服务
    let member_service = MemberService::new(pool.clone());
    let driving_record_service = DrivingRecordService::new(pool.clone());
    let driving_data_log_service = DrivingDataLogService::new(pool.clone());
    let password_reset_service = PasswordResetService::new(pool.clone(), config.reset.clone());
    let quiz_service = QuizService::new(pool.clone());

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(member_service.clone()))
            .app_data(web::Data::new(driving_record_service.clone()))
            .app_data(web::Data::new(driving_data_log_service.clone()))
            .app_data(web::Data::new(password_reset_service.clone()))
            .app_data(web::Data::new(quiz_service.clone()))
            .configure(handlers::extractor_config)
            .configure(swagger_config)
            .route("/", web::get().to(handlers::index))
            .service(
                web::scope("/api/v1")
                    .configure(handlers::member_config)
                    .configure(handlers::driving_record_config)
                    .configure(handlers::driving_data_log_config)
                    .configure(handlers::password_reset_config)
                    .configure(handlers::quiz_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
