use actix_cors::Cors;

/// 跨域策略：允许任意来源访问 API
///
/// 服务不使用 Cookie 或会话，因此不开启凭据支持。
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
