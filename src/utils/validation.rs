use regex::Regex;
use std::sync::LazyLock;
use crate::error::{AppError, AppResult};

static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
});

// 只接受 ASCII 数字，\d 会匹配其他文字的数字
static PHONE_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$"));

fn compiled(regex: &'static Result<Regex, regex::Error>) -> AppResult<&'static Regex> {
    regex
        .as_ref()
        .map_err(|e| AppError::InternalError(format!("Invalid regex: {e}")))
}

/// 验证邮箱格式
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = compiled(&EMAIL_REGEX)?;

    if !email_regex.is_match(email) {
        return Err(AppError::ValidationError(format!(
            "Invalid email address: {email}"
        )));
    }

    Ok(())
}

/// 验证手机号格式：可选 + 号，8 到 15 位数字
pub fn validate_phone(phone: &str) -> AppResult<()> {
    let phone_regex = compiled(&PHONE_REGEX)?;

    if !phone_regex.is_match(phone) {
        return Err(AppError::ValidationError(format!(
            "Invalid phone number: {phone}"
        )));
    }

    Ok(())
}

/// 统一邮箱格式：去除首尾空白并转为小写
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 去除手机号中的空格与连字符
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}
