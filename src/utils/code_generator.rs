use rand::Rng;

/// base64url 字母表
const URL_SAFE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// 重置链接令牌长度，43 个字符约合 258 位随机性
pub const URL_SAFE_TOKEN_LEN: usize = 43;

/// 生成6位数字代码（用于手机验证码）
pub fn generate_six_digit_code() -> String {
    let mut rng = rand::thread_rng();
    format!("{:06}", rng.gen_range(100000..=999999))
}

/// 生成可直接放进 URL 的随机令牌（用于邮件重置链接）
pub fn generate_url_safe_token() -> String {
    let mut rng = rand::thread_rng();
    (0..URL_SAFE_TOKEN_LEN)
        .map(|_| URL_SAFE_ALPHABET[rng.gen_range(0..URL_SAFE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_six_digit_code() {
        let code = generate_six_digit_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        let code_num: u32 = code.parse().unwrap();
        assert!((100000..=999999).contains(&code_num));
    }

    #[test]
    fn test_generate_url_safe_token() {
        let token = generate_url_safe_token();
        assert_eq!(token.len(), URL_SAFE_TOKEN_LEN);
        assert!(
            token
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        );
    }

    #[test]
    fn test_url_safe_tokens_differ() {
        assert_ne!(generate_url_safe_token(), generate_url_safe_token());
    }
}
