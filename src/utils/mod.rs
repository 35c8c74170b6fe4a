pub mod code_generator;
pub mod password;
pub mod validation;

pub use code_generator::{generate_six_digit_code, generate_url_safe_token, URL_SAFE_TOKEN_LEN};
pub use password::*;
pub use validation::*;
