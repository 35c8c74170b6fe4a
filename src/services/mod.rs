pub mod driving_data_log_service;
pub mod driving_record_service;
pub mod member_service;
pub mod password_reset_service;
pub mod quiz_service;

pub use driving_data_log_service::*;
pub use driving_record_service::*;
pub use member_service::*;
pub use password_reset_service::*;
pub use quiz_service::*;
