pub mod common;
pub mod driving_data_log;
pub mod driving_record;
pub mod member;
pub mod password_reset;
pub mod quiz;

pub use common::*;
pub use driving_data_log::*;
pub use driving_record::*;
pub use member::*;
pub use password_reset::*;
pub use quiz::*;
