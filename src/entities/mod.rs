pub mod choices;
pub mod driving_data_logs;
pub mod driving_records;
pub mod members;
pub mod questions;
pub mod reset_tokens;

pub use choices as choice_entity;
pub use driving_data_logs as driving_data_log_entity;
pub use driving_records as driving_record_entity;
pub use members as member_entity;
pub use questions as question_entity;
pub use reset_tokens as reset_token_entity;

pub use driving_records::FatigueLevel;
pub use reset_tokens::ResetMethod;
