use crate::entities::{choice_entity, question_entity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChoiceBase {
    pub choice_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    pub choices: Vec<ChoiceBase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub id: i32,
    pub question_text: String,
}

impl From<question_entity::Model> for QuestionResponse {
    fn from(m: question_entity::Model) -> Self {
        Self {
            id: m.id,
            question_text: m.question_text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChoiceResponse {
    pub id: i32,
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: i32,
}

impl From<choice_entity::Model> for ChoiceResponse {
    fn from(m: choice_entity::Model) -> Self {
        Self {
            id: m.id,
            choice_text: m.choice_text,
            is_correct: m.is_correct,
            question_id: m.question_id,
        }
    }
}

/// 新建题目结果（题目与全部选项）
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionWithChoicesResponse {
    pub question: QuestionResponse,
    pub choices: Vec<ChoiceResponse>,
}
