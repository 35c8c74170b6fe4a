use crate::entities::{choice_entity as choices, question_entity as questions};
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

#[derive(Clone)]
pub struct QuizService {
    pool: DatabaseConnection,
}

impl QuizService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_question(&self, question_id: i32) -> AppResult<QuestionResponse> {
        let question = questions::Entity::find_by_id(question_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Question is not found".to_string()))?;
        Ok(question.into())
    }

    /// 查询题目的全部选项；没有选项视为不存在
    pub async fn list_choices(&self, question_id: i32) -> AppResult<Vec<ChoiceResponse>> {
        let list = choices::Entity::find()
            .filter(choices::Column::QuestionId.eq(question_id))
            .order_by_asc(choices::Column::Id)
            .all(&self.pool)
            .await?;

        if list.is_empty() {
            return Err(AppError::NotFound("Choices is not found".to_string()));
        }

        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 新建题目及其选项（同一事务）
    pub async fn create_question(
        &self,
        request: CreateQuestionRequest,
    ) -> AppResult<QuestionWithChoicesResponse> {
        let question_text = request.question_text.trim().to_string();
        if question_text.is_empty() {
            return Err(AppError::ValidationError(
                "Question text must not be empty".to_string(),
            ));
        }
        if request.choices.iter().any(|c| c.choice_text.trim().is_empty()) {
            return Err(AppError::ValidationError(
                "Choice text must not be empty".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let exists = questions::Entity::find()
            .filter(questions::Column::QuestionText.eq(question_text.as_str()))
            .one(&txn)
            .await?
            .is_some();
        if exists {
            return Err(duplicate_question());
        }

        let question = questions::ActiveModel {
            question_text: Set(question_text),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            let err = AppError::from(e);
            if err.is_unique_violation() {
                duplicate_question()
            } else {
                err
            }
        })?;

        let mut created = Vec::with_capacity(request.choices.len());
        for choice in request.choices {
            let model = choices::ActiveModel {
                choice_text: Set(choice.choice_text.trim().to_string()),
                is_correct: Set(choice.is_correct),
                question_id: Set(question.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            created.push(ChoiceResponse::from(model));
        }

        txn.commit().await?;

        log::info!(
            "Created question {} with {} choices",
            question.id,
            created.len()
        );

        Ok(QuestionWithChoicesResponse {
            question: question.into(),
            choices: created,
        })
    }
}

fn duplicate_question() -> AppError {
    AppError::Conflict("Question already exists".to_string())
}
