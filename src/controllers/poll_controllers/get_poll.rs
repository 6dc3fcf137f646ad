use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::controllers::poll_controllers::models::{parse_question_id, QUESTION_MISSING};
use crate::state::AppState;
use crate::templates::{render_detail, DetailContext};
use crate::utils::error::{AppError, AppResult};

pub async fn get_poll(
    Path(question_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Html<String>> {
    let question_id = parse_question_id(&question_id)
        .ok_or_else(|| AppError::NotFound(QUESTION_MISSING.to_string()))?;

    let question = state
        .store
        .find_question(question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(QUESTION_MISSING.to_string()))?;

    let choices = state.store.choices_for(question.id).await?;

    Ok(Html(render_detail(&DetailContext {
        question: &question,
        choices: &choices,
        error_message: None,
    })))
}
