use axum::{extract::State, response::Html};

use crate::controllers::poll_controllers::models::LATEST_QUESTION_LIMIT;
use crate::state::AppState;
use crate::templates::render_index;
use crate::utils::error::AppResult;

pub async fn get_latest_polls(State(state): State<AppState>) -> AppResult<Html<String>> {
    let latest_question_list = state
        .store
        .latest_questions(LATEST_QUESTION_LIMIT)
        .await?;

    Ok(Html(render_index(&latest_question_list)))
}
