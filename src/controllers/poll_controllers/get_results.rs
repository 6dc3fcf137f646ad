use axum::extract::{Path, State};

use crate::controllers::poll_controllers::models::parse_question_id;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn get_results(
    Path(question_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<String> {
    let not_found = || AppError::NotFound("No response on this".to_string());

    let id = parse_question_id(&question_id).ok_or_else(not_found)?;

    // Any lookup failure, not only a missing question, is reported as 404.
    let question = match state.store.find_question(id).await {
        Ok(Some(question)) => question,
        Ok(None) => return Err(not_found()),
        Err(e) => {
            tracing::warn!(question_id = id, error = %e, "results lookup failed");
            return Err(not_found());
        }
    };

    Ok(format!("Youre looking at the results of question {}.", question.id))
}
