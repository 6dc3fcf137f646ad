use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::controllers::poll_controllers::models::{
    parse_question_id, VoteForm, NO_CHOICE_SELECTED, QUESTION_MISSING,
};
use crate::routes::poll_routes::results_path;
use crate::state::AppState;
use crate::templates::{render_detail, DetailContext};
use crate::utils::error::{AppError, AppResult};

pub async fn cast_vote(
    Path(question_id): Path<String>,
    State(state): State<AppState>,
    form: Option<Form<VoteForm>>,
) -> AppResult<Response> {
    let question_id = parse_question_id(&question_id)
        .ok_or_else(|| AppError::NotFound(QUESTION_MISSING.to_string()))?;

    tracing::debug!(question_id, "vote submitted");

    let question = state
        .store
        .find_question(question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(QUESTION_MISSING.to_string()))?;

    let payload = form.map(|Form(payload)| payload).unwrap_or_default();

    let recorded = match payload.choice_id() {
        Some(choice_id) => state.store.record_vote(question.id, choice_id).await?,
        None => false,
    };

    if !recorded {
        // Redisplay the voting form rather than rejecting the request.
        let choices = state.store.choices_for(question.id).await?;
        let page = render_detail(&DetailContext {
            question: &question,
            choices: &choices,
            error_message: Some(NO_CHOICE_SELECTED),
        });
        return Ok((StatusCode::OK, Html(page)).into_response());
    }

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, results_path(question.id))],
    )
        .into_response())
}
