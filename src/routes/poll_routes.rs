use axum::{Router, routing::{get, post}};
use crate::controllers::poll_controllers::{cast_vote, get_poll, get_results, polls};
use crate::state::AppState;

pub fn poll_routes(state: AppState) -> Router {
    Router::new()
        .route("/polls/", get(polls::get_latest_polls))
        .route("/polls/:question_id/", get(get_poll::get_poll))
        .route("/polls/:question_id/results/", get(get_results::get_results))
        .route("/polls/:question_id/vote/", post(cast_vote::cast_vote))
        .with_state(state)
}

pub fn detail_path(question_id: i64) -> String {
    format!("/polls/{}/", question_id)
}

pub fn results_path(question_id: i64) -> String {
    format!("/polls/{}/results/", question_id)
}

pub fn vote_path(question_id: i64) -> String {
    format!("/polls/{}/vote/", question_id)
}
