//! Storage seam between the poll handlers and the database.

use async_trait::async_trait;

use crate::models::poll_models::{Choice, Question};
use crate::utils::error::AppResult;

/// Read access to questions and choices plus the one mutation the app performs.
#[async_trait]
pub trait PollStore: Send + Sync {
    /// Most recently published questions, newest first, at most `limit` of them.
    async fn latest_questions(&self, limit: i64) -> AppResult<Vec<Question>>;

    async fn find_question(&self, id: i64) -> AppResult<Option<Question>>;

    /// Choices of one question in id order.
    async fn choices_for(&self, question_id: i64) -> AppResult<Vec<Choice>>;

    /// Adds one vote to `choice_id` if it belongs to `question_id`.
    ///
    /// Returns `false` when no such choice exists. The increment happens in a
    /// single relative update, so concurrent votes are never lost.
    async fn record_vote(&self, question_id: i64, choice_id: i64) -> AppResult<bool>;
}
