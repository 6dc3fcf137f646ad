//! In-memory poll store backing the handler tests.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::store::PollStore;
use crate::models::poll_models::{Choice, Question};
use crate::utils::error::AppResult;

#[derive(Default)]
pub struct InMemoryPollStore {
    questions: RwLock<Vec<Question>>,
    choices: RwLock<Vec<Choice>>,
}

impl InMemoryPollStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_question(self, question: Question) -> Self {
        self.questions.write().push(question);
        self
    }

    pub fn with_choice(self, choice: Choice) -> Self {
        self.choices.write().push(choice);
        self
    }

    pub fn votes_of(&self, choice_id: i64) -> Option<u32> {
        self.choices
            .read()
            .iter()
            .find(|choice| choice.id == choice_id)
            .map(|choice| choice.votes)
    }
}

#[async_trait]
impl PollStore for InMemoryPollStore {
    async fn latest_questions(&self, limit: i64) -> AppResult<Vec<Question>> {
        let mut questions = self.questions.read().clone();
        questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        questions.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(questions)
    }

    async fn find_question(&self, id: i64) -> AppResult<Option<Question>> {
        Ok(self.questions.read().iter().find(|q| q.id == id).cloned())
    }

    async fn choices_for(&self, question_id: i64) -> AppResult<Vec<Choice>> {
        let mut choices: Vec<Choice> = self
            .choices
            .read()
            .iter()
            .filter(|choice| choice.question_id == question_id)
            .cloned()
            .collect();
        choices.sort_by_key(|choice| choice.id);
        Ok(choices)
    }

    async fn record_vote(&self, question_id: i64, choice_id: i64) -> AppResult<bool> {
        let mut choices = self.choices.write();
        match choices
            .iter_mut()
            .find(|choice| choice.id == choice_id && choice.question_id == question_id)
        {
            Some(choice) => {
                choice.votes += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn question(id: i64, days_ago: i64) -> Question {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Question {
            id,
            question_text: format!("Question {}", id),
            pub_date: base - Duration::days(days_ago),
        }
    }

    fn choice(id: i64, question_id: i64, votes: u32) -> Choice {
        Choice {
            id,
            question_id,
            choice_text: format!("Choice {}", id),
            votes,
        }
    }

    #[tokio::test]
    async fn latest_questions_are_newest_first_and_capped() {
        let store = (0..8).fold(InMemoryPollStore::new(), |store, i| {
            store.with_question(question(i + 1, i))
        });

        let latest = store.latest_questions(5).await.unwrap();
        let ids: Vec<i64> = latest.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn record_vote_only_touches_owned_choice() {
        let store = InMemoryPollStore::new()
            .with_question(question(1, 0))
            .with_question(question(2, 0))
            .with_choice(choice(10, 1, 0))
            .with_choice(choice(20, 2, 4));

        assert!(store.record_vote(1, 10).await.unwrap());
        assert!(!store.record_vote(1, 20).await.unwrap());
        assert!(!store.record_vote(1, 99).await.unwrap());

        assert_eq!(store.votes_of(10), Some(1));
        assert_eq!(store.votes_of(20), Some(4));
    }

    #[tokio::test]
    async fn concurrent_votes_are_not_lost() {
        let store = std::sync::Arc::new(
            InMemoryPollStore::new()
                .with_question(question(1, 0))
                .with_choice(choice(10, 1, 0)),
        );

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.record_vote(1, 10).await.unwrap() })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap());
        }

        assert_eq!(store.votes_of(10), Some(50));
    }
}
