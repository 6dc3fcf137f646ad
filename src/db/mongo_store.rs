use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};

use crate::db::store::PollStore;
use crate::models::poll_models::{Choice, Question};
use crate::utils::error::AppResult;

pub struct MongoPollStore {
    questions: Collection<Question>,
    choices: Collection<Choice>,
}

impl MongoPollStore {
    pub fn new(db: &Database) -> Self {
        Self {
            questions: db.collection::<Question>("questions"),
            choices: db.collection::<Choice>("choices"),
        }
    }
}

fn latest_sort() -> Document {
    doc! { "pub_date": -1 }
}

fn choices_filter(question_id: i64) -> Document {
    doc! { "question_id": question_id }
}

/// Matches the choice only when it belongs to the question being voted on.
fn vote_filter(question_id: i64, choice_id: i64) -> Document {
    doc! { "_id": choice_id, "question_id": question_id }
}

fn vote_update() -> Document {
    doc! { "$inc": { "votes": 1 } }
}

#[async_trait]
impl PollStore for MongoPollStore {
    async fn latest_questions(&self, limit: i64) -> AppResult<Vec<Question>> {
        let cursor = self
            .questions
            .find(doc! {})
            .sort(latest_sort())
            .limit(limit)
            .await?;

        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_question(&self, id: i64) -> AppResult<Option<Question>> {
        Ok(self.questions.find_one(doc! { "_id": id }).await?)
    }

    async fn choices_for(&self, question_id: i64) -> AppResult<Vec<Choice>> {
        let cursor = self
            .choices
            .find(choices_filter(question_id))
            .sort(doc! { "_id": 1 })
            .await?;

        let choices: Vec<Choice> = cursor.try_collect().await?;
        Ok(choices)
    }

    async fn record_vote(&self, question_id: i64, choice_id: i64) -> AppResult<bool> {
        let update_result = self
            .choices
            .update_one(vote_filter(question_id, choice_id), vote_update())
            .await?;

        Ok(update_result.matched_count > 0)
    }
}
