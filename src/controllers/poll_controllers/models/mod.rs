use serde::Deserialize;

pub const LATEST_QUESTION_LIMIT: i64 = 5;

pub const QUESTION_MISSING: &str = "Question does not exist";

pub const NO_CHOICE_SELECTED: &str = "You didnt select a choice";

#[derive(Deserialize, Debug, Default)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl VoteForm {
    /// The submitted choice id, if the field is present and numeric.
    pub fn choice_id(&self) -> Option<i64> {
        self.choice.as_deref()?.trim().parse().ok()
    }
}

/// Parses a question id path segment. Only plain digits name a question; signs are rejected.
pub fn parse_question_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
