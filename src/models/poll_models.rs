use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: i64,
    pub question_text: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub pub_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Choice {
    #[serde(rename = "_id")]
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: u32,
}
