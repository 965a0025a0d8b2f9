use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: i32,
    pub question_id: i32,
    pub content: String,
    pub author: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
    pub is_accepted: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Draft {
    pub content: String,
}

impl Draft {
    pub fn is_postable(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
