use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub author: String,
    pub votes: i64,
    pub answers: i64,
    pub views: i64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub is_answered: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Create {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Answered,
    Unanswered,
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "answered" => Ok(Self::Answered),
            "unanswered" => Ok(Self::Unanswered),
            other => Err(Error::BusinessError(format!("unknown filter: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Votes,
    Answers,
    Views,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "votes" => Ok(Self::Votes),
            "answers" => Ok(Self::Answers),
            "views" => Ok(Self::Views),
            other => Err(Error::BusinessError(format!("unknown sort key: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrowseQuery {
    pub term: String,
    pub filter: CategoryFilter,
    pub sort: SortKey,
}
