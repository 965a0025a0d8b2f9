use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub count: i64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Hot,
    Rising,
    Steady,
    Quiet,
}

impl Weight {
    pub fn for_count(count: i64) -> Self {
        if count > 800 {
            Self::Hot
        } else if count > 400 {
            Self::Rising
        } else if count > 200 {
            Self::Steady
        } else {
            Self::Quiet
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_tags: usize,
    pub total_questions: i64,
    pub showing: usize,
}
