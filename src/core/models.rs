pub mod answer;
pub mod common;
pub mod draft;
pub mod question;
pub mod tag;
pub mod vote;
