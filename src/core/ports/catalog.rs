use crate::core::models::{answer::Answer, question::Question, tag::Tag};
use crate::error::Error;

pub trait QuestionCatalog {
    fn questions(&self) -> Result<Vec<Question>, Error>;
    fn get(&self, id: i32) -> Result<Question, Error>;
    fn answers(&self, question_id: i32) -> Result<Vec<Answer>, Error>;
}

pub trait TagCatalog {
    fn tags(&self) -> Result<Vec<Tag>, Error>;
}

pub trait Catalog: QuestionCatalog + TagCatalog {}
