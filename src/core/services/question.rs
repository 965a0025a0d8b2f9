use crate::core::models::answer::Answer;
use crate::core::models::question::{BrowseQuery, CategoryFilter, Question, SortKey};
use crate::core::ports::catalog::QuestionCatalog;
use crate::error::Error;
use itertools::Itertools;
use log::debug;

pub fn filter_by_category(records: Vec<Question>, filter: CategoryFilter) -> Vec<Question> {
    match filter {
        CategoryFilter::All => records,
        CategoryFilter::Answered => records.into_iter().filter(|q| q.is_answered).collect(),
        CategoryFilter::Unanswered => records.into_iter().filter(|q| !q.is_answered).collect(),
    }
}

// All sorts are stable: records that compare equal keep their catalog order.
pub fn sort_by(records: Vec<Question>, key: SortKey) -> Vec<Question> {
    match key {
        SortKey::Newest => records.into_iter().sorted_by(|a, b| b.created_at.cmp(&a.created_at)).collect(),
        SortKey::Oldest => records.into_iter().sorted_by(|a, b| a.created_at.cmp(&b.created_at)).collect(),
        SortKey::Votes => records.into_iter().sorted_by(|a, b| b.votes.cmp(&a.votes)).collect(),
        SortKey::Answers => records.into_iter().sorted_by(|a, b| b.answers.cmp(&a.answers)).collect(),
        SortKey::Views => records.into_iter().sorted_by(|a, b| b.views.cmp(&a.views)).collect(),
    }
}

fn matches(question: &Question, needle: &str) -> bool {
    question.title.to_lowercase().contains(needle)
        || question.description.to_lowercase().contains(needle)
        || question.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

pub fn search(records: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }
    records.into_iter().filter(|q| matches(q, &needle)).collect()
}

pub fn browse<C>(catalog: &C, query: &BrowseQuery) -> Result<Vec<Question>, Error>
where
    C: QuestionCatalog,
{
    debug!("browse questions: term={:?} filter={:?} sort={:?}", query.term, query.filter, query.sort);
    let records = catalog.questions()?;
    Ok(sort_by(filter_by_category(search(records, &query.term), query.filter), query.sort))
}

pub fn question_detail<C>(catalog: &C, id: i32) -> Result<(Question, Vec<Answer>), Error>
where
    C: QuestionCatalog,
{
    let question = catalog.get(id)?;
    let answers = catalog.answers(id)?;
    Ok((question, answers))
}
