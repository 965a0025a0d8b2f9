use crate::core::models::draft::{Draft, ErrorKind, Field, ValidationErrors};
use crate::core::models::question::Create;
use crate::error::Error;
use log::info;

pub const TITLE_MIN_LEN: usize = 10;
pub const DESCRIPTION_MIN_LEN: usize = 30;
pub const MAX_TAGS: usize = 5;

// Every rule is evaluated so the caller can surface all errors at once.
pub fn validate(draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let title = draft.title.trim();
    if title.is_empty() {
        errors.insert(Field::Title, ErrorKind::EmptyField);
    } else if title.chars().count() < TITLE_MIN_LEN {
        errors.insert(Field::Title, ErrorKind::TooShort);
    }
    let description = draft.description.trim();
    if description.is_empty() {
        errors.insert(Field::Description, ErrorKind::EmptyField);
    } else if description.chars().count() < DESCRIPTION_MIN_LEN {
        errors.insert(Field::Description, ErrorKind::TooShort);
    }
    if draft.tags.is_empty() {
        errors.insert(Field::Tags, ErrorKind::MissingTags);
    }
    errors
}

// The tag cap lives here, at the mutation boundary, so a draft can never be
// observed holding more than MAX_TAGS entries at validation time.
pub fn add_tag(tags: &mut Vec<String>, candidate: &str) -> bool {
    let candidate = candidate.trim();
    if candidate.is_empty() || tags.len() >= MAX_TAGS || tags.iter().any(|t| t == candidate) {
        return false;
    }
    tags.push(candidate.to_string());
    true
}

pub fn remove_tag(tags: &mut Vec<String>, target: &str) {
    tags.retain(|t| t != target);
}

pub fn submit(draft: Draft) -> Result<Create, Error> {
    let errors = validate(&draft);
    if !errors.is_empty() {
        return Err(Error::InvalidDraft(errors));
    }
    let create = Create {
        title: draft.title,
        description: draft.description,
        tags: draft.tags,
    };
    info!("question submitted: {}", serde_json::to_string(&create)?);
    Ok(create)
}
