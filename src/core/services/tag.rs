use crate::core::models::tag::{Stats, Tag};
use crate::core::ports::catalog::TagCatalog;
use crate::error::Error;
use log::debug;

// Matches against name and description; question search applies the same rule.
pub fn search_tags(records: Vec<Tag>, term: &str) -> Vec<Tag> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|t| t.name.to_lowercase().contains(&needle) || t.description.to_lowercase().contains(&needle))
        .collect()
}

pub fn popular(records: &[Tag], n: usize) -> Vec<Tag> {
    records.iter().take(n).cloned().collect()
}

pub fn tag_stats(all: &[Tag], showing: usize) -> Stats {
    Stats {
        total_tags: all.len(),
        total_questions: all.iter().map(|t| t.count).sum(),
        showing,
    }
}

pub fn browse_tags<C>(catalog: &C, term: &str) -> Result<(Vec<Tag>, Stats), Error>
where
    C: TagCatalog,
{
    debug!("browse tags: term={:?}", term);
    let all = catalog.tags()?;
    let matched = search_tags(all.clone(), term);
    let stats = tag_stats(&all, matched.len());
    Ok((matched, stats))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::tag::Weight;

    fn fixtures() -> Vec<Tag> {
        vec![
            Tag {
                name: "javascript".into(),
                count: 1234,
                description: "For questions about JavaScript programming language".into(),
            },
            Tag {
                name: "react".into(),
                count: 987,
                description: "For questions about React.js library and ecosystem".into(),
            },
            Tag {
                name: "css".into(),
                count: 856,
                description: "For questions about Cascading Style Sheets".into(),
            },
            Tag {
                name: "git".into(),
                count: 187,
                description: "For questions about Git version control system".into(),
            },
        ]
    }

    #[test]
    fn test_search_tags_matches_name_or_description() {
        let by_name: Vec<String> = search_tags(fixtures(), "script").into_iter().map(|t| t.name).collect();
        assert_eq!(by_name, vec!["javascript"]);
        let by_description: Vec<String> = search_tags(fixtures(), "style sheets").into_iter().map(|t| t.name).collect();
        assert_eq!(by_description, vec!["css"]);
    }

    #[test]
    fn test_search_tags_blank_term_is_identity() {
        assert_eq!(search_tags(fixtures(), " "), fixtures());
    }

    #[test]
    fn test_popular_takes_leading_records() {
        let names: Vec<String> = popular(&fixtures(), 2).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["javascript", "react"]);
    }

    #[test]
    fn test_tag_stats() {
        let stats = tag_stats(&fixtures(), 1);
        assert_eq!(stats.total_tags, 4);
        assert_eq!(stats.total_questions, 1234 + 987 + 856 + 187);
        assert_eq!(stats.showing, 1);
    }

    #[test]
    fn test_weight_banding() {
        assert_eq!(Weight::for_count(1234), Weight::Hot);
        assert_eq!(Weight::for_count(801), Weight::Hot);
        assert_eq!(Weight::for_count(800), Weight::Rising);
        assert_eq!(Weight::for_count(401), Weight::Rising);
        assert_eq!(Weight::for_count(400), Weight::Steady);
        assert_eq!(Weight::for_count(201), Weight::Steady);
        assert_eq!(Weight::for_count(200), Weight::Quiet);
        assert_eq!(Weight::for_count(0), Weight::Quiet);
    }
}
