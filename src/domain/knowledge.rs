//! Knowledge base index: embedded seed data plus search and grouping.

use once_cell::sync::Lazy;

use crate::domain::models::KbArticle;
use crate::shared::errors::Result;
use crate::shared::logging;

const SEED_JSON: &str = include_str!("../../assets/data/knowledge_base.json");

/// Parse a knowledge-base seed document.
fn parse_seed(json: &str) -> Result<Vec<KbArticle>> {
    Ok(serde_json::from_str(json)?)
}

/// Seed articles embedded at compile time. An invalid seed is a build defect,
/// so the parse failure degrades to an empty index instead of panicking at
/// first render.
static ARTICLES: Lazy<Vec<KbArticle>> = Lazy::new(|| match parse_seed(SEED_JSON) {
    Ok(articles) => articles,
    Err(e) => {
        tracing::error!(error = %e, "Failed to parse embedded knowledge base seed");
        Vec::new()
    }
});

/// All articles, in seed order.
pub fn all_articles() -> &'static [KbArticle] {
    &ARTICLES
}

/// Case-insensitive filter over title, summary and tags.
///
/// An empty or whitespace-only query matches everything.
pub fn search<'a>(articles: &'a [KbArticle], query: &str) -> Vec<&'a KbArticle> {
    let query = query.trim().to_lowercase();

    let matches: Vec<&KbArticle> = articles
        .iter()
        .filter(|article| {
            if query.is_empty() {
                return true;
            }
            article.title.to_lowercase().contains(&query)
                || article.summary.to_lowercase().contains(&query)
                || article.tags.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .collect();

    logging::log_knowledge_search(&query, matches.len());
    matches
}

/// Group articles by category, preserving first-seen category order and the
/// article order inside each group.
pub fn group_by_category<'a>(articles: &[&'a KbArticle]) -> Vec<(String, Vec<&'a KbArticle>)> {
    let mut groups: Vec<(String, Vec<&KbArticle>)> = Vec::new();

    for article in articles {
        match groups.iter_mut().find(|(name, _)| *name == article.category) {
            Some((_, items)) => items.push(article),
            None => groups.push((article.category.clone(), vec![article])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<KbArticle> {
        serde_json::from_str(
            r#"[
                {"id": "a", "title": "Arc Reactor", "category": "Power",
                 "summary": "Fusion core.", "tags": ["power", "core"]},
                {"id": "b", "title": "Repulsor", "category": "Propulsion",
                 "summary": "Flight stabilizer.", "tags": ["flight"]},
                {"id": "c", "title": "Unibeam", "category": "Power",
                 "summary": "Chest-mounted emitter.", "tags": ["power"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_embedded_seed_parses() {
        assert!(!all_articles().is_empty());
    }

    #[test]
    fn test_malformed_seed_surfaces_serialization_error() {
        use crate::shared::errors::AppError;

        let err = parse_seed("not json").unwrap_err();
        assert!(matches!(err, AppError::SerializationError(_)));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let articles = sample();
        assert_eq!(search(&articles, "").len(), 3);
        assert_eq!(search(&articles, "   ").len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let articles = sample();
        let hits = search(&articles, "ARC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn test_search_covers_tags() {
        let articles = sample();
        let hits = search(&articles, "flight");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn test_grouping_preserves_order() {
        let articles = sample();
        let hits = search(&articles, "");
        let groups = group_by_category(&hits);

        let names: Vec<&str> = groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Power", "Propulsion"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let articles = sample();
        assert!(search(&articles, "vibranium").is_empty());
    }
}
