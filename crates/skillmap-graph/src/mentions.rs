//! Literal skill-mention matching in free text (e.g. job postings).

use regex::Regex;
use skillmap_core::{Error, Result};

use crate::graph::SkillGraph;

/// Finds graph skill names mentioned verbatim in text.
///
/// Matching is case-insensitive and word-bounded: "r" does not match
/// inside "rust", "node.js" matches only as a whole token.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    patterns: Vec<(String, Regex)>,
}

impl SkillMatcher {
    pub fn new(graph: &SkillGraph) -> Result<Self> {
        let patterns = graph
            .skills()
            .into_iter()
            .map(|node| {
                let pattern = format!(r"(?i)(?:^|\W){}(?:$|\W)", regex::escape(&node.name));
                Regex::new(&pattern)
                    .map(|re| (node.name.clone(), re))
                    .map_err(|e| Error::Config(format!("bad pattern for '{}': {}", node.name, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Sorted, distinct skill names mentioned in `text`.
    pub fn find(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(&SkillGraph::from_default_catalog().unwrap()).unwrap()
    }

    #[test]
    fn test_find_job_posting_skills() {
        let found = matcher().find("Need Python, SQL and machine learning experience.");
        assert_eq!(found, vec!["machine learning", "python", "sql"]);
    }

    #[test]
    fn test_word_boundaries() {
        let found = matcher().find("Rust services on AWS");
        assert!(found.contains(&"rust".to_string()));
        assert!(found.contains(&"aws".to_string()));
        assert!(!found.contains(&"r".to_string()));
    }

    #[test]
    fn test_punctuated_names() {
        let found = matcher().find("Frontend with Node.js; CI_CD pipelines");
        assert!(found.contains(&"node.js".to_string()));
        assert!(found.contains(&"ci_cd".to_string()));
    }

    #[test]
    fn test_no_mentions() {
        assert!(matcher().find("lorem ipsum dolor sit amet").is_empty());
    }
}
