//! Skill catalog — the immutable seed the skill graph is built from.
//!
//! A catalog maps category names to their headline skills and
//! subcategories, and skill names to their declared relationships
//! (prerequisites, co-requisites, next steps) plus learning metadata.

mod defaults;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Default learning time for a skill without declared hours.
pub const DEFAULT_ESTIMATED_HOURS: u32 = 30;

/// Category assigned to skills that only appear inside relationships.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Normalize a skill name to its canonical lowercase key.
pub fn normalize_skill(name: &str) -> String {
    name.trim().to_lowercase()
}

/// How hard a skill is to pick up.
///
/// Deserialization is lenient: an unrecognised tier reads as
/// [`Difficulty::Intermediate`] instead of failing the whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Parse a tier name case-insensitively; unknown names fall back to the default.
    pub fn from_name(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            other => {
                warn!("Unknown difficulty \"{}\", using intermediate", other);
                Self::default()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_name(&raw))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// A top-level skill category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    #[serde(default)]
    pub description: String,
    /// Headline skills of the category.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Subcategory name → member skills.
    #[serde(default)]
    pub subcategories: BTreeMap<String, Vec<String>>,
}

/// Declared relationships and metadata for one skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRelations {
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub co_requisites: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,
}

impl SkillRelations {
    pub fn difficulty_or_default(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }

    pub fn hours_or_default(&self) -> u32 {
        self.estimated_hours.unwrap_or(DEFAULT_ESTIMATED_HOURS)
    }

    fn related(&self) -> impl Iterator<Item = &String> {
        self.prerequisites
            .iter()
            .chain(self.co_requisites.iter())
            .chain(self.next_steps.iter())
    }
}

/// The full seed: categories plus relationship declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    #[serde(default)]
    pub skill_categories: BTreeMap<String, CategoryDef>,
    #[serde(default)]
    pub skill_relationships: BTreeMap<String, SkillRelations>,
}

impl SkillCatalog {
    /// The built-in career ontology.
    pub fn default_catalog() -> Self {
        defaults::default_catalog()
    }

    /// Reject input that cannot be turned into a consistent graph.
    ///
    /// Names only mentioned inside a relationship are fine; they become
    /// nodes in the `unknown` category at build time.
    pub fn validate(&self) -> Result<()> {
        for (category, def) in &self.skill_categories {
            let members = def
                .skills
                .iter()
                .chain(def.subcategories.values().flatten());
            for skill in members {
                if normalize_skill(skill).is_empty() {
                    return Err(Error::MalformedCatalog(format!(
                        "category \"{}\" lists an empty skill name",
                        category
                    )));
                }
            }
        }

        let mut seen: BTreeMap<String, (&str, &SkillRelations)> = BTreeMap::new();
        for (name, relations) in &self.skill_relationships {
            let key = normalize_skill(name);
            if key.is_empty() {
                return Err(Error::MalformedCatalog(
                    "relationship declared for an empty skill name".into(),
                ));
            }
            if relations.estimated_hours == Some(0) {
                return Err(Error::MalformedCatalog(format!(
                    "skill \"{}\" declares zero estimated hours",
                    name
                )));
            }
            for other in relations.related() {
                let other_key = normalize_skill(other);
                if other_key.is_empty() {
                    return Err(Error::MalformedCatalog(format!(
                        "skill \"{}\" references an empty skill name",
                        name
                    )));
                }
                if other_key == key {
                    return Err(Error::MalformedCatalog(format!(
                        "skill \"{}\" declares a relationship to itself",
                        name
                    )));
                }
            }
            if let Some((previous, prev_relations)) = seen.get(&key) {
                if prev_relations.difficulty != relations.difficulty
                    || prev_relations.estimated_hours != relations.estimated_hours
                {
                    return Err(Error::MalformedCatalog(format!(
                        "skills \"{}\" and \"{}\" conflict on difficulty or hours",
                        previous, name
                    )));
                }
            }
            seen.insert(key, (name.as_str(), relations));
        }
        Ok(())
    }

    /// Relationship declarations for a skill, looked up case-insensitively.
    pub fn relations_for(&self, skill: &str) -> Option<&SkillRelations> {
        let key = normalize_skill(skill);
        self.skill_relationships
            .iter()
            .find(|(name, _)| normalize_skill(name) == key)
            .map(|(_, relations)| relations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relations(hours: Option<u32>) -> SkillRelations {
        SkillRelations {
            estimated_hours: hours,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = SkillCatalog::default_catalog();
        catalog.validate().unwrap();
        assert_eq!(catalog.skill_categories.len(), 5);
        assert_eq!(
            catalog.relations_for("Python").unwrap().estimated_hours,
            Some(40)
        );
    }

    #[test]
    fn test_zero_hours_rejected() {
        let mut catalog = SkillCatalog::default();
        catalog
            .skill_relationships
            .insert("python".into(), relations(Some(0)));
        assert!(matches!(catalog.validate(), Err(Error::MalformedCatalog(_))));
    }

    #[test]
    fn test_self_relationship_rejected() {
        let mut catalog = SkillCatalog::default();
        catalog.skill_relationships.insert(
            "docker".into(),
            SkillRelations {
                next_steps: vec!["Docker".into()],
                ..Default::default()
            },
        );
        assert!(matches!(catalog.validate(), Err(Error::MalformedCatalog(_))));
    }

    #[test]
    fn test_conflicting_case_variants_rejected() {
        let mut catalog = SkillCatalog::default();
        catalog
            .skill_relationships
            .insert("Python".into(), relations(Some(40)));
        catalog
            .skill_relationships
            .insert("python".into(), relations(Some(55)));
        assert!(matches!(catalog.validate(), Err(Error::MalformedCatalog(_))));
    }

    #[test]
    fn test_agreeing_case_variants_accepted() {
        let mut catalog = SkillCatalog::default();
        catalog
            .skill_relationships
            .insert("Python".into(), relations(Some(40)));
        catalog
            .skill_relationships
            .insert("python".into(), relations(Some(40)));
        catalog.validate().unwrap();
    }

    #[test]
    fn test_catalog_json_defaults() {
        let json = r#"{
            "skill_categories": {
                "programming": { "skills": ["Rust"] }
            },
            "skill_relationships": {
                "rust": { "next_steps": ["tokio"], "difficulty": "advanced" }
            }
        }"#;
        let catalog: SkillCatalog = serde_json::from_str(json).unwrap();
        let rust = catalog.relations_for("rust").unwrap();
        assert_eq!(rust.difficulty_or_default(), Difficulty::Advanced);
        assert_eq!(rust.hours_or_default(), DEFAULT_ESTIMATED_HOURS);
        assert!(rust.prerequisites.is_empty());
        assert!(catalog.skill_categories["programming"].subcategories.is_empty());
    }

    #[test]
    fn test_unknown_difficulty_reads_as_intermediate() {
        let json = r#"{
            "skill_relationships": {
                "rust": { "next_steps": ["tokio"], "difficulty": "expert" },
                "tokio": { "difficulty": "Advanced" }
            }
        }"#;
        let catalog: SkillCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(
            catalog.relations_for("rust").unwrap().difficulty,
            Some(Difficulty::Intermediate)
        );
        assert_eq!(
            catalog.relations_for("tokio").unwrap().difficulty,
            Some(Difficulty::Advanced)
        );
        catalog.validate().unwrap();
    }
}
