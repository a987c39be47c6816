//! Seed catalog files (JSON).

use std::path::Path;

use skillmap_core::{Error, Result, SkillCatalog};
use tracing::info;

/// Read and validate a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<SkillCatalog> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|e| Error::Storage(format!("Failed to read catalog {}: {}", path.display(), e)))?;
    let catalog: SkillCatalog = serde_json::from_str(&data)
        .map_err(|e| Error::MalformedCatalog(format!("{}: {}", path.display(), e)))?;
    catalog.validate()?;
    info!(
        "Loaded catalog from {}: {} categories, {} relationship entries",
        path.display(),
        catalog.skill_categories.len(),
        catalog.skill_relationships.len()
    );
    Ok(catalog)
}

/// Write a catalog as pretty-printed JSON.
pub fn save_catalog(path: impl AsRef<Path>, catalog: &SkillCatalog) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(catalog)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let catalog = SkillCatalog::default_catalog();

        save_catalog(&path, &catalog).unwrap();
        assert_eq!(load_catalog(&path).unwrap(), catalog);
    }

    #[test]
    fn test_missing_catalog_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let result = load_catalog(dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ \"skill_categories\": [1, 2] }").unwrap();
        assert!(matches!(load_catalog(&path), Err(Error::MalformedCatalog(_))));
    }
}
