//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3010;
pub const DEFAULT_HOURS_PER_WEEK: u32 = 10;
pub const DEFAULT_MAX_PLAN_TARGETS: usize = 5;

/// Paths to all Skillmap data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Snapshot directory (`data/snapshots/`).
    pub snapshots: PathBuf,
    /// Seed catalog (`data/catalog.json`). Optional on disk.
    pub catalog_file: PathBuf,
    /// Active ontology snapshot (`data/snapshots/ontology.json`).
    pub snapshot_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let snapshots = root.join("snapshots");
        let paths = Self {
            catalog_file: root.join("catalog.json"),
            snapshot_file: snapshots.join("ontology.json"),
            snapshots,
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(&self.snapshots)?;
        Ok(())
    }
}

/// Top-level Skillmap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillmapConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Weekly study budget used to turn plan hours into a timeline.
    pub hours_per_week: u32,
    /// Maximum number of target skills resolved per learning plan.
    pub max_plan_targets: usize,
}

impl SkillmapConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_vars(data_dir, |key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_vars<F>(data_dir: impl AsRef<Path>, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_var(&var, "PORT")?.unwrap_or(DEFAULT_PORT);
        let hours_per_week =
            parse_var(&var, "SKILLMAP_HOURS_PER_WEEK")?.unwrap_or(DEFAULT_HOURS_PER_WEEK);
        let max_plan_targets =
            parse_var(&var, "SKILLMAP_MAX_PLAN_TARGETS")?.unwrap_or(DEFAULT_MAX_PLAN_TARGETS);

        if hours_per_week == 0 {
            return Err(Error::Config(
                "SKILLMAP_HOURS_PER_WEEK must be greater than zero".into(),
            ));
        }

        let mut data_paths = DataPaths::new(data_dir)?;
        if let Some(catalog) = var("SKILLMAP_CATALOG") {
            data_paths.catalog_file = PathBuf::from(catalog);
        }

        debug!(
            "Config: port={}, hours_per_week={}, max_plan_targets={}, catalog={}",
            port,
            hours_per_week,
            max_plan_targets,
            data_paths.catalog_file.display()
        );

        Ok(Self {
            port,
            data_paths,
            hours_per_week,
            max_plan_targets,
        })
    }
}

fn parse_var<T, F>(var: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(None),
    }
}
