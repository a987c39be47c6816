//! On-disk ontology snapshots.

use std::path::{Path, PathBuf};

use skillmap_core::{Error, Result};
use skillmap_graph::{OntologySnapshot, SkillGraph};
use tracing::info;

/// Reads and writes the active ontology snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Open a snapshot file, creating its parent directory if needed.
    ///
    /// The file itself is only written by [`SnapshotStore::save`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| Error::Storage(e.to_string()))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Persist a graph. Writes a temp file then renames it over the old one.
    pub fn save(&self, graph: &SkillGraph) -> Result<()> {
        let json = graph.save().to_json()?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| Error::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            Error::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;
        info!("Ontology saved to {}", self.path.display());
        Ok(())
    }

    /// Load the stored graph, or `None` if no snapshot has been written yet.
    pub fn load(&self) -> Result<Option<SkillGraph>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Storage(e.to_string())),
        };
        let snapshot = OntologySnapshot::from_json(&data)
            .map_err(|e| Error::MalformedSnapshot(format!("{}: {}", self.path.display(), e)))?;
        let graph = SkillGraph::load(snapshot)?;
        info!("Ontology loaded from {}", self.path.display());
        Ok(Some(graph))
    }
}
