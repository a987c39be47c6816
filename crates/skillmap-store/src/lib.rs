//! Skillmap Store — catalog files and on-disk ontology snapshots.

pub mod bootstrap;
pub mod catalog;
pub mod snapshot;

pub use bootstrap::{bootstrap, rebuild, GraphSource};
pub use catalog::{load_catalog, save_catalog};
pub use snapshot::SnapshotStore;
