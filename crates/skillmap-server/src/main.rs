//! Skillmap — skill graph server: learning paths, clusters, plans.

use std::path::PathBuf;
use std::sync::Arc;

use skillmap_graph::SkillGraph;
use skillmap_store::SnapshotStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("SKILLMAP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

/// Write a snapshot of the built-in catalog to `path`.
fn write_default_snapshot(path: PathBuf) -> anyhow::Result<()> {
    let graph = SkillGraph::from_default_catalog()?;
    let store = SnapshotStore::open(&path)?;
    store.save(&graph)?;
    let stats = graph.stats();
    println!(
        "Wrote {} skills, {} relationships to {}",
        stats.node_count,
        stats.edge_count,
        store.path().display()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "snapshot" => {
                let path = if args.len() > 2 {
                    PathBuf::from(&args[2])
                } else {
                    skillmap_core::DataPaths::new(resolve_data_dir())?.snapshot_file
                };
                return write_default_snapshot(path);
            }
            "--help" | "-h" | "help" => {
                println!("Skillmap — skill graph server");
                println!();
                println!("Usage: skillmap [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  snapshot [path]          Write a snapshot of the built-in catalog");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'skillmap help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = skillmap_core::SkillmapConfig::from_env(&data_dir)?;
    let port = config.port;

    let store = SnapshotStore::open(&config.data_paths.snapshot_file)?;
    let (graph, source) = skillmap_store::bootstrap(&store, &config.data_paths.catalog_file)?;
    info!("Ontology ready from {:?}: {} skills", source, graph.len());

    let state = Arc::new(AppState::new(config, store, graph, source)?);
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Skillmap server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
