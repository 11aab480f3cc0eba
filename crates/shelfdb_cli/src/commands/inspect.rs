//! Inspect command implementation.

use serde::Serialize;
use serde_json::Value;
use shelfdb_core::Catalog;
use std::path::Path;

/// Store inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Store root path.
    pub path: String,
    /// Number of collections.
    pub collection_count: usize,
    /// Total number of documents across all collections.
    pub document_count: usize,
    /// Per-collection statistics.
    pub collections: Vec<CollectionStats>,
}

/// Statistics for a single collection.
#[derive(Debug, Serialize)]
pub struct CollectionStats {
    /// Collection name.
    pub name: String,
    /// Number of documents.
    pub document_count: usize,
}

/// Runs the inspect command.
pub fn run(root: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new(root);

    let mut collections = Vec::new();
    for name in super::collection_dirs(root)? {
        let collection = catalog.open_collection::<Value>(&name);
        collections.push(CollectionStats {
            document_count: collection.count(),
            name,
        });
    }

    let result = InspectResult {
        path: root.display().to_string(),
        collection_count: collections.len(),
        document_count: collections.iter().map(|c| c.document_count).sum(),
        collections,
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            println!("store:       {}", result.path);
            println!("collections: {}", result.collection_count);
            println!("documents:   {}", result.document_count);
            for stats in &result.collections {
                println!("  {:<24} {:>8}", stats.name, stats.document_count);
            }
        }
    }

    Ok(())
}
