//! Drop command implementation.

use shelfdb_core::Catalog;
use std::path::Path;
use tracing::info;

/// Runs the drop command.
pub fn run(root: &Path, collection: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new(root);
    if !catalog.has_collection(collection) {
        return Err(format!("no collection {collection:?} in store at {root:?}").into());
    }

    info!(collection, "dropping collection and all its documents");
    catalog.delete_collection(collection);
    println!("dropped {collection}");
    Ok(())
}
