//! Delete command implementation.

use shelfdb_core::Catalog;
use std::path::Path;

/// Runs the delete command.
pub fn run(root: &Path, collection: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new(root);
    let collection = super::require_collection(&catalog, collection)?;

    collection.delete(id);
    println!("deleted {}/{id}", collection.name());
    Ok(())
}
