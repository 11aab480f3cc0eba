//! Get command implementation.

use shelfdb_core::Catalog;
use std::path::Path;

/// Runs the get command.
pub fn run(root: &Path, collection: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new(root);
    let collection = super::require_collection(&catalog, collection)?;

    match collection.get(id) {
        Some(doc) => {
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
        None => Err(format!("no document {:?} in collection {}", id, collection.name()).into()),
    }
}
