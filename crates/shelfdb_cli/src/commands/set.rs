//! Set command implementation.

use serde_json::Value;
use shelfdb_core::Catalog;
use std::path::Path;

/// Runs the set command.
pub fn run(
    root: &Path,
    collection: &str,
    id: &str,
    data: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let partial: Value = serde_json::from_str(data)?;

    let catalog = Catalog::new(root);
    catalog.init();
    let collection = catalog.open_collection::<Value>(collection);

    let merged = collection.update(id, &partial)?;
    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}
