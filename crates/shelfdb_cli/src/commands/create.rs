//! Create command implementation.

use serde_json::Value;
use shelfdb_core::Catalog;
use std::path::Path;

/// Runs the create command.
pub fn run(
    root: &Path,
    collection: &str,
    id: &str,
    data: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let data: Value = serde_json::from_str(data)?;

    let catalog = Catalog::new(root);
    catalog.init();
    let collection = catalog.open_collection::<Value>(collection);

    collection.create(id, &data)?;
    println!("created {}/{id}", collection.name());
    Ok(())
}
