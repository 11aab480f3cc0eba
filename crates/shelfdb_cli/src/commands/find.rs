//! Find command implementation.

use serde_json::Value;
use shelfdb_core::{Catalog, Filter};
use std::path::Path;

/// Runs the find command.
pub fn run(root: &Path, collection: &str, pattern: &str) -> Result<(), Box<dyn std::error::Error>> {
    let pattern: Value = serde_json::from_str(pattern)?;
    if !pattern.is_object() {
        return Err("pattern must be a JSON object".into());
    }

    let catalog = Catalog::new(root);
    let collection = super::require_collection(&catalog, collection)?;

    let matches = collection.find_entries(&Filter::pattern(pattern));
    for (id, doc) in &matches {
        println!("{id}\t{}", serde_json::to_string(doc)?);
    }
    eprintln!("{} match(es)", matches.len());
    Ok(())
}
