//! CLI command implementations.

pub mod collections;
pub mod create;
pub mod delete;
pub mod drop;
pub mod find;
pub mod get;
pub mod inspect;
pub mod set;

use serde_json::Value;
use shelfdb_core::{Catalog, Collection};
use std::path::Path;
use std::sync::Arc;

/// Opens the collection, failing if its directory does not exist.
fn require_collection(
    catalog: &Arc<Catalog>,
    name: &str,
) -> Result<Collection<Value>, Box<dyn std::error::Error>> {
    if !catalog.has_collection(name) {
        return Err(format!(
            "no collection {:?} in store at {:?}",
            name,
            catalog.root()
        )
        .into());
    }
    Ok(catalog.open_collection(name))
}

/// Lists the collection directories under the store root.
fn collection_dirs(root: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(root)
        .map_err(|err| format!("cannot read store at {root:?}: {err}"))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
