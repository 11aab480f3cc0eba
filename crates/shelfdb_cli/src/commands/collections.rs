//! Collections command implementation.

use std::path::Path;

/// Runs the collections command.
pub fn run(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    for name in super::collection_dirs(root)? {
        println!("{name}");
    }
    Ok(())
}
