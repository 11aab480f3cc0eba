//! # shelfdb
//!
//! An embedded document store that persists JSON records as individual
//! files on the local filesystem - no external database process, no
//! daemon, no custom file format.
//!
//! Layout on disk:
//!
//! ```text
//! <root>/
//! ├─ users/
//! │  ├─ alice.json
//! │  └─ bob.json
//! └─ posts/
//!    └─ hello.json
//! ```
//!
//! A [`Catalog`] owns the root directory and the registry of open
//! collections; a [`Collection`] exposes CRUD and scan-based queries over
//! one directory of documents; [`deep_merge`] drives the partial-update
//! contract of [`Collection::update`].
//!
//! Failures on query and deletion paths are diagnostics, not errors: they
//! flow into a pluggable [`ErrorSink`] and surface to the caller as an
//! absent result. Write paths return [`StoreResult`].
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use shelfdb_core::{Catalog, Filter};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Pet { id: String, name: String, kind: String }
//!
//! let catalog = Catalog::new("data");
//! let pets = catalog.open_collection::<Pet>("pets");
//! catalog.init();
//!
//! pets.create("rex", &Pet {
//!     id: "rex".into(),
//!     name: "Rex".into(),
//!     kind: "dog".into(),
//! })?;
//!
//! let dogs = pets.find_many(&Filter::pattern(serde_json::json!({"kind": "dog"})));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod collection;
mod error;
mod filter;
mod merge;
mod report;

pub use catalog::Catalog;
pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use filter::Filter;
pub use merge::{deep_merge, deep_merge_all};
pub use report::{ErrorReport, ErrorSink, MemorySink, TracingSink};
