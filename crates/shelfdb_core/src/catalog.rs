//! Catalog: the root directory and the collection registry.
//!
//! On-disk layout:
//!
//! ```text
//! <root>/
//! ├─ <collection>/        # one directory per collection
//! │  ├─ <id>.json         # one file per document
//! ```
//!
//! There is no lock file and no manifest: the directory tree is the whole
//! catalog state, and any process pointed at the same root can interleave
//! writes with no coordination.

use crate::collection::Collection;
use crate::error::{StoreError, StoreResult};
use crate::report::{ErrorReport, ErrorSink, TracingSink};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The root registry mapping collection names to their storage directories.
///
/// A `Catalog` owns the root directory under which every collection lives,
/// tracks the collections opened through it, and hosts the [`ErrorSink`]
/// that receives diagnostics from soft-failure paths.
///
/// Collections hold an `Arc` back to their catalog, so the catalog is
/// always handled through `Arc<Catalog>`.
///
/// # Example
///
/// ```rust,ignore
/// use shelfdb_core::Catalog;
///
/// let catalog = Catalog::new("data");
/// let pets = catalog.open_collection::<Pet>("pets");
/// catalog.init();
///
/// pets.create("rex", &Pet { name: "Rex".into(), kind: "dog".into() })?;
/// ```
pub struct Catalog {
    /// Root directory for all collections.
    root: PathBuf,
    /// Registry of opened collections: name to backing directory.
    collections: RwLock<BTreeMap<String, PathBuf>>,
    /// Diagnostic sink for soft-failure paths.
    sink: Arc<dyn ErrorSink>,
}

impl Catalog {
    /// Creates a catalog rooted at `root`, reporting through [`TracingSink`].
    ///
    /// No filesystem access happens here; call [`Catalog::init`] to create
    /// the backing directories.
    pub fn new(root: impl Into<PathBuf>) -> Arc<Self> {
        Self::with_sink(root, Arc::new(TracingSink))
    }

    /// Creates a catalog with a custom diagnostic sink.
    pub fn with_sink(root: impl Into<PathBuf>, sink: Arc<dyn ErrorSink>) -> Arc<Self> {
        Arc::new(Self {
            root: root.into(),
            collections: RwLock::new(BTreeMap::new()),
            sink,
        })
    }

    /// Returns the root directory path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensures the root directory and every registered collection
    /// directory exist.
    ///
    /// Best-effort and idempotent: pre-existing directories are not an
    /// error, and creation failures are reported through the sink rather
    /// than aborting. The catalog favors availability over strict
    /// bootstrapping. Returns `&self` for chaining.
    pub fn init(&self) -> &Self {
        if let Err(err) = fs::create_dir_all(&self.root) {
            self.report(&ErrorReport {
                operation: "init",
                collection: None,
                id: None,
                error: &StoreError::Io(err),
            });
        }

        let dirs: Vec<(String, PathBuf)> = self
            .collections
            .read()
            .iter()
            .map(|(name, dir)| (name.clone(), dir.clone()))
            .collect();
        for (name, dir) in dirs {
            self.ensure_collection_dir("init", &name, &dir);
        }

        self
    }

    /// Creates one collection directory, swallowing the benign failures.
    ///
    /// Already-exists is the normal idempotent case; a missing parent means
    /// the root has not been created yet and `init` will catch up.
    fn ensure_collection_dir(&self, operation: &'static str, name: &str, dir: &Path) {
        if let Err(err) = fs::create_dir(dir) {
            if err.kind() != io::ErrorKind::AlreadyExists && err.kind() != io::ErrorKind::NotFound {
                self.report(&ErrorReport {
                    operation,
                    collection: Some(name),
                    id: None,
                    error: &StoreError::Io(err),
                });
            }
        }
    }

    /// Checks whether a directory for `name` exists and is readable.
    ///
    /// A pure existence probe with no caching: any failure to list the
    /// directory, not-found and permission-denied alike, reads as "does
    /// not exist".
    #[must_use]
    pub fn has_collection(&self, name: &str) -> bool {
        fs::read_dir(self.root.join(name)).is_ok()
    }

    /// Creates a new collection.
    ///
    /// Strictly create-if-absent: a directory that already exists is a
    /// [`StoreError::CollectionExists`], and no handle is produced. On
    /// success the handle is registered under its name.
    ///
    /// # Errors
    ///
    /// - [`StoreError::CollectionExists`] if the directory exists
    /// - [`StoreError::Io`] for any other directory-creation failure,
    ///   e.g. the root does not exist yet
    pub fn create_collection<T>(self: &Arc<Self>, name: &str) -> StoreResult<Collection<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        let dir = self.root.join(name);
        match fs::create_dir(&dir) {
            Ok(()) => {
                tracing::debug!(collection = name, "created collection");
                Ok(Collection::new(Arc::clone(self), name))
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                Err(StoreError::collection_exists(name))
            }
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    /// Opens a collection, creating its directory if missing.
    ///
    /// The lenient counterpart to [`Catalog::create_collection`]: always
    /// returns a handle and registers it. Directory creation is
    /// best-effort under the same policy as [`Catalog::init`], so a
    /// handle opened before `init` becomes usable once `init` has run.
    pub fn open_collection<T>(self: &Arc<Self>, name: &str) -> Collection<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let collection = Collection::new(Arc::clone(self), name);
        self.ensure_collection_dir("open_collection", name, collection.path());
        collection
    }

    /// Deletes a collection: recursively removes its directory and every
    /// document in it, then unregisters it.
    ///
    /// Destructive and irreversible, with no confirmation step. Removal
    /// failures are reported through the sink, never raised; the name is
    /// unregistered regardless.
    pub fn delete_collection(&self, name: &str) {
        tracing::debug!(collection = name, "deleting collection");
        if let Err(err) = fs::remove_dir_all(self.root.join(name)) {
            self.report(&ErrorReport {
                operation: "delete_collection",
                collection: Some(name),
                id: None,
                error: &StoreError::Io(err),
            });
        }
        self.collections.write().remove(name);
    }

    /// Returns the names of all registered collections.
    ///
    /// This reflects the handles opened through this catalog, not the
    /// directories on disk; use [`Catalog::has_collection`] to probe disk.
    #[must_use]
    pub fn collection_names(&self) -> Vec<String> {
        self.collections.read().keys().cloned().collect()
    }

    /// Forwards a diagnostic to the configured sink.
    pub fn report(&self, report: &ErrorReport<'_>) {
        self.sink.report(report);
    }

    /// Registers a collection under its name. Constructor side effect of
    /// every [`Collection`].
    pub(crate) fn register(&self, name: &str, dir: PathBuf) {
        self.collections.write().insert(name.to_string(), dir);
    }
}
