//! Typed document collections backed by one directory of JSON files.

use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;
use crate::merge::deep_merge;
use crate::report::ErrorReport;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File extension for stored documents.
const DOC_EXT: &str = "json";

/// A named set of documents backed by one directory.
///
/// Each document is a single file `<id>.json` holding a compact UTF-8
/// JSON object whose `"id"` field always equals the filename-derived id.
/// The id is supplied by the caller and used verbatim as a filename
/// segment, so it must not contain path separators or a `.` that would
/// make the extension ambiguous - the engine does not enforce this.
///
/// # Failure policy
///
/// Query and deletion paths never return errors: a failed read or parse
/// is reported through the catalog's sink and surfaces as an absent
/// result. Write paths (`create`, `update`, `update_one`) return an
/// explicit [`StoreResult`].
///
/// # Concurrency
///
/// There is no locking anywhere. `create` is a probe-then-write and
/// `update` is a read-merge-rewrite, each with a window between the two
/// filesystem round-trips; concurrent callers on the same id can race and
/// the later writer wins. That is the engine's contract, not an accident.
pub struct Collection<T: Serialize + DeserializeOwned> {
    /// Collection name, also the subdirectory name.
    name: String,
    /// Backing directory, `<root>/<name>`.
    dir: PathBuf,
    /// Non-owning back-reference for error reporting.
    catalog: Arc<Catalog>,
    /// Type marker.
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    /// Creates a handle bound to `catalog` and registers it there.
    ///
    /// Registration is a required side effect: `Catalog::init` creates
    /// directories for every registered collection.
    pub(crate) fn new(catalog: Arc<Catalog>, name: &str) -> Self {
        let dir = catalog.root().join(name);
        catalog.register(name, dir.clone());
        Self {
            name: name.to_string(),
            dir,
            catalog,
            _marker: PhantomData,
        }
    }

    /// Returns the collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the backing directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn doc_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{DOC_EXT}"))
    }

    fn report(&self, operation: &'static str, id: Option<&str>, error: &StoreError) {
        self.catalog.report(&ErrorReport {
            operation,
            collection: Some(&self.name),
            id,
            error,
        });
    }

    /// Reads and parses the stored object for `id`.
    ///
    /// Soft failure: reports through the sink and returns `None` on a
    /// missing file, unreadable file, or anything that is not a JSON
    /// object.
    fn read_raw(&self, operation: &'static str, id: &str) -> Option<Map<String, Value>> {
        let bytes = match fs::read(self.doc_path(id)) {
            Ok(bytes) => bytes,
            Err(err) => {
                let error = StoreError::from_read(err, &self.name, id);
                self.report(operation, Some(id), &error);
                return None;
            }
        };
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                let error = StoreError::invalid_document("stored document is not a JSON object");
                self.report(operation, Some(id), &error);
                None
            }
            Err(err) => {
                self.report(operation, Some(id), &StoreError::Serialization(err));
                None
            }
        }
    }

    /// Decodes a stored object into `T`, reporting failures.
    fn decode(&self, operation: &'static str, id: &str, raw: &Map<String, Value>) -> Option<T> {
        match serde_json::from_value(Value::Object(raw.clone())) {
            Ok(doc) => Some(doc),
            Err(err) => {
                self.report(operation, Some(id), &StoreError::Serialization(err));
                None
            }
        }
    }

    /// Serializes `data`, requiring a JSON object.
    fn to_object<P: Serialize + ?Sized>(data: &P) -> StoreResult<Map<String, Value>> {
        match serde_json::to_value(data)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::invalid_document(
                "document must serialize to a JSON object",
            )),
        }
    }

    /// Writes the object for `id`, fully overwriting any previous file.
    fn write_raw(&self, id: &str, map: &Map<String, Value>) -> StoreResult<()> {
        let bytes = serde_json::to_vec(map)?;
        fs::write(self.doc_path(id), bytes)?;
        Ok(())
    }

    /// Gets a document by id.
    ///
    /// Returns `None` on a missing file or a parse failure; the failure
    /// is reported through the catalog's sink, never raised.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<T> {
        let raw = self.read_raw("get", id)?;
        self.decode("get", id, &raw)
    }

    /// Checks whether a document exists, by attempting to open its file.
    ///
    /// Returns false on any failure - missing, permission denied, and
    /// everything else are indistinguishable by design.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        File::open(self.doc_path(id)).is_ok()
    }

    /// Creates a new document.
    ///
    /// Strictly create-if-absent: an existing document aborts the write
    /// untouched. The stored object is `data` with the `"id"` field set
    /// to `id`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::AlreadyExists`] if a document with `id` exists
    /// - [`StoreError::Serialization`] if `data` does not serialize to a
    ///   JSON object
    /// - [`StoreError::Io`] if the write fails
    pub fn create(&self, id: &str, data: &T) -> StoreResult<()> {
        if self.exists(id) {
            return Err(StoreError::already_exists(&self.name, id));
        }
        let mut map = Self::to_object(data)?;
        map.insert("id".to_string(), Value::String(id.to_string()));
        tracing::debug!(collection = %self.name, id, "creating document");
        self.write_raw(id, &map)
    }

    /// Applies a partial update to a document, creating it if absent.
    ///
    /// Reads the existing document (a missing or unreadable one counts as
    /// an empty record, so `update` degrades to create), deep-merges
    /// `partial` onto it - nested objects merge key-wise, scalars and
    /// arrays are replaced outright - forces the `"id"` field, and
    /// rewrites the file. Returns the merged document.
    ///
    /// This is a read-modify-write with no atomicity and no locking:
    /// concurrent updates to the same id can race, and the later writer's
    /// file wins wholesale.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Serialization`] if `partial` does not serialize to
    ///   a JSON object, or the merged record does not decode as `T`
    /// - [`StoreError::Io`] if the write fails
    pub fn update<P>(&self, id: &str, partial: &P) -> StoreResult<T>
    where
        P: Serialize + ?Sized,
    {
        let mut base = self.read_raw("update", id).unwrap_or_default();
        let overlay = Self::to_object(partial)?;
        deep_merge(&mut base, &overlay);
        base.insert("id".to_string(), Value::String(id.to_string()));
        tracing::debug!(collection = %self.name, id, "updating document");
        self.write_raw(id, &base)?;
        Ok(serde_json::from_value(Value::Object(base))?)
    }

    /// Deletes a document.
    ///
    /// Failures - including deleting an id that never existed - are
    /// reported through the sink, never raised, so the call is idempotent
    /// from the caller's point of view.
    pub fn delete(&self, id: &str) {
        tracing::debug!(collection = %self.name, id, "deleting document");
        if let Err(err) = fs::remove_file(self.doc_path(id)) {
            let error = StoreError::from_read(err, &self.name, id);
            self.report("delete", Some(id), &error);
        }
    }

    /// Ids of every stored document, in directory-listing order.
    ///
    /// Only regular `*.json` files participate; the listing order is
    /// whatever the filesystem returns and is not stable across
    /// filesystems.
    fn scan_ids(&self) -> Vec<String> {
        tracing::trace!(collection = %self.name, "scanning collection");
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) => {
                self.report("scan", None, &StoreError::Io(err));
                return Vec::new();
            }
        };

        let mut ids = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOC_EXT) {
                continue;
            }
            if let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.push(id.to_string());
            }
        }
        ids
    }

    /// Runs `visit` over each matching document in listing order,
    /// stopping early when `visit` returns false.
    ///
    /// Entries that fail to load or decode are skipped; the failure has
    /// already been reported on the read path.
    fn for_each_match(&self, filter: &Filter<T>, mut visit: impl FnMut(String, T) -> bool) {
        for id in self.scan_ids() {
            let Some(raw) = self.read_raw("find", &id) else {
                continue;
            };
            let Some(doc) = self.decode("find", &id, &raw) else {
                continue;
            };
            if !filter.matches(&raw, &doc) {
                continue;
            }
            if !visit(id, doc) {
                break;
            }
        }
    }

    /// Loads every document, keyed by id.
    ///
    /// Entries that fail to load are skipped (already reported). The
    /// mapping is id-ordered as a property of the container; the
    /// underlying scan order carries no guarantee.
    #[must_use]
    pub fn get_all(&self) -> BTreeMap<String, T> {
        let mut docs = BTreeMap::new();
        for id in self.scan_ids() {
            if let Some(doc) = self.get(&id) {
                docs.insert(id, doc);
            }
        }
        docs
    }

    /// Loads every document as a sequence, in directory-listing order.
    ///
    /// The array counterpart of [`Collection::get_all`]; both return the
    /// same set of documents.
    #[must_use]
    pub fn scan_all(&self) -> Vec<T> {
        self.scan_ids()
            .into_iter()
            .filter_map(|id| self.get(&id))
            .collect()
    }

    /// Returns the number of stored documents. Full directory listing.
    #[must_use]
    pub fn count(&self) -> usize {
        self.scan_ids().len()
    }

    /// Collects every document satisfying `filter`, in listing order.
    #[must_use]
    pub fn find_many(&self, filter: &Filter<T>) -> Vec<T> {
        let mut found = Vec::new();
        self.for_each_match(filter, |_, doc| {
            found.push(doc);
            true
        });
        found
    }

    /// Collects every document satisfying `filter`, keyed by id.
    #[must_use]
    pub fn find_entries(&self, filter: &Filter<T>) -> BTreeMap<String, T> {
        let mut found = BTreeMap::new();
        self.for_each_match(filter, |id, doc| {
            found.insert(id, doc);
            true
        });
        found
    }

    /// Returns the first document satisfying `filter`, in listing order.
    #[must_use]
    pub fn find_one(&self, filter: &Filter<T>) -> Option<T> {
        let mut found = None;
        self.for_each_match(filter, |_, doc| {
            found = Some(doc);
            false
        });
        found
    }

    /// Applies a partial update to the first document satisfying
    /// `filter`; the scan stops at the first match.
    ///
    /// Returns `Ok(None)` when nothing matches - a no-op. Otherwise
    /// behaves exactly like [`Collection::update`] on the matched id and
    /// returns the merged document.
    ///
    /// # Errors
    ///
    /// Same as [`Collection::update`].
    pub fn update_one<P>(&self, filter: &Filter<T>, partial: &P) -> StoreResult<Option<T>>
    where
        P: Serialize + ?Sized,
    {
        let mut target = None;
        self.for_each_match(filter, |id, _| {
            target = Some(id);
            false
        });
        match target {
            Some(id) => self.update(&id, partial).map(Some),
            None => Ok(None),
        }
    }

    /// Deletes the first document satisfying `filter`.
    ///
    /// Returns the deleted id, or `None` when nothing matched.
    pub fn delete_one(&self, filter: &Filter<T>) -> Option<String> {
        let mut target = None;
        self.for_each_match(filter, |id, _| {
            target = Some(id);
            false
        });
        let id = target?;
        self.delete(&id);
        Some(id)
    }

    /// Deletes every document satisfying `filter`.
    ///
    /// Returns the number of documents deleted. After this returns, no
    /// remaining document satisfies `filter`.
    pub fn delete_many(&self, filter: &Filter<T>) -> usize {
        let mut targets = Vec::new();
        self.for_each_match(filter, |id, _| {
            targets.push(id);
            true
        });
        for id in &targets {
            self.delete(id);
        }
        targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemorySink;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::{tempdir, TempDir};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Pet {
        id: String,
        name: String,
        kind: String,
    }

    fn pet(id: &str, name: &str, kind: &str) -> Pet {
        Pet {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    fn setup() -> (TempDir, Arc<Catalog>, Arc<MemorySink>) {
        let temp = tempdir().unwrap();
        let sink = Arc::new(MemorySink::new());
        let catalog = Catalog::with_sink(temp.path(), sink.clone());
        catalog.init();
        (temp, catalog, sink)
    }

    #[test]
    fn create_then_get_round_trips() {
        let (_temp, catalog, sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        let rex = pet("rex", "Rex", "dog");
        pets.create("rex", &rex).unwrap();

        assert_eq!(pets.get("rex"), Some(rex));
        assert!(sink.is_empty());
    }

    #[test]
    fn stored_file_is_compact_json_with_id() {
        let (temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Value>("pets");

        pets.create("rex", &json!({"kind": "dog"})).unwrap();

        let bytes = fs::read(temp.path().join("pets").join("rex.json")).unwrap();
        let stored: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(stored["id"], json!("rex"));
        assert_eq!(stored["kind"], json!("dog"));
        // Compact encoding, no pretty-printing.
        assert!(!bytes.contains(&b'\n'));
    }

    #[test]
    fn id_argument_wins_over_embedded_id() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("rex", &pet("other", "Rex", "dog")).unwrap();

        assert_eq!(pets.get("rex").unwrap().id, "rex");
    }

    #[test]
    fn get_missing_reports_and_returns_none() {
        let (_temp, catalog, sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        assert_eq!(pets.get("ghost"), None);
        assert_eq!(sink.len(), 1);
        assert!(sink.reports()[0].starts_with("get pets/ghost"));
    }

    #[test]
    fn get_corrupt_file_reports_and_returns_none() {
        let (temp, catalog, sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        fs::write(temp.path().join("pets").join("bad.json"), b"{not json").unwrap();

        assert_eq!(pets.get("bad"), None);
        assert_eq!(sink.len(), 1);
        assert!(sink.reports()[0].contains("serialization error"));
    }

    #[test]
    fn exists_probe() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        assert!(!pets.exists("rex"));
        pets.create("rex", &pet("rex", "Rex", "dog")).unwrap();
        assert!(pets.exists("rex"));
    }

    #[test]
    fn create_is_exclusive() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("rex", &pet("rex", "Rex", "dog")).unwrap();
        let second = pets.create("rex", &pet("rex", "Impostor", "cat"));

        assert!(matches!(second, Err(StoreError::AlreadyExists { .. })));
        // The original document is unchanged.
        assert_eq!(pets.get("rex").unwrap().name, "Rex");
    }

    #[test]
    fn update_merges_nested_objects_and_replaces_scalars() {
        let (_temp, catalog, _sink) = setup();
        let docs = catalog.open_collection::<Value>("docs");

        docs.create("d", &json!({"a": {"x": 1, "y": 2}, "b": 3}))
            .unwrap();
        let merged = docs.update("d", &json!({"a": {"y": 5}, "b": 9})).unwrap();

        assert_eq!(
            merged,
            json!({"id": "d", "a": {"x": 1, "y": 5}, "b": 9})
        );
        assert_eq!(docs.get("d"), Some(merged));
    }

    #[test]
    fn update_replaces_arrays_wholesale() {
        let (_temp, catalog, _sink) = setup();
        let docs = catalog.open_collection::<Value>("docs");

        docs.create("d", &json!({"tags": [1, 2, 3]})).unwrap();
        let merged = docs.update("d", &json!({"tags": [9]})).unwrap();

        assert_eq!(merged["tags"], json!([9]));
    }

    #[test]
    fn update_creates_missing_document() {
        let (_temp, catalog, sink) = setup();
        let docs = catalog.open_collection::<Value>("docs");

        let created = docs.update("new-id", &json!({"a": 1})).unwrap();

        assert_eq!(created, json!({"id": "new-id", "a": 1}));
        // The failed read on the way in is a reported diagnostic, not an
        // error.
        assert_eq!(sink.len(), 1);
        assert!(sink.reports()[0].starts_with("update docs/new-id"));
    }

    #[test]
    fn update_rejects_non_object_partial() {
        let (_temp, catalog, _sink) = setup();
        let docs = catalog.open_collection::<Value>("docs");

        let result = docs.update("d", &json!([1, 2]));
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn delete_is_idempotent() {
        let (_temp, catalog, sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("rex", &pet("rex", "Rex", "dog")).unwrap();
        pets.delete("rex");
        assert!(!pets.exists("rex"));
        assert!(sink.is_empty());

        // Deleting again succeeds from the caller's view; the miss is a
        // diagnostic.
        pets.delete("rex");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn get_all_and_scan_all_return_the_same_set() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        for (id, kind) in [("a", "cat"), ("b", "dog"), ("c", "cat")] {
            pets.create(id, &pet(id, id, kind)).unwrap();
        }

        let map = pets.get_all();
        let mut from_map: Vec<Pet> = map.into_values().collect();
        let mut from_scan = pets.scan_all();

        from_map.sort_by(|a, b| a.id.cmp(&b.id));
        from_scan.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(from_map, from_scan);
        assert_eq!(from_scan.len(), 3);
    }

    #[test]
    fn scan_skips_unloadable_entries() {
        let (temp, catalog, sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("rex", &pet("rex", "Rex", "dog")).unwrap();
        fs::write(temp.path().join("pets").join("bad.json"), b"...").unwrap();
        fs::write(temp.path().join("pets").join("notes.txt"), b"ignored").unwrap();

        let all = pets.get_all();
        assert_eq!(all.len(), 1);
        assert!(all.contains_key("rex"));
        // The corrupt entry was reported; the non-json file was not even
        // considered.
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn find_many_with_pattern() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("1", &pet("1", "Tom", "cat")).unwrap();
        pets.create("2", &pet("2", "Rex", "dog")).unwrap();

        let dogs = pets.find_many(&Filter::pattern(json!({"kind": "dog"})));
        assert_eq!(dogs, vec![pet("2", "Rex", "dog")]);
    }

    #[test]
    fn find_one_with_predicate() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("1", &pet("1", "Tom", "cat")).unwrap();
        pets.create("2", &pet("2", "Rex", "dog")).unwrap();

        let found = pets.find_one(&Filter::predicate(|p: &Pet| p.id == "1"));
        assert_eq!(found, Some(pet("1", "Tom", "cat")));

        let none = pets.find_one(&Filter::pattern(json!({"kind": "bird"})));
        assert_eq!(none, None);
    }

    #[test]
    fn find_entries_keys_by_id() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("1", &pet("1", "Tom", "cat")).unwrap();
        pets.create("2", &pet("2", "Rex", "dog")).unwrap();
        pets.create("3", &pet("3", "Ada", "cat")).unwrap();

        let cats = pets.find_entries(&Filter::pattern(json!({"kind": "cat"})));
        assert_eq!(cats.keys().collect::<Vec<_>>(), vec!["1", "3"]);
    }

    #[test]
    fn update_one_touches_only_the_first_match() {
        let (_temp, catalog, _sink) = setup();
        let docs = catalog.open_collection::<Value>("docs");

        docs.create("1", &json!({"kind": "cat", "fed": false})).unwrap();
        docs.create("2", &json!({"kind": "cat", "fed": false})).unwrap();

        let updated = docs
            .update_one(&Filter::pattern(json!({"kind": "cat"})), &json!({"fed": true}))
            .unwrap()
            .unwrap();
        assert_eq!(updated["fed"], json!(true));

        // Exactly one document changed.
        let fed = docs.find_many(&Filter::pattern(json!({"fed": true})));
        assert_eq!(fed.len(), 1);
    }

    #[test]
    fn update_one_without_match_is_a_noop() {
        let (_temp, catalog, _sink) = setup();
        let docs = catalog.open_collection::<Value>("docs");

        docs.create("1", &json!({"kind": "cat"})).unwrap();

        let result = docs
            .update_one(&Filter::pattern(json!({"kind": "bird"})), &json!({"fed": true}))
            .unwrap();
        assert_eq!(result, None);
        assert_eq!(docs.count(), 1);
    }

    #[test]
    fn delete_one_removes_a_single_match() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("1", &pet("1", "Tom", "cat")).unwrap();
        pets.create("2", &pet("2", "Ada", "cat")).unwrap();

        let deleted = pets.delete_one(&Filter::pattern(json!({"kind": "cat"})));
        assert!(deleted.is_some());
        assert_eq!(pets.count(), 1);

        let none = pets.delete_one(&Filter::pattern(json!({"kind": "bird"})));
        assert_eq!(none, None);
    }

    #[test]
    fn delete_many_is_complete() {
        let (_temp, catalog, _sink) = setup();
        let pets = catalog.open_collection::<Pet>("pets");

        pets.create("1", &pet("1", "Tom", "cat")).unwrap();
        pets.create("2", &pet("2", "Rex", "dog")).unwrap();
        pets.create("3", &pet("3", "Ada", "cat")).unwrap();

        let filter = Filter::pattern(json!({"kind": "cat"}));
        assert_eq!(pets.delete_many(&filter), 2);

        assert!(pets.find_many(&filter).is_empty());
        assert_eq!(pets.count(), 1);
    }

    #[test]
    fn collections_are_isolated() {
        let (_temp, catalog, _sink) = setup();
        let a = catalog.open_collection::<Pet>("a");
        let b = catalog.open_collection::<Pet>("b");

        a.create("rex", &pet("rex", "A-Rex", "dog")).unwrap();
        b.create("rex", &pet("rex", "B-Rex", "dog")).unwrap();

        a.delete("rex");

        assert!(!a.exists("rex"));
        assert_eq!(b.get("rex").unwrap().name, "B-Rex");
    }

    #[test]
    fn update_rereads_file_state_at_call_time() {
        let (temp, catalog, _sink) = setup();
        let docs = catalog.open_collection::<Value>("docs");

        docs.create("d", &json!({"n": 0})).unwrap();

        // Another process rewrites the file out from under this handle.
        fs::write(
            temp.path().join("docs").join("d.json"),
            serde_json::to_vec(&json!({"id": "d", "n": 7})).unwrap(),
        )
        .unwrap();

        // update merges against whatever is on disk when it runs; there is
        // no cached state and no lock.
        let merged = docs.update("d", &json!({"a": 1})).unwrap();
        assert_eq!(merged, json!({"id": "d", "n": 7, "a": 1}));
    }
}
