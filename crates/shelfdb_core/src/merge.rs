//! Recursive merging of partial updates into stored documents.

use serde_json::{Map, Value};

/// Deep-merges `overlay` into `base`.
///
/// For every key in `overlay`:
///
/// - an object value merges key-wise into the corresponding sub-object of
///   `base`, which is created (or replaced, when the existing value is not
///   an object) as needed;
/// - any other value - scalars and arrays alike - overwrites the key
///   outright. Arrays are replaced wholesale, never merged element-wise.
///
/// Keys of `base` absent from `overlay` are left untouched.
///
/// `serde_json` values are acyclic by construction, so the recursion
/// always terminates.
///
/// # Example
///
/// Merging `{"a": {"y": 5}, "b": 9}` into `{"a": {"x": 1, "y": 2}, "b": 3}`
/// yields `{"a": {"x": 1, "y": 5}, "b": 9}`: the nested object merged, the
/// scalar was replaced, and the untouched sibling key survived.
pub fn deep_merge(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match value {
            Value::Object(nested) => {
                let slot = base
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(target) = slot {
                    deep_merge(target, nested);
                }
            }
            other => {
                base.insert(key.clone(), other.clone());
            }
        }
    }
}

/// Applies several overlays to `base`, left to right.
///
/// Later overlays win wherever they touch the same keys.
pub fn deep_merge_all<'a, I>(base: &mut Map<String, Value>, overlays: I)
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    for overlay in overlays {
        deep_merge(base, overlay);
    }
}
