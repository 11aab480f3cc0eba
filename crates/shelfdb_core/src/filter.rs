//! Document selection for scan-based queries.

use serde_json::{Map, Value};

/// Selects documents during a collection scan.
///
/// A filter is one of two shapes:
///
/// - [`Filter::Predicate`] - an arbitrary function over the decoded
///   document;
/// - [`Filter::Pattern`] - a partial record whose every field must equal
///   the corresponding field of the document. Missing or unequal fields
///   disqualify; extra fields in the document are ignored.
///
/// The two shapes are a sum type rather than runtime type inspection, so
/// the matching logic is statically exhaustive.
///
/// # Example
///
/// ```rust,ignore
/// let dogs = pets.find_many(&Filter::pattern(json!({"kind": "dog"})));
/// let seniors = pets.find_many(&Filter::predicate(|p: &Pet| p.age > 10));
/// ```
pub enum Filter<T> {
    /// Matches documents for which the function returns true.
    Predicate(Box<dyn Fn(&T) -> bool + Send + Sync>),
    /// Matches documents whose fields equal every field of the pattern.
    ///
    /// Comparison is structural `Value` equality, key by key. A pattern
    /// that is not a JSON object matches nothing.
    Pattern(Value),
}

impl<T> Filter<T> {
    /// Builds a predicate filter from a function over the document.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Box::new(f))
    }

    /// Builds a pattern filter from a partial record.
    #[must_use]
    pub fn pattern(pattern: Value) -> Self {
        Self::Pattern(pattern)
    }

    /// Whether a document matches this filter.
    ///
    /// `raw` is the stored JSON object and `doc` its decoded form; pattern
    /// filters compare against `raw`, predicates run over `doc`.
    pub(crate) fn matches(&self, raw: &Map<String, Value>, doc: &T) -> bool {
        match self {
            Self::Predicate(f) => f(doc),
            Self::Pattern(pattern) => match pattern.as_object() {
                Some(fields) => fields.iter().all(|(key, want)| raw.get(key) == Some(want)),
                None => false,
            },
        }
    }
}
