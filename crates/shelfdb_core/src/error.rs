//! Error types for the store engine.

use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document not found on a read, update, or delete path.
    #[error("document not found: {id:?} in collection {collection}")]
    NotFound {
        /// The collection searched.
        collection: String,
        /// The document id that was not found.
        id: String,
    },

    /// `create` was called for an id that already has a file.
    #[error("document already exists: {id:?} in collection {collection}")]
    AlreadyExists {
        /// The collection written to.
        collection: String,
        /// The id that collided.
        id: String,
    },

    /// `create_collection` was called for a name whose directory exists.
    #[error("collection already exists: {name}")]
    CollectionExists {
        /// Name of the collection.
        name: String,
    },

    /// Stored bytes are not valid JSON, or a record cannot be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any underlying filesystem error not covered above.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Creates a document-not-found error.
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Creates a document-already-exists error.
    pub fn already_exists(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Creates a collection-already-exists error.
    pub fn collection_exists(name: impl Into<String>) -> Self {
        Self::CollectionExists { name: name.into() }
    }

    /// Creates a serialization error for a record that is not a JSON object.
    pub fn invalid_document(message: impl std::fmt::Display) -> Self {
        Self::Serialization(serde::ser::Error::custom(message))
    }

    /// Classifies a filesystem error from a read path: `NotFound` for a
    /// missing file, `Io` for everything else.
    pub(crate) fn from_read(err: io::Error, collection: &str, id: &str) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::not_found(collection, id)
        } else {
            Self::Io(err)
        }
    }
}
