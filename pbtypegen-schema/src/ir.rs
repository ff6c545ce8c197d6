//! Intermediate representation for code generation.
//!
//! The IR owns the collection set for one generation pass: collections are
//! sorted by name and indexed by identifier so relation targets can be
//! resolved without any collection holding a reference to another.

use crate::error::SchemaError;
use crate::types::Collection;
use std::collections::HashMap;

/// Sorted, indexed collection set.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Collections sorted by name.
    pub collections: Vec<Collection>,
    /// Collection id lookup (id -> index into `collections`).
    by_id: HashMap<String, usize>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a collection set.
    #[must_use]
    pub fn from_collections(mut collections: Vec<Collection>) -> Self {
        collections.sort_by(|a, b| a.name.cmp(&b.name));

        let by_id = collections
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id.clone(), idx))
            .collect();

        Self { collections, by_id }
    }

    /// Gets a collection by id.
    #[must_use]
    pub fn collection_by_id(&self, id: &str) -> Option<&Collection> {
        self.by_id.get(id).map(|&idx| &self.collections[idx])
    }

    /// Resolves the target collection of a relation.
    ///
    /// # Errors
    /// Returns `SchemaError::UnresolvedRelationTarget` if no collection has
    /// the given id.
    pub fn resolve_relation(&self, collection_id: &str) -> Result<&Collection, SchemaError> {
        self.collection_by_id(collection_id)
            .ok_or_else(|| SchemaError::unresolved(collection_id))
    }

    /// Iterates over the collections that declare a schema, in name order.
    pub fn schema_collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter().filter(|c| c.schema.is_some())
    }

    /// Returns the number of collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns true if there are no collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
