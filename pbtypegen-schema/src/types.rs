//! Schema type definitions.
//!
//! This module contains the data structures representing a backend schema:
//! collections, their fields, and the kind-specific field options.

/// A named set of uniformly shaped records.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Collection identifier, referenced by relation fields.
    pub id: String,
    /// Collection name (unique within a schema set).
    pub name: String,
    /// Collection kind.
    pub kind: CollectionKind,
    /// Whether the collection is managed by the backend itself.
    pub system: bool,
    /// Access rules, passed through untouched.
    pub rules: AccessRules,
    /// Field definitions. `None` when the collection declares no schema.
    pub schema: Option<Vec<Field>>,
    /// Collection-level options, kept opaque.
    pub options: Option<serde_json::Value>,
}

impl Collection {
    /// Creates a new collection with an empty schema.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CollectionKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            system: false,
            rules: AccessRules::default(),
            schema: Some(Vec::new()),
            options: None,
        }
    }

    /// Creates a collection that declares no schema at all.
    #[must_use]
    pub fn without_schema(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: CollectionKind,
    ) -> Self {
        Self {
            schema: None,
            ..Self::new(id, name, kind)
        }
    }

    /// Adds a field to the collection schema.
    pub fn add_field(&mut self, field: Field) {
        self.schema.get_or_insert_with(Vec::new).push(field);
    }

    /// Builder-style variant of [`Collection::add_field`].
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Returns the declared fields, empty when there is no schema.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        self.schema.as_deref().unwrap_or_default()
    }

    /// Returns true if this is an auth collection.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self.kind, CollectionKind::Auth)
    }
}

/// Collection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionKind {
    /// Plain record collection.
    #[default]
    Base,
    /// Collection whose records can authenticate.
    Auth,
}

impl CollectionKind {
    /// Maps a collection `type` from the wire.
    ///
    /// Only `auth` carries distinct system fields; every other kind
    /// (`base`, `normal`, `view`, ...) is treated as a plain collection.
    #[must_use]
    pub fn from_wire(s: &str) -> Self {
        match s {
            "auth" => Self::Auth,
            _ => Self::Base,
        }
    }
}

/// Access rule expressions of a collection.
///
/// These are opaque filter strings; `None` means the action is restricted
/// to administrators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRules {
    /// Rule for listing records.
    pub list: Option<String>,
    /// Rule for viewing one record.
    pub view: Option<String>,
    /// Rule for creating records.
    pub create: Option<String>,
    /// Rule for updating records.
    pub update: Option<String>,
    /// Rule for deleting records.
    pub delete: Option<String>,
}

/// One typed attribute of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field identifier.
    pub id: String,
    /// Field name (unique within its collection).
    pub name: String,
    /// Field kind along with its kind-specific options.
    pub kind: FieldKind,
    /// Whether the field is managed by the backend itself.
    pub system: bool,
    /// Whether a value is required.
    pub required: bool,
    /// Whether values must be unique.
    pub unique: bool,
}

impl Field {
    /// Creates a new optional field.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            kind,
            system: false,
            required: false,
            unique: false,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Field kinds with their options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text.
    Text,
    /// Numeric value.
    Number,
    /// Boolean flag.
    Bool,
    /// Email address.
    Email,
    /// URL.
    Url,
    /// Timestamp serialized as text.
    Date,
    /// Closed choice among declared values.
    Select {
        /// Allowed values, if declared.
        values: Option<Vec<String>>,
        /// Maximum number of selected values.
        max_select: Option<u32>,
    },
    /// Arbitrary JSON content.
    Json,
    /// Stored file name(s).
    File {
        /// Maximum number of files.
        max_select: Option<u32>,
    },
    /// Reference to records of another collection.
    Relation {
        /// Identifier of the target collection.
        collection_id: String,
        /// Maximum number of referenced records.
        max_select: Option<u32>,
    },
    /// Legacy user relation, kept for older schema snapshots.
    User {
        /// Maximum number of referenced users.
        max_select: Option<u32>,
    },
}

impl FieldKind {
    /// Returns true for json fields.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Returns true when a `maxSelect` option allows more than one value.
#[must_use]
pub fn allows_many(max_select: Option<u32>) -> bool {
    max_select.is_some_and(|n| n > 1)
}

/// Returns true when a `maxSelect` option pins a relation to exactly one value.
#[must_use]
pub fn exactly_one(max_select: Option<u32>) -> bool {
    max_select == Some(1)
}
