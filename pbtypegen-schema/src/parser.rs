//! Schema document parser.
//!
//! This module reads the JSON collection list exported by the backend admin
//! API into the typed schema model. Unknown keys are ignored and field kinds
//! are checked against the supported set. `maxSelect` accepts any JSON
//! number and is normalized to a non-negative count.

use crate::error::ParseError;
use crate::types::{AccessRules, Collection, CollectionKind, Field, FieldKind};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Parses a JSON collection list from a string.
///
/// # Arguments
/// * `json` - JSON array of collection objects
///
/// # Returns
/// Parsed collections in document order.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or names an unsupported
/// field kind.
pub fn parse_collections(json: &str) -> Result<Vec<Collection>, ParseError> {
    let raw: Vec<RawCollection> = serde_json::from_str(json)?;
    raw.into_iter().map(RawCollection::into_collection).collect()
}

/// Parses a JSON collection list from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_collections_file(path: &Path) -> Result<Vec<Collection>, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_collections(&json)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCollection {
    id: String,
    name: String,
    #[serde(rename = "type", default = "default_collection_type")]
    kind: String,
    #[serde(default)]
    system: bool,
    #[serde(default)]
    list_rule: Option<String>,
    #[serde(default)]
    view_rule: Option<String>,
    #[serde(default)]
    create_rule: Option<String>,
    #[serde(default)]
    update_rule: Option<String>,
    #[serde(default)]
    delete_rule: Option<String>,
    #[serde(default)]
    schema: Option<Vec<RawField>>,
    #[serde(default)]
    options: Option<serde_json::Value>,
}

fn default_collection_type() -> String {
    "base".to_string()
}

impl RawCollection {
    fn into_collection(self) -> Result<Collection, ParseError> {
        let kind = CollectionKind::from_wire(&self.kind);

        let schema = self
            .schema
            .map(|fields| {
                fields
                    .into_iter()
                    .map(RawField::into_field)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Collection {
            id: self.id,
            name: self.name,
            kind,
            system: self.system,
            rules: AccessRules {
                list: self.list_rule,
                view: self.view_rule,
                create: self.create_rule,
                update: self.update_rule,
                delete: self.delete_rule,
            },
            schema,
            options: self.options,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawField {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    system: bool,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    unique: bool,
    #[serde(default)]
    options: RawFieldOptions,
}

/// Flat option bag shared by every field kind.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFieldOptions {
    #[serde(default, deserialize_with = "lenient_max_select")]
    max_select: Option<u32>,
    #[serde(default)]
    values: Option<Vec<String>>,
    #[serde(default)]
    collection_id: Option<String>,
}

/// Reads `maxSelect` from any JSON number.
///
/// Values of at least one round up to the next whole count, so `1.0` stays
/// `1` and `1.5` still allows many. Anything below one (zero, fractions,
/// negatives) becomes `0`, which neither allows many nor pins to one.
fn lenient_max_select<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map(|n| {
        if n >= 1.0 {
            n.ceil().min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    }))
}

impl RawField {
    fn into_field(self) -> Result<Field, ParseError> {
        let RawFieldOptions {
            max_select,
            values,
            collection_id,
        } = self.options;

        let kind = match self.kind.as_str() {
            "text" => FieldKind::Text,
            "number" => FieldKind::Number,
            "bool" => FieldKind::Bool,
            "email" => FieldKind::Email,
            "url" => FieldKind::Url,
            "date" => FieldKind::Date,
            "select" => FieldKind::Select { values, max_select },
            "json" => FieldKind::Json,
            "file" => FieldKind::File { max_select },
            "relation" => FieldKind::Relation {
                collection_id: collection_id.unwrap_or_default(),
                max_select,
            },
            "user" => FieldKind::User { max_select },
            other => return Err(ParseError::field_kind(other, &self.name)),
        };

        Ok(Field {
            id: self.id,
            name: self.name,
            kind,
            system: self.system,
            required: self.required,
            unique: self.unique,
        })
    }
}
