//! Typed model for entity metadata documents.
//!
//! A document is parsed once into a closed field-description sum so the
//! converter walks a typed tree instead of re-inspecting raw JSON keys at
//! every level of the recursion.

use anyhow::anyhow;
use indexmap::IndexMap;
use serde::Deserialize;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataDocument {
    pub schema: EntitySchema,
}

/// The `schema` section of a metadata document. Sibling sections (e.g.
/// `entityInfo`) and per-field attributes beyond the shapes below are ignored
/// on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitySchema {
    pub name: String,
    pub fields: IndexMap<String, FieldDescription>,
}

/// One field description, dispatched on its `type` key.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawFieldDescription")]
pub enum FieldDescription {
    /// To-many link to another top-level entity, defined elsewhere.
    Reference { entity: String },
    /// Nested object with its own field mapping.
    Object { fields: IndexMap<String, FieldDescription> },
    /// Homogeneous array; `items` is itself a field description.
    Array { items: Box<FieldDescription> },
    /// Primitive leaf. Keeps the raw type name; unrecognized names are
    /// resolved leniently by the type mapper, not rejected here.
    Scalar { kind: String },
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl MetadataDocument {
    /// Deserialize from JSON source with JSON-path context in error messages.
    pub fn from_json_str(src: &str) -> anyhow::Result<Self> {
        let de = &mut serde_json::Deserializer::from_str(src);
        match serde_path_to_error::deserialize(de) {
            Ok(document) => Ok(document),
            Err(err) => {
                let path = err.path().to_string();
                Err(anyhow!("at JSON path {path} → {}", err.into_inner()))
            }
        }
    }
}

/// Loosely-shaped mirror of the wire format; `From` collapses it into the
/// closed sum above. Structurally incomplete combinations (a `reference`
/// without `entity`, an `object` without `fields`, an `array` without
/// `items`) degrade to `Scalar` and end up as plain strings in the output.
#[derive(Debug, Clone, Deserialize)]
struct RawFieldDescription {
    #[serde(rename = "type")]
    kind: String,
    entity: Option<String>,
    fields: Option<IndexMap<String, FieldDescription>>,
    items: Option<Box<FieldDescription>>,
}

impl From<RawFieldDescription> for FieldDescription {
    fn from(raw: RawFieldDescription) -> Self {
        let RawFieldDescription { kind, entity, fields, items } = raw;
        match kind.as_str() {
            "reference" => {
                if let Some(entity) = entity {
                    return Self::Reference { entity };
                }
            }
            "object" => {
                if let Some(fields) = fields {
                    return Self::Object { fields };
                }
            }
            "array" => {
                if let Some(items) = items {
                    return Self::Array { items };
                }
            }
            _ => {}
        }
        Self::Scalar { kind }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
