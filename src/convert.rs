//! Metadata field trees → flat `definitions` collection.
//!
//! The walker turns one document's nested field mapping into a flat set of
//! named object definitions that cross-reference each other via `$ref`.
//! Nested objects (and array-of-object items) are hoisted next to the root
//! entity, never nested inside another definition's body; their names are
//! synthesized from the path of capitalized field names leading to them.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use crate::metadata::{FieldDescription, MetadataDocument};
use crate::names::{capitalize_first, make_entity_name, singularize};

// ----------------------------- Type mapping ------------------------------- //

/// Property descriptor for a primitive metadata type.
///
/// Total over arbitrary input: unrecognized type names deliberately fall
/// back to a plain string descriptor rather than failing the run.
pub fn primitive_type_property(kind: &str) -> Value {
    match kind {
        // arbitrary-precision numerics have no lossless numeric encoding
        "bigdecimal" | "biginteger" => json!({ "type": "string" }),
        "boolean" => json!({ "type": "boolean" }),
        "date" => json!({ "type": "string", "format": "date-time" }),
        "double" => json!({ "type": "number", "format": "double" }),
        "integer" => json!({ "type": "integer", "format": "int64" }),
        _ => json!({ "type": "string" }),
    }
}

// -------------------------------- Walker ---------------------------------- //

fn definition_ref(entity_name: &str) -> String {
    format!("#/definitions/{entity_name}")
}

/// Walk one field mapping depth-first, producing its property map.
///
/// Every nested object discovered along the way is registered into
/// `definitions` keyed by the concatenated `name_stack` path. The stack is
/// restored before returning, so sibling fields see the same prefix and
/// same-named fields under different parents get distinct definition names.
pub fn process_field_tree(
    fields: &IndexMap<String, FieldDescription>,
    definitions: &mut Map<String, Value>,
    name_stack: &mut Vec<String>,
) -> Map<String, Value> {
    let mut properties = Map::new();
    for (field_name, description) in fields {
        // names containing '#' mark metadata-internal fields
        if field_name.contains('#') {
            continue;
        }
        let property = match description {
            FieldDescription::Reference { entity } => json!({
                "type": "array",
                "items": { "$ref": definition_ref(&capitalize_first(entity)) },
            }),
            FieldDescription::Object { fields: nested } => {
                name_stack.push(capitalize_first(field_name));
                let entity_name = make_entity_name(name_stack);
                let nested_properties = process_field_tree(nested, definitions, name_stack);
                definitions.insert(
                    entity_name.clone(),
                    json!({ "type": "object", "properties": nested_properties }),
                );
                name_stack.pop();
                json!({ "$ref": definition_ref(&entity_name) })
            }
            FieldDescription::Array { items } => match items.as_ref() {
                FieldDescription::Object { fields: item_fields } => {
                    name_stack.push(singularize(&capitalize_first(field_name)));
                    let entity_name = make_entity_name(name_stack);
                    let item_properties = process_field_tree(item_fields, definitions, name_stack);
                    definitions.insert(
                        entity_name.clone(),
                        json!({ "type": "object", "properties": item_properties }),
                    );
                    name_stack.pop();
                    json!({
                        "type": "array",
                        "items": { "$ref": definition_ref(&entity_name) },
                    })
                }
                FieldDescription::Scalar { kind } => json!({
                    "type": "array",
                    "items": primitive_type_property(kind),
                }),
                // array-of-array and array-of-reference items are not
                // modeled; they degrade to arrays of plain strings
                _ => json!({
                    "type": "array",
                    "items": primitive_type_property(""),
                }),
            },
            FieldDescription::Scalar { kind } => primitive_type_property(kind),
        };
        properties.insert(field_name.clone(), property);
    }
    properties
}

// --------------------------- Document conversion --------------------------- //

/// Convert one metadata document into its flat definition set: the root
/// entity plus every nested definition discovered during the walk, all as
/// top-level siblings.
pub fn document_definitions(document: &MetadataDocument) -> Map<String, Value> {
    let mut definitions = Map::new();
    let root_name = capitalize_first(&document.schema.name);
    let mut name_stack = vec![root_name.clone()];
    let properties =
        process_field_tree(&document.schema.fields, &mut definitions, &mut name_stack);
    definitions.insert(root_name, json!({ "type": "object", "properties": properties }));
    definitions
}

/// Merge per-document definition sets into one combined mapping. Later
/// documents silently overwrite earlier ones with the same entity name.
pub fn merge_definitions<'a, I>(documents: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a MetadataDocument>,
{
    let mut combined = Map::new();
    for document in documents {
        for (entity_name, definition) in document_definitions(document) {
            combined.insert(entity_name, definition);
        }
    }
    combined
}

/// Wrap the combined definition set in the output document shape.
pub fn definitions_root(definitions: Map<String, Value>) -> Value {
    json!({ "definitions": definitions })
}

// -------------------------------- Tests ----------------------------------- //
