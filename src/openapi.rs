//! Decoration of existing JSON Schema / OpenAPI documents with registered metadata.
//!
//! Schemas are produced elsewhere (typically by schemars). This module only
//! copies descriptions and read-only markers onto the schemas whose names
//! match registered types.

use serde_json::{Map, Value};
use tracing::trace;

use crate::config;
use crate::meta::TypeMeta;
use crate::registry::Registry;

/// Decorate the registered schemas found in a JSON document.
///
/// Looks at the root schema (matched by `title`), `$defs`, `definitions`
/// and OpenAPI `components.schemas` (matched by key). Anything that is not a
/// registered type is left as is.
pub fn annotate(registry: &Registry, options: &config::Schema, mut document: Value) -> Value {
    let Some(root) = document.as_object_mut() else {
        return document;
    };

    let title = root.get("title").and_then(Value::as_str).map(str::to_owned);
    if let Some(meta) = title.as_deref().and_then(|t| registry.get(t)) {
        decorate(root, meta, options);
    }

    for key in ["$defs", "definitions"] {
        if let Some(Value::Object(defs)) = root.get_mut(key) {
            decorate_named(registry, options, defs);
        }
    }

    if let Some(Value::Object(schemas)) = root
        .get_mut("components")
        .and_then(|c| c.get_mut("schemas"))
    {
        decorate_named(registry, options, schemas);
    }

    document
}

/// Decorate a schemars root schema, returning it as JSON.
pub fn annotate_schema(
    registry: &Registry,
    options: &config::Schema,
    schema: &schemars::Schema,
) -> crate::Result<Value> {
    let document = serde_json::to_value(schema)?;
    Ok(annotate(registry, options, document))
}

fn decorate_named(registry: &Registry, options: &config::Schema, schemas: &mut Map<String, Value>) {
    for (name, schema) in schemas.iter_mut() {
        if let (Some(meta), Value::Object(obj)) = (registry.get(name), schema) {
            decorate(obj, meta, options);
        }
    }
}

fn decorate(schema: &mut Map<String, Value>, meta: &TypeMeta, options: &config::Schema) {
    trace!(schema = meta.name, "decorating schema");

    if let Some(text) = meta.description {
        set_description(schema, text, options.overwrite_descriptions);
    }

    let Some(Value::Object(properties)) = schema.get_mut("properties") else {
        return;
    };

    for field in meta.fields {
        // Boolean property schemas carry no keywords to decorate.
        let Some(Value::Object(property)) = properties.get_mut(field.name) else {
            continue;
        };
        if let Some(text) = field.description {
            set_description(property, text, options.overwrite_descriptions);
        }
        if field.read_only && options.emit_read_only {
            property.insert("readOnly".into(), Value::Bool(true));
        }
    }
}

fn set_description(schema: &mut Map<String, Value>, text: &str, overwrite: bool) {
    if overwrite || !schema.contains_key("description") {
        schema.insert("description".into(), Value::String(text.to_string()));
    }
}
