//! Read-only view over a tool's generated input schema.
//!
//! Input schemas are derived with `schemars` from each tool's argument
//! struct. [`SchemaNode`] wraps the generated JSON Schema object and answers
//! the questions the registry and its tests ask: which properties exist,
//! their types, which are required and what the declared defaults are.

use std::sync::Arc;

use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde_json::Value;

/// Type of a single property, as declared in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

impl SchemaType {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            _ => None,
        }
    }
}

/// An object schema generated from an argument struct.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    schema: Arc<JsonObject>,
}

impl SchemaNode {
    /// Generate the schema of `T`.
    pub fn of<T: JsonSchema + 'static>() -> Self {
        Self {
            schema: Arc::new(schema_for_type::<T>()),
        }
    }

    /// The JSON Schema object advertised by `tools/list`.
    pub fn to_json_object(&self) -> Arc<JsonObject> {
        self.schema.clone()
    }

    fn property(&self, name: &str) -> Option<&JsonObject> {
        self.schema
            .get("properties")
            .and_then(Value::as_object)
            .and_then(|props| props.get(name))
            .and_then(Value::as_object)
    }

    /// Names of all declared properties.
    pub fn property_names(&self) -> Vec<&str> {
        self.schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Names of the required properties.
    pub fn required_names(&self) -> Vec<&str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Declared type of a property.
    pub fn property_type(&self, name: &str) -> Option<SchemaType> {
        match self.property(name)?.get("type")? {
            Value::String(t) => SchemaType::parse(t),
            // Nullable types render as ["object", "null"].
            Value::Array(types) => types
                .iter()
                .filter_map(Value::as_str)
                .find(|t| *t != "null")
                .and_then(SchemaType::parse),
            _ => None,
        }
    }

    /// Declared default of a property.
    pub fn default_of(&self, name: &str) -> Option<&Value> {
        self.property(name)?.get("default")
    }

    /// Declared description of a property.
    pub fn description_of(&self, name: &str) -> Option<&str> {
        self.property(name)?.get("description")?.as_str()
    }
}
