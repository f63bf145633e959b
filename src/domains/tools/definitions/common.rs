//! Common helpers shared across the query tools.
//!
//! Argument parsing, limit clamping, filter conversion and result rendering
//! live here so each tool file only states what it queries.

use mongodb::bson::Document;
use rmcp::model::{JsonObject, Tool};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domains::store::DocumentStore;
use crate::domains::tools::ToolError;
use crate::domains::tools::schema::SchemaNode;

/// Name of the collection holding conversation records.
pub const CONVERSATIONS_COLLECTION: &str = "conversations";

/// Timestamp field used to order conversations.
pub const TIMESTAMP_FIELD: &str = "datestamp";

/// Conversation fields matched by text search.
pub const SEARCH_FIELDS: [&str; 2] = ["question", "answer"];

/// Upper bound on documents returned by a single call.
pub const MAX_LIMIT: i64 = 1000;

/// Build the Tool model advertised to clients.
pub fn descriptor(name: &'static str, description: &'static str, schema: &SchemaNode) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: schema.to_json_object(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize arguments into the tool's argument struct.
///
/// `null` values are dropped first so they fall back to the serde default,
/// the same as an omitted argument.
pub fn parse_args<T: DeserializeOwned>(tool: &str, mut arguments: JsonObject) -> Result<T, ToolError> {
    arguments.retain(|_, value| !value.is_null());
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(tool, e.to_string()))
}

/// Fail with `CollectionNotFound` unless `collection` exists.
///
/// The store answers queries on missing collections with empty results, so
/// the check has to be explicit.
pub async fn ensure_collection(
    store: &dyn DocumentStore,
    collection: &str,
) -> Result<(), ToolError> {
    let names = store.list_collections().await?;
    if names.iter().any(|name| name == collection) {
        Ok(())
    } else {
        Err(ToolError::collection_not_found(collection))
    }
}

/// Clamp a client-supplied limit to `[1, MAX_LIMIT]`, truncating fractions.
pub fn clamp_limit(limit: f64) -> i64 {
    if !limit.is_finite() || limit < 1.0 {
        return 1;
    }
    if limit >= MAX_LIMIT as f64 {
        return MAX_LIMIT;
    }
    limit.trunc() as i64
}

/// Convert a JSON filter (extended JSON allowed) into a BSON document.
pub fn to_filter_document(tool: &str, filter: JsonObject) -> Result<Document, ToolError> {
    Document::try_from(filter)
        .map_err(|e| ToolError::invalid_arguments(tool, format!("invalid filter: {e}")))
}

/// Pretty-print a JSON value as the tool's text output.
pub fn render_json(value: &Value) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use serde::Deserialize;
    use serde_json::json;

    use crate::domains::store::mock::MockStore;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(10.0), 10);
        assert_eq!(clamp_limit(3.7), 3);
        assert_eq!(clamp_limit(0.0), 1);
        assert_eq!(clamp_limit(-5.0), 1);
        assert_eq!(clamp_limit(f64::NAN), 1);
        assert_eq!(clamp_limit(f64::INFINITY), 1);
        assert_eq!(clamp_limit(5000.0), MAX_LIMIT);
    }

    #[test]
    fn test_filter_document_conversion() {
        let filter = json!({ "city": "Oslo", "n": { "$gt": 2 } });
        let Value::Object(map) = filter else {
            unreachable!()
        };
        let doc = to_filter_document("query_collection", map).unwrap();
        assert_eq!(doc, doc! { "city": "Oslo", "n": { "$gt": 2 } });
    }

    #[test]
    fn test_filter_document_extended_json() {
        let filter = json!({ "_id": { "$oid": "507f1f77bcf86cd799439011" } });
        let Value::Object(map) = filter else {
            unreachable!()
        };
        let doc = to_filter_document("query_collection", map).unwrap();
        assert!(doc.get_object_id("_id").is_ok());
    }

    #[derive(Debug, Deserialize)]
    struct Args {
        name: String,
        #[serde(default = "seven")]
        limit: f64,
    }

    fn seven() -> f64 {
        7.0
    }

    #[test]
    fn test_parse_args_applies_defaults() {
        let mut arguments = JsonObject::new();
        arguments.insert("name".into(), json!("x"));

        let args: Args = parse_args("t", arguments).unwrap();
        assert_eq!(args.name, "x");
        assert_eq!(args.limit, 7.0);
    }

    #[test]
    fn test_parse_args_null_is_missing() {
        let mut arguments = JsonObject::new();
        arguments.insert("name".into(), json!("x"));
        arguments.insert("limit".into(), Value::Null);

        let args: Args = parse_args("t", arguments).unwrap();
        assert_eq!(args.limit, 7.0);
    }

    #[test]
    fn test_parse_args_missing_required() {
        let err = parse_args::<Args>("t", JsonObject::new()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
        assert!(err.to_string().contains("name"));
    }

    #[tokio::test]
    async fn test_ensure_collection() {
        let store = MockStore::new().with_collection("weather", vec![]);
        assert!(ensure_collection(&store, "weather").await.is_ok());

        let err = ensure_collection(&store, "no_such").await.unwrap_err();
        assert!(matches!(err, ToolError::CollectionNotFound(_)));
        assert_eq!(err.to_string(), "Collection 'no_such' not found");
    }
}
