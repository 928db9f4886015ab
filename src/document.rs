//! Firestore document and query response representations.
//!
//! [`Document`] is the unit of replication. The transform core treats its
//! field payload as opaque: only the fully qualified `name` participates in
//! routing decisions. [`QueryResponse`] is the envelope the source query
//! client yields per result; everything in it besides the document is
//! transport metadata that downstream stages discard.
//!
//! Field names follow the Firestore v1 REST wire shape (camelCase) so the
//! types round-trip through the store's client library unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single document in the hierarchical store.
///
/// `name` is the fully qualified path, e.g.
/// `projects/p1/databases/(default)/documents/users/42`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Fully qualified document path.
    pub name: String,

    /// Field payload. Opaque to the transform core.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,

    /// Server-assigned creation timestamp.
    #[serde(rename = "createTime", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// Server-assigned last-update timestamp.
    #[serde(rename = "updateTime", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a document with the given name and no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Map::new(),
            create_time: None,
            update_time: None,
        }
    }

    /// Adds a field to the document (builder style, mainly for tests).
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Returns true if the document carries a non-empty name.
    #[inline]
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// One envelope from a streamed query.
///
/// A response either carries a document or is a progress marker (heartbeat,
/// skipped-results report, transaction handle). Only the document survives
/// past the unpack stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryResponse {
    /// The document matched by the query, absent for progress-only messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,

    /// Server read time for this response.
    #[serde(rename = "readTime", skip_serializing_if = "Option::is_none")]
    pub read_time: Option<DateTime<Utc>>,

    /// Transaction handle, set on the first response inside a transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,

    /// Number of results skipped due to a query offset.
    #[serde(rename = "skippedResults", skip_serializing_if = "Option::is_none")]
    pub skipped_results: Option<i32>,
}

impl QueryResponse {
    /// Creates a response carrying a document.
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
            ..Self::default()
        }
    }

    /// Creates a progress-only response with no document.
    #[must_use]
    pub fn progress(read_time: DateTime<Utc>) -> Self {
        Self {
            read_time: Some(read_time),
            ..Self::default()
        }
    }

    /// Returns true if this envelope carries a document.
    #[inline]
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_builder() {
        let doc = Document::new("projects/p/databases/d/documents/users/1")
            .with_field("age", json!(30));

        assert!(doc.has_name());
        assert_eq!(doc.fields.get("age"), Some(&json!(30)));
    }

    #[test]
    fn document_wire_names_are_camel_case() {
        let mut doc = Document::new("projects/p/databases/d/documents/users/1");
        doc.update_time = Some(Utc::now());

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("updateTime").is_some());
        assert!(json.get("createTime").is_none());
    }

    #[test]
    fn progress_response_has_no_document() {
        let response = QueryResponse::progress(Utc::now());
        assert!(!response.has_document());
        assert!(response.read_time.is_some());
    }
}
