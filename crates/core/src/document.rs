//! Core document types for searchlab.
//!
//! A `Document` represents a stored record with text content, a stable
//! caller-assigned identifier, and arbitrary key-value metadata.
//! `MetadataValue` supports boolean, integer, float, and string values.

use crate::config;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A typed metadata value attached to a document.
///
/// Uses the default externally-tagged serde representation; the server API
/// layer converts to/from untagged JSON at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    /// Boolean value (`true` / `false`).
    Boolean(bool),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating-point number.
    Float(f64),
    /// UTF-8 string.
    String(String),
}

/// A stored document with text content, unique ID, and metadata.
///
/// Documents are the primary unit of storage. IDs are assigned by the caller
/// and must be unique within a store; re-indexing an existing ID overwrites
/// the previous document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned unique identifier.
    pub id: String,
    /// Text content, scored by every search strategy.
    pub content: String,
    /// Arbitrary key-value metadata. String values of the fields listed in
    /// [`config::INDEXED_METADATA_FIELDS`] are folded into the searchable
    /// text.
    #[serde(default)]
    pub metadata: HashMap<String, MetadataValue>,
}

impl Document {
    /// Creates a document with empty metadata.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Creates a document with the given metadata.
    pub fn with_metadata(
        id: impl Into<String>,
        content: impl Into<String>,
        metadata: HashMap<String, MetadataValue>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata,
        }
    }

    /// Builds the lowercased text every strategy scores against: the content
    /// followed by the string values of the indexed metadata fields, in the
    /// order they appear in [`config::INDEXED_METADATA_FIELDS`].
    pub fn searchable_text(&self) -> String {
        let mut text = self.content.to_lowercase();
        for field in config::INDEXED_METADATA_FIELDS {
            if let Some(MetadataValue::String(value)) = self.metadata.get(*field) {
                text.push(' ');
                text.push_str(&value.to_lowercase());
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_kv(k: &str, v: MetadataValue) -> HashMap<String, MetadataValue> {
        let mut m = HashMap::new();
        m.insert(k.to_string(), v);
        m
    }

    #[test]
    fn test_searchable_text_lowercases_content() {
        let doc = Document::new("1", "Diamond Solitaire Ring");
        assert_eq!(doc.searchable_text(), "diamond solitaire ring");
    }

    #[test]
    fn test_searchable_text_includes_indexed_fields() {
        let mut metadata = meta_kv("category", MetadataValue::String("Rings".into()));
        metadata.insert(
            "name".to_string(),
            MetadataValue::String("Gold Band".into()),
        );
        let doc = Document::with_metadata("1", "classic", metadata);
        // Fields appear in INDEXED_METADATA_FIELDS order: name before category.
        assert_eq!(doc.searchable_text(), "classic gold band rings");
    }

    #[test]
    fn test_searchable_text_skips_non_string_and_unindexed_fields() {
        let mut metadata = meta_kv("price", MetadataValue::Float(4999.0));
        metadata.insert(
            "badge".to_string(),
            MetadataValue::String("VINTAGE".into()),
        );
        let doc = Document::with_metadata("1", "emerald", metadata);
        assert_eq!(doc.searchable_text(), "emerald");
    }
}
