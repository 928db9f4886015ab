// Copyright 2025 Firecap Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! Query construction: collection selector to structured query request.
//!
//! The first transform stage maps each collection selector to exactly one
//! [`QueryRequest`] scoped under the pipeline's base document path. The
//! selector is a proper sum type: watching every collection is
//! [`CollectionSelector::AllCollections`], not a magic string, so a real
//! collection that happens to be called `*` can never be confused with the
//! wildcard. The legacy string form (where `*` *is* the wildcard) is still
//! accepted at the boundary through [`CollectionSelector::parse`].
//!
//! # Example
//!
//! ```rust
//! use firecap_core::config::CaptureConfig;
//! use firecap_core::query::{build_query, CollectionSelector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CaptureConfig::builder()
//!     .project_id("p1")
//!     .database_id("(default)")
//!     .build()?;
//!
//! let request = build_query(config.base_document_path(), &CollectionSelector::named("users"));
//! assert_eq!(request.parent.as_str(), "projects/p1/databases/(default)/documents");
//! assert_eq!(request.structured_query.from.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::config::BaseDocumentPath;
use crate::metrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// The reserved token meaning "all collections" in string-configured
/// pipelines.
pub const WILDCARD: &str = "*";

/// Errors raised while parsing a collection selector from its string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The identifier was empty. Any non-empty string is a structurally
    /// valid collection name, so this is the only failure mode.
    #[error("collection identifier must be non-empty")]
    EmptyIdentifier,
}

/// Selects which collections under the base path a query covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionSelector {
    /// Match every document in every collection directly under the base path.
    AllCollections,

    /// Match exactly one named collection.
    Named(String),
}

impl CollectionSelector {
    /// Creates a selector for a single named collection.
    #[must_use]
    pub fn named(collection_id: impl Into<String>) -> Self {
        Self::Named(collection_id.into())
    }

    /// Parses the legacy string form: [`WILDCARD`] means all collections,
    /// any other non-empty string names one collection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyIdentifier`] for an empty token.
    pub fn parse(token: &str) -> Result<Self, SelectorError> {
        match token {
            "" => Err(SelectorError::EmptyIdentifier),
            WILDCARD => Ok(Self::AllCollections),
            name => Ok(Self::Named(name.to_string())),
        }
    }

    /// Returns true if this selector covers all collections.
    #[inline]
    #[must_use]
    pub fn is_all_collections(&self) -> bool {
        matches!(self, Self::AllCollections)
    }

    /// Returns the collection name, or `None` for the all-collections case.
    #[inline]
    #[must_use]
    pub fn collection_id(&self) -> Option<&str> {
        match self {
            Self::AllCollections => None,
            Self::Named(id) => Some(id),
        }
    }
}

impl FromStr for CollectionSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CollectionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllCollections => f.write_str(WILDCARD),
            Self::Named(id) => f.write_str(id),
        }
    }
}

/// A `from` clause naming one collection in a structured query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionClause {
    /// The collection to select documents from.
    #[serde(rename = "collectionId")]
    pub collection_id: String,
}

/// Declarative document selection, optionally scoped to named collections.
///
/// An empty `from` list matches every document under the request parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StructuredQuery {
    /// Collections to query. Empty means unfiltered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub from: Vec<CollectionClause>,
}

impl StructuredQuery {
    /// Returns true if this query carries no collection filter.
    #[inline]
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.from.is_empty()
    }
}

/// A streamed-query request against the source store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Base document path the query is scoped under.
    pub parent: BaseDocumentPath,

    /// Document selection. Always present; empty means every collection.
    #[serde(rename = "structuredQuery")]
    pub structured_query: StructuredQuery,
}

/// Builds the query request for one collection selector.
///
/// Pure function of its arguments: one request per selector, no filtering,
/// no captured state. The all-collections case emits an unfiltered query;
/// a named selector emits exactly one `from` clause.
#[must_use]
pub fn build_query(parent: &BaseDocumentPath, selector: &CollectionSelector) -> QueryRequest {
    let structured_query = match selector {
        CollectionSelector::AllCollections => {
            debug!(parent = %parent, "querying all collections");
            StructuredQuery::default()
        }
        CollectionSelector::Named(collection_id) => StructuredQuery {
            from: vec![CollectionClause {
                collection_id: collection_id.clone(),
            }],
        },
    };

    metrics::increment_queries_built(selector);

    QueryRequest {
        parent: parent.clone(),
        structured_query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wildcard() {
        assert_eq!(
            CollectionSelector::parse("*").unwrap(),
            CollectionSelector::AllCollections
        );
    }

    #[test]
    fn parse_named() {
        let selector = CollectionSelector::parse("users").unwrap();
        assert_eq!(selector, CollectionSelector::named("users"));
        assert_eq!(selector.collection_id(), Some("users"));
    }

    #[test]
    fn parse_empty_is_rejected() {
        assert_eq!(
            CollectionSelector::parse("").unwrap_err(),
            SelectorError::EmptyIdentifier
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for token in ["*", "users", "audit_log"] {
            let selector: CollectionSelector = token.parse().unwrap();
            assert_eq!(selector.to_string(), token);
        }
    }

    #[test]
    fn unfiltered_query_serializes_without_from() {
        let query = StructuredQuery::default();
        assert!(query.is_unfiltered());
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
    }

    #[test]
    fn named_query_wire_shape() {
        let query = StructuredQuery {
            from: vec![CollectionClause {
                collection_id: "users".to_string(),
            }],
        };
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"from":[{"collectionId":"users"}]}"#
        );
    }
}
