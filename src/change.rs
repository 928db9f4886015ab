//! Change event representation.
//!
//! A [`ChangeEvent`] pairs a document with the kind of change the upstream
//! change-detection feed observed. The feed classifies changes; this core
//! only routes them. The kind is a closed sum type with an explicit
//! [`ChangeKind::Unknown`] escape hatch so a tag this crate does not
//! recognize is visible to policy code instead of silently falling through
//! a string comparison.
//!
//! # Example
//!
//! ```rust
//! use firecap_core::change::{ChangeEvent, ChangeKind};
//! use firecap_core::document::Document;
//!
//! let event = ChangeEvent {
//!     kind: ChangeKind::Delete,
//!     document: Document::new("projects/p1/databases/(default)/documents/users/42"),
//! };
//! assert!(event.kind.is_delete());
//! ```

use crate::document::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a change observed by the upstream feed.
///
/// The `Unknown` variant preserves the original tag string for logging and
/// policy decisions, keeping the core forward compatible with feeds that
/// grow new tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum ChangeKind {
    /// The document was created or updated; the event carries its full
    /// contents.
    Update,

    /// The document was deleted; only its name is meaningful.
    Delete,

    /// A tag this crate does not recognize.
    ///
    /// Carries the original tag string. Routing is decided by
    /// [`UnknownKindPolicy`](crate::write::UnknownKindPolicy).
    #[serde(untagged)]
    Unknown(String),
}

impl ChangeKind {
    /// Returns true if this is a delete.
    #[inline]
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete)
    }

    /// Returns true if this is an update (create-or-replace).
    #[inline]
    #[must_use]
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update)
    }

    /// Returns true if this is an unrecognized tag.
    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// Conversion from the open string tags emitted by string-typed feeds.
///
/// Matches are exact: `DELETE` and `UPDATE` map to their variants, anything
/// else is preserved as [`ChangeKind::Unknown`].
impl From<&str> for ChangeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "DELETE" => Self::Delete,
            "UPDATE" => Self::Update,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Update => f.write_str("UPDATE"),
            Self::Delete => f.write_str("DELETE"),
            Self::Unknown(tag) => f.write_str(tag),
        }
    }
}

/// One change observed by the upstream feed, ready for routing to a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// What kind of change occurred.
    #[serde(rename = "changeKind")]
    pub kind: ChangeKind,

    /// The affected document. For deletes only the name is meaningful, but
    /// the feed may still attach the last known contents.
    pub document: Document,
}

impl ChangeEvent {
    /// Creates a change event.
    #[must_use]
    pub fn new(kind: ChangeKind, document: Document) -> Self {
        Self { kind, document }
    }

    /// Returns the affected document's fully qualified name.
    #[inline]
    #[must_use]
    pub fn document_name(&self) -> &str {
        &self.document.name
    }
}
