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

//! Change-to-write mapping: change event to idempotent write operation.
//!
//! The third transform stage maps each [`ChangeEvent`] to exactly one
//! [`WriteOperation`]: a delete addressed by document name, or an upsert
//! carrying the full document. Upsert semantics (create-or-replace) at the
//! destination make the operation idempotent and let create and update
//! events share one path.
//!
//! Unrecognized change kinds are routed by [`UnknownKindPolicy`]. The
//! default treats them as upserts with a warning, matching the observed
//! behavior of deployed pipelines; [`UnknownKindPolicy::Reject`] turns them
//! into per-record errors for callers that want a closed tag set.
//!
//! # Example
//!
//! ```rust
//! use firecap_core::change::{ChangeEvent, ChangeKind};
//! use firecap_core::document::Document;
//! use firecap_core::write::{change_to_write, UnknownKindPolicy, WriteOperation};
//!
//! # fn main() -> Result<(), firecap_core::write::TransformError> {
//! let event = ChangeEvent::new(
//!     ChangeKind::Delete,
//!     Document::new("projects/p1/databases/(default)/documents/users/42"),
//! );
//!
//! let write = change_to_write(event, UnknownKindPolicy::default())?;
//! assert!(write.is_delete());
//! # Ok(())
//! # }
//! ```

use crate::change::{ChangeEvent, ChangeKind};
use crate::document::Document;
use crate::metrics;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Per-record errors from the change-to-write stage.
///
/// Both variants are data errors: retrying the same record cannot succeed,
/// so callers should route rejected records to their dead-letter handling
/// rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The change event's document has no name, so no write can be
    /// addressed. Rejected rather than emitting a half-formed operation.
    #[error("change event document has no name")]
    MissingDocumentName,

    /// An unrecognized change kind arrived while the policy is
    /// [`UnknownKindPolicy::Reject`].
    #[error("unrecognized change kind: {kind}")]
    UnknownChangeKind {
        /// The original tag string from the feed.
        kind: String,
    },
}

impl TransformError {
    /// Returns whether retrying the same record could succeed. Always
    /// false: both variants are properties of the record itself.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

/// How the change-to-write stage routes unrecognized change kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKindPolicy {
    /// Treat the event as an upsert and log a warning (fail open).
    ///
    /// This is the default and preserves the behavior of pipelines whose
    /// feeds only distinguish "delete" from "everything else".
    #[default]
    UpsertAndLog,

    /// Reject the record with [`TransformError::UnknownChangeKind`]
    /// (fail closed).
    Reject,
}

/// A single idempotent write against the destination store.
///
/// Exactly one of the two forms exists per operation: a delete never
/// carries field data, and an upsert always carries the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOperation {
    /// Delete the document with the given fully qualified name.
    Delete {
        /// Name of the document to delete.
        target: String,
    },

    /// Create the document if absent, or fully replace it if present.
    Upsert {
        /// The complete document to write.
        document: Document,
    },
}

impl WriteOperation {
    /// Returns true if this is a delete.
    #[inline]
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }

    /// Returns true if this is an upsert.
    #[inline]
    #[must_use]
    pub fn is_upsert(&self) -> bool {
        matches!(self, Self::Upsert { .. })
    }

    /// Returns the fully qualified name of the document this operation
    /// addresses.
    #[must_use]
    pub fn target_name(&self) -> &str {
        match self {
            Self::Delete { target } => target,
            Self::Upsert { document } => &document.name,
        }
    }
}

/// Maps one change event to one write operation.
///
/// Deletes are addressed by document name only; every other recognized kind
/// becomes an upsert carrying the unmodified input document. Unrecognized
/// kinds follow `policy`.
///
/// # Errors
///
/// - [`TransformError::MissingDocumentName`] if the document name is empty.
/// - [`TransformError::UnknownChangeKind`] for an unrecognized kind under
///   [`UnknownKindPolicy::Reject`].
pub fn change_to_write(
    event: ChangeEvent,
    policy: UnknownKindPolicy,
) -> Result<WriteOperation, TransformError> {
    let ChangeEvent { kind, document } = event;

    if !document.has_name() {
        return Err(TransformError::MissingDocumentName);
    }

    let write = match kind {
        ChangeKind::Delete => {
            // Identity only; the delete must never carry field payload.
            let Document { name, .. } = document;
            WriteOperation::Delete { target: name }
        }
        ChangeKind::Update => WriteOperation::Upsert { document },
        ChangeKind::Unknown(tag) => match policy {
            UnknownKindPolicy::UpsertAndLog => {
                warn!(
                    kind = %tag,
                    document = %document.name,
                    "unrecognized change kind, defaulting to upsert"
                );
                metrics::increment_unknown_change_kinds(&tag);
                WriteOperation::Upsert { document }
            }
            UnknownKindPolicy::Reject => {
                return Err(TransformError::UnknownChangeKind { kind: tag });
            }
        },
    };

    metrics::increment_writes_emitted(&write);
    Ok(write)
}
