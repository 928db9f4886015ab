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

//! Response unpacking: query response envelope to document.
//!
//! The second transform stage projects each [`QueryResponse`] down to the
//! document it carries, discarding read time, transaction handles, and skip
//! markers. A streamed query can interleave progress-only envelopes with
//! results; those yield `None` and downstream treats them as a skip, not an
//! error.

use crate::document::{Document, QueryResponse};
use crate::metrics;
use tracing::trace;

/// Extracts the document from one query response envelope.
///
/// Returns `None` for progress-only envelopes (heartbeats, skipped-results
/// reports). Transport metadata is dropped either way.
#[must_use]
pub fn unpack_response(response: QueryResponse) -> Option<Document> {
    match response.document {
        Some(document) => {
            metrics::increment_documents_unpacked();
            Some(document)
        }
        None => {
            trace!(read_time = ?response.read_time, "skipping progress-only response");
            metrics::increment_progress_responses_skipped();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn unpacks_carried_document() {
        let doc = Document::new("projects/p/databases/d/documents/users/1");
        let response = QueryResponse::with_document(doc.clone());

        assert_eq!(unpack_response(response), Some(doc));
    }

    #[test]
    fn progress_envelope_yields_nothing() {
        let response = QueryResponse::progress(Utc::now());
        assert_eq!(unpack_response(response), None);
    }
}
