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

//! Metrics instrumentation for the transform stages.
//!
//! Uses the `metrics` crate facade, so recording is a no-op until the host
//! application installs a recorder (Prometheus, StatsD, ...). Installing a
//! recorder and exporter is the surrounding pipeline's job; this crate only
//! emits.
//!
//! # Naming
//!
//! Prometheus conventions: `firecap_` prefix, underscores, counters end in
//! `_total`. Labels stay low-cardinality (query scope, write kind, change
//! tag); document names never become labels.

use crate::query::CollectionSelector;
use crate::write::WriteOperation;
use metrics::{counter, describe_counter};

/// Total query requests built, labeled by scope (`all` or `named`).
const QUERIES_BUILT_TOTAL: &str = "firecap_queries_built_total";

/// Total documents extracted from query responses.
const DOCUMENTS_UNPACKED_TOTAL: &str = "firecap_documents_unpacked_total";

/// Total progress-only responses skipped by the unpack stage.
const PROGRESS_RESPONSES_SKIPPED_TOTAL: &str = "firecap_progress_responses_skipped_total";

/// Total write operations emitted, labeled by kind (`delete` or `upsert`).
const WRITES_EMITTED_TOTAL: &str = "firecap_writes_emitted_total";

/// Total change events carrying an unrecognized kind, labeled by tag.
const UNKNOWN_CHANGE_KINDS_TOTAL: &str = "firecap_unknown_change_kinds_total";

/// Registers descriptions for all metrics emitted by this crate.
///
/// Optional; call once after installing a recorder if the exporter surfaces
/// metric help text.
pub fn describe_metrics() {
    describe_counter!(QUERIES_BUILT_TOTAL, "Query requests built, by scope");
    describe_counter!(
        DOCUMENTS_UNPACKED_TOTAL,
        "Documents extracted from query responses"
    );
    describe_counter!(
        PROGRESS_RESPONSES_SKIPPED_TOTAL,
        "Progress-only query responses skipped"
    );
    describe_counter!(WRITES_EMITTED_TOTAL, "Write operations emitted, by kind");
    describe_counter!(
        UNKNOWN_CHANGE_KINDS_TOTAL,
        "Change events with an unrecognized kind, by tag"
    );
}

/// Records one built query request.
pub(crate) fn increment_queries_built(selector: &CollectionSelector) {
    let scope = if selector.is_all_collections() {
        "all"
    } else {
        "named"
    };
    counter!(QUERIES_BUILT_TOTAL, "scope" => scope).increment(1);
}

/// Records one document extracted from a response envelope.
pub(crate) fn increment_documents_unpacked() {
    counter!(DOCUMENTS_UNPACKED_TOTAL).increment(1);
}

/// Records one skipped progress-only envelope.
pub(crate) fn increment_progress_responses_skipped() {
    counter!(PROGRESS_RESPONSES_SKIPPED_TOTAL).increment(1);
}

/// Records one emitted write operation.
pub(crate) fn increment_writes_emitted(write: &WriteOperation) {
    let kind = if write.is_delete() { "delete" } else { "upsert" };
    counter!(WRITES_EMITTED_TOTAL, "kind" => kind).increment(1);
}

/// Records one unrecognized change kind routed by policy.
pub(crate) fn increment_unknown_change_kinds(tag: &str) {
    counter!(UNKNOWN_CHANGE_KINDS_TOTAL, "tag" => tag.to_string()).increment(1);
}
