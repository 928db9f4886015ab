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

//! Integration tests for response unpacking.

use chrono::Utc;
use firecap_core::document::{Document, QueryResponse};
use firecap_core::unpack::unpack_response;
use serde_json::json;

#[test]
fn unpack_is_an_identity_projection() {
    let document = Document::new("projects/p/databases/d/documents/users/1")
        .with_field("name", json!("Alice"));
    let mut response = QueryResponse::with_document(document.clone());
    response.read_time = Some(Utc::now());
    response.skipped_results = Some(7);

    // Exactly the carried document, transport metadata dropped.
    assert_eq!(unpack_response(response), Some(document));
}

#[test]
fn heartbeat_envelopes_are_skipped_not_crashed() {
    let heartbeat = QueryResponse::progress(Utc::now());
    assert_eq!(unpack_response(heartbeat), None);

    // Even a fully empty envelope is a skip.
    assert_eq!(unpack_response(QueryResponse::default()), None);
}

#[test]
fn interleaved_stream_preserves_document_order() {
    let doc = |n: u32| Document::new(format!("projects/p/databases/d/documents/users/{n}"));
    let responses = vec![
        QueryResponse::with_document(doc(1)),
        QueryResponse::progress(Utc::now()),
        QueryResponse::with_document(doc(2)),
        QueryResponse::progress(Utc::now()),
        QueryResponse::with_document(doc(3)),
    ];

    let documents: Vec<_> = responses.into_iter().filter_map(unpack_response).collect();

    assert_eq!(documents, vec![doc(1), doc(2), doc(3)]);
}

#[test]
fn response_envelope_deserializes_from_wire_json() {
    let response: QueryResponse = serde_json::from_str(
        r#"{
            "document": {
                "name": "projects/p/databases/d/documents/users/1",
                "updateTime": "2024-05-01T12:00:00Z"
            },
            "readTime": "2024-05-01T12:00:01Z",
            "skippedResults": 2
        }"#,
    )
    .unwrap();

    let document = unpack_response(response).unwrap();
    assert_eq!(document.name, "projects/p/databases/d/documents/users/1");
    assert!(document.update_time.is_some());
}
