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

//! Integration tests for capture configuration.

use firecap_core::config::{CaptureConfig, ConfigError};

#[test]
fn valid_config_builds() {
    let config = CaptureConfig::builder()
        .project_id("p1")
        .database_id("(default)")
        .build()
        .unwrap();

    assert_eq!(config.project_id(), "p1");
    assert_eq!(config.database_id(), "(default)");
    assert_eq!(
        config.base_document_path().to_string(),
        "projects/p1/databases/(default)/documents"
    );
}

#[test]
fn unset_fields_fail_at_construction() {
    assert_eq!(
        CaptureConfig::builder().build().unwrap_err(),
        ConfigError::MissingProjectId
    );
    assert_eq!(
        CaptureConfig::builder()
            .project_id("p1")
            .build()
            .unwrap_err(),
        ConfigError::MissingDatabaseId
    );
}

#[test]
fn empty_fields_fail_at_construction() {
    assert_eq!(
        CaptureConfig::builder()
            .project_id("")
            .database_id("(default)")
            .build()
            .unwrap_err(),
        ConfigError::MissingProjectId
    );
    assert_eq!(
        CaptureConfig::builder()
            .project_id("p1")
            .database_id("")
            .build()
            .unwrap_err(),
        ConfigError::MissingDatabaseId
    );
}

#[test]
fn config_is_clonable_and_stable() {
    // Workers each get a clone; the base path is computed once and compares
    // equal across clones.
    let config = CaptureConfig::builder()
        .project_id("p1")
        .database_id("db")
        .build()
        .unwrap();
    let clone = config.clone();

    assert_eq!(config, clone);
    assert_eq!(config.base_document_path(), clone.base_document_path());
}
