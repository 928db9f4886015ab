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

//! Capture pipeline configuration.
//!
//! A [`CaptureConfig`] binds the pipeline to a single Firestore database. It
//! is built once, validated eagerly, and then shared read-only by every
//! transform invocation for the lifetime of the pipeline. The base document
//! path is computed exactly once at build time; per-record code never
//! reformats it.
//!
//! # Example
//!
//! ```rust
//! use firecap_core::config::CaptureConfig;
//!
//! # fn main() -> Result<(), firecap_core::config::ConfigError> {
//! let config = CaptureConfig::builder()
//!     .project_id("p1")
//!     .database_id("(default)")
//!     .build()?;
//!
//! assert_eq!(
//!     config.base_document_path().as_str(),
//!     "projects/p1/databases/(default)/documents"
//! );
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors raised while building a [`CaptureConfig`].
///
/// All variants are configuration errors: they must surface at pipeline
/// construction and are never retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `project_id` was not set or was empty.
    #[error("project_id is required and must be non-empty")]
    MissingProjectId,

    /// `database_id` was not set or was empty.
    #[error("database_id is required and must be non-empty")]
    MissingDatabaseId,
}

/// The fixed root path under which all queries and writes are scoped.
///
/// Formatted as `projects/{project_id}/databases/{database_id}/documents`.
/// Only a validated [`CaptureConfig`] can produce one, so a value of this
/// type is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseDocumentPath(String);

impl BaseDocumentPath {
    fn new(project_id: &str, database_id: &str) -> Self {
        Self(format!(
            "projects/{project_id}/databases/{database_id}/documents"
        ))
    }

    /// Returns the path as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseDocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BaseDocumentPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated configuration for one capture pipeline instance.
///
/// Immutable after construction. Cloning is cheap enough to hand a copy to
/// each worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    project_id: String,
    database_id: String,
    base_document_path: BaseDocumentPath,
}

impl CaptureConfig {
    /// Creates a new builder for `CaptureConfig`.
    #[must_use]
    pub fn builder() -> CaptureConfigBuilder {
        CaptureConfigBuilder::default()
    }

    /// Returns the source project identifier.
    #[inline]
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the database identifier.
    #[inline]
    #[must_use]
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// Returns the base document path all queries and writes are scoped to.
    #[inline]
    #[must_use]
    pub fn base_document_path(&self) -> &BaseDocumentPath {
        &self.base_document_path
    }
}

/// Builder for [`CaptureConfig`].
#[derive(Debug, Default)]
pub struct CaptureConfigBuilder {
    project_id: Option<String>,
    database_id: Option<String>,
}

impl CaptureConfigBuilder {
    /// Sets the source project identifier.
    #[must_use]
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Sets the database identifier (use `(default)` for the default database).
    #[must_use]
    pub fn database_id(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = Some(database_id.into());
        self
    }

    /// Builds the `CaptureConfig`, validating both identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProjectId`] or
    /// [`ConfigError::MissingDatabaseId`] if either field is unset or empty.
    pub fn build(self) -> Result<CaptureConfig, ConfigError> {
        let project_id = self
            .project_id
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingProjectId)?;
        let database_id = self
            .database_id
            .filter(|d| !d.is_empty())
            .ok_or(ConfigError::MissingDatabaseId)?;

        let base_document_path = BaseDocumentPath::new(&project_id, &database_id);
        debug!(path = %base_document_path, "resolved base document path");

        Ok(CaptureConfig {
            project_id,
            database_id,
            base_document_path,
        })
    }
}
