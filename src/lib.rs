//! Firecap Core - Incremental Change-Capture Transform Stages
//!
//! This crate is the transform core of an incremental change-capture pipeline
//! that replicates documents from a hierarchical document store into a copy,
//! preserving create/update/delete semantics. It covers exactly three
//! stateless stages; everything around them (the execution engine, the query
//! and batched-write clients, the change-detection feed) is an external
//! collaborator.
//!
//! # Stages
//!
//! - **Query building** ([`query::build_query`]): collection selector to a
//!   structured query request scoped under the configured base document path.
//! - **Response unpacking** ([`unpack::unpack_response`]): query response
//!   envelope to the document it carries, discarding transport metadata.
//! - **Change-to-write mapping** ([`write::change_to_write`]): (change kind,
//!   document) pair to a single idempotent write operation.
//!
//! Each stage is a pure function of (configuration, input record): no
//! cross-record state, no I/O, no blocking. Invocations on disjoint records
//! are safe to run concurrently, and repeating an invocation on the same
//! input always yields the same output.
//!
//! # Example
//!
//! ```rust
//! use firecap_core::change::{ChangeEvent, ChangeKind};
//! use firecap_core::config::CaptureConfig;
//! use firecap_core::document::Document;
//! use firecap_core::query::{build_query, CollectionSelector};
//! use firecap_core::write::{change_to_write, UnknownKindPolicy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CaptureConfig::builder()
//!     .project_id("p1")
//!     .database_id("(default)")
//!     .build()?;
//!
//! // Source side: selector -> query request.
//! let request = build_query(config.base_document_path(), &CollectionSelector::AllCollections);
//! assert!(request.structured_query.is_unfiltered());
//!
//! // Destination side: change event -> write operation.
//! let event = ChangeEvent::new(
//!     ChangeKind::Delete,
//!     Document::new("projects/p1/databases/(default)/documents/users/42"),
//! );
//! let write = change_to_write(event, UnknownKindPolicy::default())?;
//! assert!(write.is_delete());
//! # Ok(())
//! # }
//! ```

pub mod change;
pub mod config;
pub mod document;
pub mod metrics;
pub mod query;
pub mod unpack;
pub mod write;
