//! # orgretrievelib
//!
//! Parse org metadata retrieve results and render them as aligned text
//! reports.
//!
//! ## Overview
//!
//! A metadata retrieve fetches component source from a remote org into a
//! local project. The retrieve client reports what happened as a structured
//! result: components that landed (each backed by one or more project
//! files) and components that could not be resolved, with a message each.
//! This library turns that result into a fixed-width, column-aligned text
//! report with two sections:
//!
//! - **Retrieved Source**: one row per component file path (full name,
//!   type label, project-relative path)
//! - **Retrieve Warnings**: one row per failure (full name, message)
//!
//! The client's return shape is not under this crate's control, so the raw
//! JSON goes through a validated parse step first. Anything that does not
//! match the expected shape renders as a single localized diagnostic
//! embedding the original value - never a partial table, never a panic.
//!
//! ## Example
//!
//! ```rust
//! use orgretrievelib::{format_retrieve_value, Catalog, Registry};
//! use serde_json::json;
//!
//! let registry = Registry::builtin();
//! let catalog = Catalog::new();
//! let value = json!({
//!     "status": "Succeeded",
//!     "success": true,
//!     "successes": [{ "component": {
//!         "fullName": "MyClass",
//!         "type": "apexclass",
//!         "content": "classes/MyClass.cls",
//!         "xml": "classes/MyClass.cls-meta.xml"
//!     }}],
//!     "failures": []
//! });
//!
//! let report = format_retrieve_value(&value, &registry, &catalog);
//! assert!(report.starts_with("=== Retrieved Source\n"));
//! assert!(report.contains("ApexClass"));
//! assert!(report.contains("classes/MyClass.cls"));
//! ```

pub mod component;
pub mod error;
pub mod messages;
pub mod output;
pub mod registry;
pub mod report;
pub mod retrieve;

pub use component::{ComponentRef, SourceComponent, TypeRef, VirtualDirectory};
pub use error::RetrieveError;
pub use messages::{Catalog, LIB_RETRIEVE_RESULT_PARSE_ERROR};
pub use output::TextTable;
pub use registry::{MetadataType, Registry};
pub use report::{format_parsed_retrieve, format_retrieve_result, format_retrieve_value};
pub use retrieve::{
    ParsedRetrieve, RetrieveFailure, RetrieveResult, RetrieveStatus, RetrieveSuccess,
};

/// Result type for orgretrievelib operations
pub type Result<T> = std::result::Result<T, RetrieveError>;
