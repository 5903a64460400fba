//! Retrieve result types and shape validation.
//!
//! The retrieve response comes from an external library whose return shape
//! is not under this crate's control. Rather than probing for fields at
//! each call site, the raw JSON is run once through a validated parse step
//! that yields an explicit variant: the recognized retrieve shape, or
//! `Unrecognized` carrying the original value verbatim for diagnostics.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{ComponentRef, SourceComponent, TypeRef};
use crate::error::RetrieveError;
use crate::registry::Registry;

/// Overall status reported by the retrieve client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetrieveStatus {
    Pending,
    InProgress,
    Succeeded,
    Failed,
    PartialSuccess,
}

/// A component that was retrieved successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveSuccess {
    pub component: SourceComponent,
}

/// A component the retrieve could not resolve, with the library's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveFailure {
    pub component: ComponentRef,
    pub message: String,
}

/// The recognized retrieve response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveResult {
    pub status: RetrieveStatus,
    pub success: bool,
    pub successes: Vec<RetrieveSuccess>,
    pub failures: Vec<RetrieveFailure>,
}

impl RetrieveResult {
    /// Check the invariants serde cannot express: every type reference
    /// resolves against the registry and every failure carries a message.
    pub fn validate(&self, registry: &Registry) -> crate::Result<()> {
        for success in &self.successes {
            if success.component.type_ref.resolve(registry).is_none() {
                return Err(unknown_type_error(&success.component.type_ref));
            }
        }
        for failure in &self.failures {
            if failure.component.type_ref.resolve(registry).is_none() {
                return Err(unknown_type_error(&failure.component.type_ref));
            }
            if failure.message.is_empty() {
                return Err(RetrieveError::EmptyMessage(
                    failure.component.full_name.clone(),
                ));
            }
        }
        Ok(())
    }
}

fn unknown_type_error(type_ref: &TypeRef) -> RetrieveError {
    match type_ref {
        TypeRef::Key(key) => RetrieveError::UnknownType(key.clone()),
        TypeRef::Inline(metadata_type) => RetrieveError::UnknownType(metadata_type.id.clone()),
    }
}

/// Outcome of interpreting a raw library response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRetrieve {
    /// The response matched the expected retrieve shape.
    Retrieve(RetrieveResult),
    /// Anything else, kept verbatim for the diagnostic message.
    Unrecognized(Value),
}

impl ParsedRetrieve {
    /// Classify a raw JSON value.
    ///
    /// Deserialization or validation misses never error out; the value is
    /// returned as [`ParsedRetrieve::Unrecognized`] so callers can embed it
    /// in the parse-error report.
    pub fn from_value(value: Value, registry: &Registry) -> Self {
        match serde_json::from_value::<RetrieveResult>(value.clone()) {
            Ok(result) if result.validate(registry).is_ok() => ParsedRetrieve::Retrieve(result),
            _ => ParsedRetrieve::Unrecognized(value),
        }
    }

    /// Classify a JSON document. Errors only when the text is not JSON at
    /// all; any valid JSON classifies.
    pub fn from_json(text: &str, registry: &Registry) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value, registry))
    }
}
