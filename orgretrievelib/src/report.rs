//! Rendering of retrieve results as sectioned text reports.
//!
//! Two optional sections: `=== Retrieved Source` (one row per component
//! file path) and `=== Retrieve Warnings` (one row per failure). The
//! warnings title carries a leading newline, which doubles as the blank
//! separator line when both sections are present. An unrecognized input
//! shape renders the localized parse-error message instead of a table.

use serde_json::Value;

use crate::messages::{Catalog, LIB_RETRIEVE_RESULT_PARSE_ERROR};
use crate::output::TextTable;
use crate::registry::Registry;
use crate::retrieve::{ParsedRetrieve, RetrieveResult};

/// Render a raw library response. Total: any input yields a string.
pub fn format_retrieve_value(value: &Value, registry: &Registry, catalog: &Catalog) -> String {
    let parsed = ParsedRetrieve::from_value(value.clone(), registry);
    format_parsed_retrieve(&parsed, registry, catalog)
}

/// Render an already-classified response.
pub fn format_parsed_retrieve(
    parsed: &ParsedRetrieve,
    registry: &Registry,
    catalog: &Catalog,
) -> String {
    match parsed {
        ParsedRetrieve::Retrieve(result) => format_retrieve_result(result, registry),
        ParsedRetrieve::Unrecognized(raw) => {
            let serialized = raw.to_string();
            catalog.localize(LIB_RETRIEVE_RESULT_PARSE_ERROR, &[&serialized])
        }
    }
}

/// Render a recognized retrieve result. Empty successes and failures yield
/// the empty string.
pub fn format_retrieve_result(result: &RetrieveResult, registry: &Registry) -> String {
    let mut output = String::new();

    if !result.successes.is_empty() {
        let mut table =
            TextTable::new(["FULL NAME", "TYPE", "PROJECT PATH"]).with_title("Retrieved Source");
        for success in &result.successes {
            let component = &success.component;
            let type_name = component.type_ref.display_name(registry);
            for path in component.file_paths() {
                table.push_row([component.full_name.clone(), type_name.clone(), path]);
            }
        }
        output.push_str(&table.render());
    }

    if !result.failures.is_empty() {
        let mut table = TextTable::new(["FULL NAME", "MESSAGE TYPE", "MESSAGE"])
            .with_title("Retrieve Warnings");
        for failure in &result.failures {
            table.push_row([
                failure.component.full_name.clone(),
                "Error".to_string(),
                failure.message.clone(),
            ]);
        }
        output.push('\n');
        output.push_str(&table.render());
    }

    output
}
