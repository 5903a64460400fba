//! Localized user-facing messages.
//!
//! Templates are keyed strings with positional `%s` slots. A missing key
//! yields a marker string rather than an error so callers on the report
//! path stay total.

use std::collections::HashMap;

/// Key for the unrecognized-retrieve-shape message.
pub const LIB_RETRIEVE_RESULT_PARSE_ERROR: &str = "lib_retrieve_result_parse_error";

const MISSING_LABEL: &str = "!!! MISSING LABEL !!!";

/// Message catalog with `%s` template substitution.
#[derive(Debug, Clone)]
pub struct Catalog {
    messages: HashMap<&'static str, &'static str>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Catalog preloaded with the built-in messages.
    pub fn new() -> Self {
        let mut messages = HashMap::new();
        messages.insert(
            LIB_RETRIEVE_RESULT_PARSE_ERROR,
            "Could not parse the retrieve result from the metadata API response: %s",
        );
        Catalog { messages }
    }

    /// Resolve a key and substitute `args` into its `%s` slots in order.
    ///
    /// Surplus args are appended space-separated; a missing key returns the
    /// marker string followed by the key and any args.
    pub fn localize(&self, key: &str, args: &[&str]) -> String {
        match self.messages.get(key) {
            Some(template) => substitute(template, args),
            None => {
                let mut out = format!("{} {}", MISSING_LABEL, key);
                for arg in args {
                    out.push(' ');
                    out.push_str(arg);
                }
                out
            }
        }
    }
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = template;
    let mut args = args.iter();
    while let Some(slot) = remaining.find("%s") {
        out.push_str(&remaining[..slot]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        remaining = &remaining[slot + 2..];
    }
    out.push_str(remaining);
    for arg in args {
        out.push(' ');
        out.push_str(arg);
    }
    out
}
