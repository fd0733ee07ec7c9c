//! Parameter interpolation
//!
//! Substitutes `%{name}` placeholders in a single left-to-right pass.
//! Substituted values are never re-scanned, so no nested or recursive
//! substitution can occur. Unmatched placeholders stay verbatim in the
//! output; whether that is silent or logged is a configuration policy.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Policy for placeholders with no corresponding argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPlaceholders {
    /// Leave the placeholder verbatim in the output (default)
    #[default]
    Keep,
    /// Leave the placeholder verbatim and emit a warning log
    Warn,
}

/// Substitute `%{name}` placeholders using the supplied lookup
///
/// An unterminated `%{` is copied through verbatim.
pub(crate) fn apply(
    template: &str,
    lookup: impl Fn(&str) -> Option<String>,
    policy: UnmatchedPlaceholders,
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        if policy == UnmatchedPlaceholders::Warn {
                            warn!(placeholder = name, "no value supplied for interpolation placeholder");
                        }
                        out.push_str(&rest[start..start + 2 + end + 1]);
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
