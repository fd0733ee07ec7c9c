//! Pluralization categories and form selection
//!
//! The engine uses a simplified category model rather than the full CLDR
//! plural-rule grammar: a plural entry maps category names to text variants,
//! and a count selects among them with `zero`/`one` preferred over `other`
//! when present.

use std::collections::BTreeMap;
use std::fmt;

/// A recognized pluralization category
///
/// Catalog authors may supply any subset of these per key; `other` acts as
/// the general form the selection falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    /// Count of exactly zero
    Zero,
    /// Count of exactly one
    One,
    /// Count of exactly two (accepted in catalogs, never auto-selected)
    Two,
    /// Paucal forms (accepted in catalogs, never auto-selected)
    Few,
    /// Large-count forms (accepted in catalogs, never auto-selected)
    Many,
    /// The general form, used when no more specific category matches
    Other,
}

impl PluralCategory {
    /// All recognized category keys, in canonical order
    pub const ALL: [PluralCategory; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// Parse a catalog key into a category
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The canonical catalog key for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text variants keyed by pluralization category
pub type PluralForms = BTreeMap<PluralCategory, String>;

/// Select the text variant for a count
///
/// `0` prefers `zero`, `1` prefers `one`, anything else uses `other`; a
/// preferred category that is absent falls back to `other`. Without a count
/// the `other` form is used. Returns `None` when even `other` is missing,
/// in which case the caller applies the missing-key policy.
pub(crate) fn select(forms: &PluralForms, count: Option<i64>) -> Option<&str> {
    let preferred = match count {
        Some(0) => PluralCategory::Zero,
        Some(1) => PluralCategory::One,
        _ => PluralCategory::Other,
    };
    forms
        .get(&preferred)
        .or_else(|| forms.get(&PluralCategory::Other))
        .map(String::as_str)
}
