//! Flat translation catalogs and the nested-tree flattener
//!
//! A source document arrives as a nested tree keyed first by locale. The
//! flattener walks each locale's subtree depth-first and emits a flat map of
//! dotted key paths to typed entries, classifying every leaf exactly once.
//! Lookups never re-inspect node shape after this point.

use crate::locale::Locale;
use crate::plural::{PluralCategory, PluralForms};
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// A single translation entry, classified at load time
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationEntry {
    /// A plain text value
    Scalar(String),
    /// Text variants keyed by pluralization category
    Plural(PluralForms),
}

/// Flat mapping from dotted key path to translation entry, for one locale
///
/// Immutable once the owning catalog set is published; a reload builds a
/// brand-new catalog rather than mutating this one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, TranslationEntry>,
}

impl Catalog {
    /// Look up an entry by dotted key path
    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(key, entry)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TranslationEntry)> {
        self.entries.iter()
    }

    fn insert(&mut self, key: String, entry: TranslationEntry) {
        self.entries.insert(key, entry);
    }
}

/// Merge one parsed source document into a set of per-locale catalogs
///
/// The document's top level must map locale identifiers to subtrees. Keys
/// from later documents override earlier ones entry-for-entry; a document
/// never replaces a whole subtree wholesale. When `available` is non-empty,
/// locales outside it are skipped.
pub(crate) fn merge_document(
    set: &mut HashMap<Locale, Catalog>,
    root: &Value,
    origin: &Path,
    available: &[Locale],
) {
    let mapping = match root {
        Value::Mapping(mapping) => mapping,
        // An empty document parses as null and contributes nothing.
        Value::Null => return,
        _ => {
            warn!(
                path = %origin.display(),
                "translation source top level is not a mapping, skipping"
            );
            return;
        }
    };

    for (key, subtree) in mapping {
        let Some(code) = key.as_str() else {
            warn!(
                path = %origin.display(),
                "non-string locale key in translation source, skipping"
            );
            continue;
        };
        let locale = Locale::new(code);
        if !available.is_empty() && !available.contains(&locale) {
            debug!(
                path = %origin.display(),
                locale = %locale,
                "locale not in available_locales, skipping"
            );
            continue;
        }
        flatten_node(set.entry(locale).or_default(), "", subtree, origin);
    }
}

/// Depth-first flattening walk
///
/// Classification per node: scalar leaves become `Scalar`; a mapping whose
/// values are all scalars with at least one recognized plural-category key
/// becomes a `Plural` leaf; every other mapping is a namespace to descend
/// into. Sequences and tagged values are unsupported and dropped.
fn flatten_node(catalog: &mut Catalog, path: &str, value: &Value, origin: &Path) {
    if let Some(text) = scalar_text(value) {
        catalog.insert(path.to_string(), TranslationEntry::Scalar(text));
        return;
    }

    match value {
        // Null leaves are dropped rather than stored as empty strings.
        Value::Null => {}
        Value::Mapping(mapping) => {
            if let Some(forms) = plural_leaf(mapping, path, origin) {
                catalog.insert(path.to_string(), TranslationEntry::Plural(forms));
                return;
            }
            for (key, child) in mapping {
                let Some(name) = key.as_str() else {
                    warn!(
                        path = %origin.display(),
                        parent = path,
                        "non-string key in translation tree, skipping"
                    );
                    continue;
                };
                let child_path = if path.is_empty() {
                    name.to_string()
                } else {
                    format!("{path}.{name}")
                };
                flatten_node(catalog, &child_path, child, origin);
            }
        }
        _ => {
            warn!(
                path = %origin.display(),
                key = path,
                "unsupported node type in translation tree, skipping"
            );
        }
    }
}

/// Classify a mapping as a pluralization leaf
///
/// Requires every value to be a scalar and at least one key to come from the
/// recognized category set. Scalar siblings outside the category set are
/// dropped from the leaf. Returns `None` for anything that should be treated
/// as a namespace instead.
fn plural_leaf(mapping: &Mapping, path: &str, origin: &Path) -> Option<PluralForms> {
    if mapping.is_empty() {
        return None;
    }

    let mut forms = PluralForms::new();
    let mut extraneous = false;
    for (key, value) in mapping {
        let name = key.as_str()?;
        let text = scalar_text(value)?;
        match PluralCategory::from_key(name) {
            Some(category) => {
                forms.insert(category, text);
            }
            None => extraneous = true,
        }
    }

    if forms.is_empty() {
        return None;
    }
    if extraneous {
        debug!(
            path = %origin.display(),
            key = path,
            "ignoring non-category keys inside pluralization leaf"
        );
    }
    Some(forms)
}

/// Scalar coercion: strings pass through; numbers and booleans stringify
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Value {
        serde_yaml::from_str(source).expect("test document must parse")
    }

    fn flatten(source: &str) -> HashMap<Locale, Catalog> {
        let mut set = HashMap::new();
        merge_document(&mut set, &parse(source), Path::new("test.yml"), &[]);
        set
    }

    #[test]
    fn scalar_leaves_get_dotted_paths() {
        let set = flatten(
            r#"
en:
  welcome:
    title: "Welcome!"
    greeting: "Hello, %{name}!"
"#,
        );
        let catalog = &set[&Locale::new("en")];
        assert_eq!(
            catalog.get("welcome.title"),
            Some(&TranslationEntry::Scalar("Welcome!".into()))
        );
        assert_eq!(
            catalog.get("welcome.greeting"),
            Some(&TranslationEntry::Scalar("Hello, %{name}!".into()))
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn plural_leaf_is_classified_once() {
        let set = flatten(
            r#"
en:
  users:
    count:
      zero: "No users"
      one: "1 user"
      other: "%{count} users"
"#,
        );
        let catalog = &set[&Locale::new("en")];
        match catalog.get("users.count") {
            Some(TranslationEntry::Plural(forms)) => {
                assert_eq!(forms[&PluralCategory::Zero], "No users");
                assert_eq!(forms[&PluralCategory::One], "1 user");
                assert_eq!(forms[&PluralCategory::Other], "%{count} users");
            }
            other => panic!("expected plural entry, got {other:?}"),
        }
        // The leaf is not descended into.
        assert!(catalog.get("users.count.one").is_none());
    }

    #[test]
    fn mapping_without_category_keys_is_a_namespace() {
        let set = flatten(
            r#"
en:
  menu:
    file: "File"
    edit: "Edit"
"#,
        );
        let catalog = &set[&Locale::new("en")];
        assert!(matches!(
            catalog.get("menu.file"),
            Some(TranslationEntry::Scalar(_))
        ));
        assert!(catalog.get("menu").is_none());
    }

    #[test]
    fn mapping_with_nested_child_is_a_namespace_even_with_category_keys() {
        // "one" here sits next to a nested mapping, so the node cannot be a
        // pluralization leaf and must be flattened as a namespace.
        let set = flatten(
            r#"
en:
  thing:
    one: "single"
    nested:
      deep: "value"
"#,
        );
        let catalog = &set[&Locale::new("en")];
        assert!(matches!(
            catalog.get("thing.one"),
            Some(TranslationEntry::Scalar(_))
        ));
        assert!(matches!(
            catalog.get("thing.nested.deep"),
            Some(TranslationEntry::Scalar(_))
        ));
    }

    #[test]
    fn numbers_and_booleans_stringify() {
        let set = flatten(
            r#"
en:
  meta:
    version: 2
    enabled: true
"#,
        );
        let catalog = &set[&Locale::new("en")];
        assert_eq!(
            catalog.get("meta.version"),
            Some(&TranslationEntry::Scalar("2".into()))
        );
        assert_eq!(
            catalog.get("meta.enabled"),
            Some(&TranslationEntry::Scalar("true".into()))
        );
    }

    #[test]
    fn null_leaves_and_sequences_are_dropped() {
        let set = flatten(
            r#"
en:
  empty: ~
  list:
    - "a"
    - "b"
  kept: "here"
"#,
        );
        let catalog = &set[&Locale::new("en")];
        assert!(catalog.get("empty").is_none());
        assert!(catalog.get("list").is_none());
        assert!(catalog.get("kept").is_some());
    }

    #[test]
    fn later_documents_override_key_for_key() {
        let mut set = HashMap::new();
        merge_document(
            &mut set,
            &parse("en:\n  a: \"first\"\n  b: \"stays\"\n"),
            Path::new("one.yml"),
            &[],
        );
        merge_document(
            &mut set,
            &parse("en:\n  a: \"second\"\n"),
            Path::new("two.yml"),
            &[],
        );
        let catalog = &set[&Locale::new("en")];
        assert_eq!(
            catalog.get("a"),
            Some(&TranslationEntry::Scalar("second".into()))
        );
        assert_eq!(
            catalog.get("b"),
            Some(&TranslationEntry::Scalar("stays".into()))
        );
    }

    #[test]
    fn available_locales_filter_skips_others() {
        let mut set = HashMap::new();
        merge_document(
            &mut set,
            &parse("en:\n  k: \"v\"\nes:\n  k: \"v\"\n"),
            Path::new("test.yml"),
            &[Locale::new("en")],
        );
        assert!(set.contains_key(&Locale::new("en")));
        assert!(!set.contains_key(&Locale::new("es")));
    }

    #[test]
    fn flattening_roundtrip_is_stable() {
        let source = r#"
en:
  welcome:
    title: "Welcome!"
    greeting: "Hello, %{name}!"
  users:
    count:
      zero: "No users"
      one: "1 user"
      other: "%{count} users"
  deep:
    a:
      b:
        c: "leaf"
"#;
        let first = flatten(source);
        // Re-serialize the parsed tree and flatten the re-parsed equivalent.
        let reparsed = serde_yaml::to_string(&parse(source)).unwrap();
        let second = flatten(&reparsed);
        assert_eq!(first, second);
    }
}
