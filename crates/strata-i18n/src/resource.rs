//! Catalog source discovery and parsing
//!
//! Walks the configured `load_path` in order and parses each source into a
//! document tree. A malformed source is logged and dropped without aborting
//! the load or poisoning other locales; a missing path entry is skipped
//! silently.

use crate::error::{I18nError, I18nResult};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One successfully parsed catalog source
#[derive(Debug)]
pub(crate) struct SourceDocument {
    /// Where the document came from, for logging
    pub path: PathBuf,
    /// The parsed tree, keyed first by locale
    pub root: Value,
}

/// Load every parseable document reachable from `load_path`, in order
pub(crate) fn load_documents(load_path: &[PathBuf]) -> Vec<SourceDocument> {
    let mut documents = Vec::new();
    for entry in load_path {
        for path in collect_files(entry) {
            match parse_file(&path) {
                Ok(root) => {
                    debug!(path = %path.display(), "loaded translation source");
                    documents.push(SourceDocument { path, root });
                }
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "skipping malformed translation source"
                    );
                }
            }
        }
    }
    documents
}

/// Expand one `load_path` entry into catalog files
///
/// A file stands for itself; a directory contributes its catalog files in
/// sorted order so merge order stays deterministic. Missing entries yield
/// nothing.
fn collect_files(entry: &Path) -> Vec<PathBuf> {
    if entry.is_file() {
        return vec![entry.to_path_buf()];
    }
    if !entry.is_dir() {
        debug!(path = %entry.display(), "load_path entry does not exist, skipping");
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = match fs::read_dir(entry) {
        Ok(read_dir) => read_dir
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_file() && has_catalog_extension(p))
            .collect(),
        Err(error) => {
            warn!(
                path = %entry.display(),
                error = %error,
                "failed to read load_path directory, skipping"
            );
            Vec::new()
        }
    };
    files.sort();
    files
}

fn has_catalog_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml" | "yaml" | "json")
    )
}

/// Parse one source file into a document tree
///
/// JSON documents are converted into the same value representation as YAML
/// so the flattener sees a uniform tree.
fn parse_file(path: &Path) -> I18nResult<Value> {
    let content = fs::read_to_string(path).map_err(|source| I18nError::SourceRead {
        path: path.display().to_string(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "json");

    if is_json {
        let json: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| I18nError::SourceParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        serde_yaml::to_value(json).map_err(|e| I18nError::SourceParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    } else {
        serde_yaml::from_str(&content).map_err(|e| I18nError::SourceParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_entry_is_skipped() {
        let documents = load_documents(&[PathBuf::from("does/not/exist")]);
        assert!(documents.is_empty());
    }

    #[test]
    fn directory_files_load_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.yml"), "en:\n  k: \"b\"\n").unwrap();
        fs::write(dir.path().join("a.yml"), "en:\n  k: \"a\"\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a catalog").unwrap();

        let documents = load_documents(&[dir.path().to_path_buf()]);
        assert_eq!(documents.len(), 2);
        assert!(documents[0].path.ends_with("a.yml"));
        assert!(documents[1].path.ends_with("b.yml"));
    }

    #[test]
    fn malformed_file_is_dropped_others_survive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.yml"), "en:\n  broken: [unclosed\n").unwrap();
        fs::write(dir.path().join("good.yml"), "en:\n  k: \"v\"\n").unwrap();

        let documents = load_documents(&[dir.path().to_path_buf()]);
        assert_eq!(documents.len(), 1);
        assert!(documents[0].path.ends_with("good.yml"));
    }

    #[test]
    fn json_sources_parse_to_the_same_tree() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("en.json"),
            r#"{"en": {"greeting": "hello"}}"#,
        )
        .unwrap();

        let documents = load_documents(&[dir.path().to_path_buf()]);
        assert_eq!(documents.len(), 1);
        let root = &documents[0].root;
        assert_eq!(
            root["en"]["greeting"],
            Value::String("hello".to_string())
        );
    }

    #[test]
    fn single_file_entry_loads_directly() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("only.yml");
        fs::write(&file, "en:\n  k: \"v\"\n").unwrap();

        let documents = load_documents(&[file]);
        assert_eq!(documents.len(), 1);
    }
}
