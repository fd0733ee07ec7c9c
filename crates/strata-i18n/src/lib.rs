//! Translation-resolution engine for the Strata web framework
//!
//! This crate loads translation catalogs from YAML/JSON documents, resolves
//! dotted keys through a locale fallback chain, applies a simplified
//! pluralization-category model, interpolates `%{name}` parameters, and
//! formats timestamps and numbers through catalog-resolved format names.
//! It includes:
//!
//! - Lazy, at-most-once catalog loading that is safe under concurrency
//! - Atomic rebuild-and-swap reload semantics
//! - A deterministic locale fallback chain
//! - Scoped per-call-context locale overrides with guaranteed restore
//! - A fully configurable missing-key policy
//!
//! # Example
//!
//! ```
//! use strata_i18n::{I18nConfig, TranslationRequest, Translator};
//!
//! let translator = Translator::new(
//!     I18nConfig::new("en").load_path(["config/locales"]),
//! );
//!
//! let text = translator
//!     .translate(
//!         "welcome.greeting",
//!         &TranslationRequest::new().param("name", "Ada"),
//!     )
//!     .unwrap();
//! # assert_eq!(text, "[missing: welcome.greeting]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod interpolate;
pub mod locale;
pub mod plural;
pub mod translator;

mod format;
mod resolve;
mod resource;
mod store;

pub use catalog::{Catalog, TranslationEntry};
pub use config::{I18nConfig, MissingKeyHandler};
pub use context::LocaleGuard;
pub use error::{I18nError, I18nResult};
pub use interpolate::UnmatchedPlaceholders;
pub use locale::Locale;
pub use plural::{PluralCategory, PluralForms};
pub use translator::{TranslationRequest, Translator};
