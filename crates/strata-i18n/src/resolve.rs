//! Key resolution through the locale fallback chain
//!
//! The chain is exact locale, then the configured fallback locale, then the
//! default locale, with duplicates collapsed. The first catalog that defines
//! the key wins. No partial locale matching happens here: `en-US` does not
//! imply `en` unless configuration names `en` explicitly.

use crate::catalog::TranslationEntry;
use crate::config::I18nConfig;
use crate::locale::Locale;
use crate::store::CatalogSet;
use tracing::debug;

/// Find the first defined entry for `key` along the fallback chain
pub(crate) fn resolve<'a>(
    set: &'a CatalogSet,
    key: &str,
    locale: &Locale,
    config: &I18nConfig,
) -> Option<&'a TranslationEntry> {
    for (step, candidate) in fallback_chain(locale, config).enumerate() {
        if let Some(entry) = set.get(candidate).and_then(|catalog| catalog.get(key)) {
            if step > 0 {
                debug!(
                    key = key,
                    requested = %locale,
                    resolved = %candidate,
                    "translation resolved through fallback chain"
                );
            }
            return Some(entry);
        }
    }
    None
}

/// The ordered, de-duplicated locale chain for a lookup
pub(crate) fn fallback_chain<'a>(
    locale: &'a Locale,
    config: &'a I18nConfig,
) -> impl Iterator<Item = &'a Locale> {
    let fallback = config
        .fallback_locale
        .as_ref()
        .filter(|fallback| *fallback != locale);
    let default = Some(&config.default_locale)
        .filter(|default| *default != locale && Some(*default) != fallback);

    std::iter::once(locale).chain(fallback).chain(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_codes(locale: &str, config: &I18nConfig) -> Vec<String> {
        let locale = Locale::new(locale);
        fallback_chain(&locale, config)
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn full_chain_in_order() {
        let config = I18nConfig::new("en").fallback_locale("es");
        assert_eq!(chain_codes("de", &config), ["de", "es", "en"]);
    }

    #[test]
    fn duplicates_are_collapsed() {
        let config = I18nConfig::new("en").fallback_locale("en");
        assert_eq!(chain_codes("en", &config), ["en"]);
        assert_eq!(chain_codes("de", &config), ["de", "en"]);
    }

    #[test]
    fn no_fallback_configured() {
        let config = I18nConfig::new("en");
        assert_eq!(chain_codes("en", &config), ["en"]);
        assert_eq!(chain_codes("fr", &config), ["fr", "en"]);
    }

    #[test]
    fn regional_variant_gets_no_implicit_base() {
        let config = I18nConfig::new("ja");
        assert_eq!(chain_codes("en-US", &config), ["en-US", "ja"]);
    }
}
