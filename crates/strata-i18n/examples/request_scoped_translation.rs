//! Demonstration of the translation-resolution engine
//!
//! This example builds a small catalog set on disk, then walks through key
//! resolution, pluralization, interpolation, scoped locale overrides, and
//! timestamp localization.

use chrono::Utc;
use std::fs;
use strata_i18n::{translation_request, I18nConfig, TranslationRequest, Translator};
use tempfile::TempDir;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let locales_dir = write_demo_catalogs()?;
    let translator = Translator::new(
        I18nConfig::new("en")
            .load_path([locales_dir.path()])
            .fallback_locale("en"),
    );

    println!("=== Translation Engine Demo ===\n");

    demo_resolution(&translator)?;
    demo_pluralization(&translator)?;
    demo_scoped_locales(&translator)?;
    demo_localization(&translator);

    Ok(())
}

fn write_demo_catalogs() -> Result<TempDir, Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("en.yml"),
        r#"
en:
  welcome:
    greeting: "Hello, %{name}!"
  users:
    count:
      zero: "No users"
      one: "1 user"
      other: "%{count} users"
  date:
    long: "%A, %B %d, %Y"
"#,
    )?;
    fs::write(
        dir.path().join("es.yml"),
        r#"
es:
  welcome:
    greeting: "¡Hola, %{name}!"
  users:
    count:
      zero: "Sin usuarios"
      one: "1 usuario"
      other: "%{count} usuarios"
"#,
    )?;
    Ok(dir)
}

fn demo_resolution(translator: &Translator) -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Resolution and Interpolation");
    println!("===============================");

    let text = translator.translate("welcome.greeting", &translation_request!("name" => "Ada"))?;
    println!("  en -> {text}");

    let text = translator.translate(
        "welcome.greeting",
        &TranslationRequest::new().locale("es").param("name", "Ada"),
    )?;
    println!("  es -> {text}");

    // A key that exists nowhere renders the configurable marker.
    let text = translator.translate("missing.key", &TranslationRequest::new())?;
    println!("  missing -> {text}\n");
    Ok(())
}

fn demo_pluralization(translator: &Translator) -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Pluralization");
    println!("================");

    for count in [0, 1, 2, 5] {
        let text = translator.translate("users.count", &translation_request!(count: count))?;
        println!("  {count} -> {text}");
    }
    println!();
    Ok(())
}

fn demo_scoped_locales(translator: &Translator) -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Scoped Locale Overrides");
    println!("==========================");

    println!("  current locale: {}", translator.current_locale());
    translator.with_locale("es", || {
        println!("  inside with_locale: {}", translator.current_locale());
        let text = translator
            .translate("users.count", &translation_request!(count: 3))
            .unwrap_or_default();
        println!("  users.count -> {text}");
    });
    println!("  restored locale: {}\n", translator.current_locale());
    Ok(())
}

fn demo_localization(translator: &Translator) {
    println!("4. Timestamp Localization");
    println!("=========================");

    let now = Utc::now();
    println!("  date.long -> {}", translator.localize(&now, "date.long", None));
    println!("  time.short -> {}", translator.localize(&now, "time.short", None));
    println!("  unknown -> {}", translator.localize(&now, "not.a.format", None));
}
