//! Internationalization (i18n) support for `sitenav-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   ko-KR/sitenav-ui.ftl   (fallback/reference, site default)
//!   en-US/sitenav-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()`):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let label = t!("nav-features");
//! ```
//!
//! The navigation copy is Korean, so `init()` always starts from `ko-KR`
//! rather than the visitor's browser languages. Other locales are reachable
//! through `set_language`.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-features")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "sitenav-ui";

/// Language the bar renders in until something calls `set_language`.
pub const DEFAULT_LANGUAGE: &str = "ko-KR";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| new_loader(DEFAULT_LANGUAGE));

static INIT: Once = Once::new();

/// Build a loader whose fallback is `fallback`. Panics only on a malformed
/// built-in tag.
pub(crate) fn new_loader(fallback: &str) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = fallback
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
}

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested: Vec<LanguageIdentifier> = DEFAULT_LANGUAGE
            .parse::<LanguageIdentifier>()
            .into_iter()
            .collect();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "navigation bundles loaded"),
            Err(err) => warn!("failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == DEFAULT_LANGUAGE));
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_is_korean() {
        init();
        assert_eq!(fl!(&*LOADER, "nav-features"), "기능");
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), "대시보드로 이동");
    }

    #[test]
    fn english_bundle_is_selectable() {
        // Private loader so the shared one stays Korean for parallel tests.
        let loader = new_loader(DEFAULT_LANGUAGE);
        let english: LanguageIdentifier = "en-US".parse().unwrap();
        i18n_embed::select(&loader, &Localizations, &[english]).unwrap();

        assert_eq!(loader.get("nav-pricing"), "Pricing");
        assert_eq!(loader.get("nav-get-started"), "Get started now");
    }

    #[test]
    fn invalid_tag_is_ignored() {
        init();
        assert!(set_language("not a tag!").is_ok());
        assert_eq!(fl!(&*LOADER, "nav-login"), "로그인");
    }
}
