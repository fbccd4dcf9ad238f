//! CLDR plural category resolution.
//!
//! Different locales partition numbers differently - English has "one"
//! and "other", Russian has "one", "few", "many", and "other", and
//! Arabic uses all six categories. Ordinal directives use a separate
//! rule set from cardinal ones (English: 1 is "one" cardinally but
//! "one" ordinally means 1st/21st/31st...).
//!
//! Rules are cached per thread per (language, rule type) pair to avoid
//! re-creating `PluralRules` instances on every call. The cache is
//! initialized lazily on first access within each thread.
//!
//! A locale without an entry in [`SUPPORTED_LANGUAGES`] is a hard
//! [`EvalError::UnsupportedLocale`] failure. There is no silent
//! fallback to a default locale: a missing rule entry means the caller
//! is formatting for a locale it never set up.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralOperands, PluralRuleType, PluralRules};

use crate::interpreter::EvalError;

/// Supported language codes for plural rule resolution.
///
/// Lookup is by exact code: `"en-US"` is not an entry and fails, which
/// matches rule tables keyed by plain language code.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code and ordinal flag.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, bool, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language code to a supported static string reference.
fn normalize_lang(lang: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == lang)
        .copied()
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str, ordinal: bool) -> PluralRules {
    let loc = match lang {
        "ar" => locale!("ar"),
        "bn" => locale!("bn"),
        "de" => locale!("de"),
        "el" => locale!("el"),
        "en" => locale!("en"),
        "es" => locale!("es"),
        "fa" => locale!("fa"),
        "fr" => locale!("fr"),
        "he" => locale!("he"),
        "hi" => locale!("hi"),
        "id" => locale!("id"),
        "it" => locale!("it"),
        "ja" => locale!("ja"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "pt" => locale!("pt"),
        "ro" => locale!("ro"),
        "ru" => locale!("ru"),
        "th" => locale!("th"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "zh" => locale!("zh"),
        _ => locale!("en"),
    };
    let rule_type = if ordinal {
        PluralRuleType::Ordinal
    } else {
        PluralRuleType::Cardinal
    };
    PluralRules::try_new(loc.into(), rule_type.into()).expect("locale should be supported")
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for a number in a given locale.
///
/// Returns one of: `"zero"`, `"one"`, `"two"`, `"few"`, `"many"`,
/// `"other"`. Pass `ordinal = true` for selectordinal directives, which
/// use the ordinal rule set instead of the cardinal one. Rules are
/// cached per thread, so repeated calls with the same locale reuse the
/// previously constructed `PluralRules`.
///
/// `n` is anything convertible to plural operands: plain integers, or a
/// [`fixed_decimal::Decimal`] reference for values with visible
/// fraction digits, which affect category selection (English cardinal
/// `1.5` is `"other"`).
///
/// # Errors
///
/// Returns [`EvalError::UnsupportedLocale`] if the locale has no plural
/// rule entry.
///
/// # Examples
///
/// ```
/// use mfeval::plural_category;
///
/// // English cardinal: 1 = "one", everything else = "other"
/// assert_eq!(plural_category("en", 1, false).unwrap(), "one");
/// assert_eq!(plural_category("en", 2, false).unwrap(), "other");
///
/// // English ordinal: 2nd, 22nd, ... = "two"
/// assert_eq!(plural_category("en", 2, true).unwrap(), "two");
///
/// // Russian: complex rules for "one", "few", "many", "other"
/// assert_eq!(plural_category("ru", 2, false).unwrap(), "few");
/// assert_eq!(plural_category("ru", 5, false).unwrap(), "many");
/// ```
pub fn plural_category(
    locale: &str,
    n: impl Into<PluralOperands>,
    ordinal: bool,
) -> Result<&'static str, EvalError> {
    let Some(lang) = normalize_lang(locale) else {
        return Err(EvalError::UnsupportedLocale {
            locale: locale.to_string(),
        });
    };
    let operands = n.into();
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache
            .iter()
            .find(|(code, ord, _)| *code == lang && *ord == ordinal)
        {
            return Ok(category_str(entry.2.category_for(operands)));
        }
        let rules = build_rules(lang, ordinal);
        let category = category_str(rules.category_for(operands));
        cache.push((lang, ordinal, rules));
        Ok(category)
    })
}
