// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale tag validation for externally authored table files.
//!
//! A tag is an ISO 639-1 language code, optionally followed by a hyphen and
//! an ISO 3166-1 alpha-2 region (`"ja"`, `"zh-TW"`, `"pt-BR"`). Script and
//! variant subtags are not used by any game and are rejected.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// ISO 639-1 two-letter codes, sorted for binary search.
const ISO639_1: &[&str] = &[
    "aa", "ab", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy",
    "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj",
    "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht",
    "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv",
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky",
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn",
    "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny",
    "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru",
    "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss",
    "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts",
    "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi", "yo",
    "za", "zh", "zu",
];

/// Whether `code` is a known ISO 639-1 language code (lowercase only).
///
/// # Examples
/// ```
/// assert!(arcade_i18n::i18n::is_valid_iso639_1("ja"));
/// assert!(!arcade_i18n::i18n::is_valid_iso639_1("JA"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO639_1.binary_search(&code).is_ok()
}

/// Whether `tag` is `<language>` or `<language>-<REGION>`.
pub fn is_valid_locale_tag(tag: &str) -> bool {
    let mut parts = tag.splitn(2, '-');
    let language = parts.next().unwrap_or_default();
    if !is_valid_iso639_1(language) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(region) => region.len() == 2 && region.bytes().all(|b| b.is_ascii_uppercase()),
    }
}
