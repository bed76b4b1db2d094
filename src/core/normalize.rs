use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn canonical_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

fn slash_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{2})/(\d{2})/(\d{4})").unwrap())
}

/// Case- and accent-folds free text into a comparable form: lowercase,
/// decompose to NFD, drop combining marks, trim. Total and idempotent;
/// empty input maps to the empty string.
pub fn normalize_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Rewrites a date string into the canonical `YYYY-MM-DD` form.
///
/// `DD/MM/YYYY` appearing anywhere in the input is rewritten from its
/// matched groups. Anything unrecognized is returned trimmed but otherwise
/// unchanged: it will never equal a canonical date, so the scan simply
/// finds no match instead of erroring.
pub fn normalize_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if canonical_date_re().is_match(trimmed) {
        return trimmed.to_string();
    }

    if let Some(caps) = slash_date_re().captures(trimmed) {
        return format!("{}-{}-{}", &caps[3], &caps[2], &caps[1]);
    }

    trimmed.to_string()
}

/// Presentation-only reordering of `YYYY-MM-DD` to `DD/MM/YYYY`. Never
/// used in comparisons. Strings that do not split into exactly three
/// hyphen-separated parts pass through unchanged.
pub fn format_date(input: &str) -> String {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() == 3 {
        format!("{}/{}/{}", parts[2], parts[1], parts[0])
    } else {
        input.to_string()
    }
}
