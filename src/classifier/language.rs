use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common Chinese internet abbreviations written in Latin script or digits.
/// These read as already-target-language even though the script check misses
/// them.
static CHINESE_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["gg", "nb", "xswl", "nmsl", "sb", "lz", "fvv", "fw", "233"]
        .into_iter()
        .collect()
});

/// Punctuation allowed to surround an abbreviation without changing it.
const TRAILING_PUNCTUATION: &str = "!?,.。！？，";

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

pub fn is_common_abbreviation(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }
    if CHINESE_ABBREVIATIONS.contains(normalized.as_str()) {
        return true;
    }

    let stripped = normalized
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_PUNCTUATION.contains(c))
        .trim_start();
    CHINESE_ABBREVIATIONS.contains(stripped)
}

/// True when the content is assumed already in the target language (or is
/// empty) and needs no translation call.
pub fn should_skip_translation(content: &str) -> bool {
    if content.trim().is_empty() {
        return true;
    }
    if contains_cjk(content) {
        tracing::debug!(content = %content, "skipping content with CJK characters");
        return true;
    }
    if is_common_abbreviation(content) {
        tracing::debug!(content = %content, "skipping common abbreviation");
        return true;
    }
    false
}
