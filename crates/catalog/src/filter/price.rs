//! Numeric price extraction from free-form price text.

use once_cell::sync::Lazy;
use regex::Regex;

/// A currency glyph directly followed by ASCII digits and comma separators.
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[₹$€£¥]([0-9,]+)").expect("valid price regex"));

/// Extracts a numeric price from a display string.
///
/// - Text containing "free" (any case) is `0`.
/// - Otherwise the first currency-prefixed numeral is used, with all comma
///   separators removed: `"₹1,250"` is `1250`.
/// - Text with no such numeral, or one that overflows, is also `0`.
///
/// The last rule makes "Contact organizer" indistinguishable from a free
/// event under the `free` bucket. Callers that need to tell them apart must
/// inspect the text themselves.
pub fn extract_price(price: &str) -> u64 {
    if price.to_lowercase().contains("free") {
        return 0;
    }

    PRICE_RE
        .captures(price)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().replace(',', "").parse().ok())
        .unwrap_or(0)
}
