//! HTML entity decoding
//!
//! The service returns answer text HTML-escaped. References are resolved by
//! an HTML5 parser, so the full named-entity table applies. Decoding is best
//! effort: a reference that cannot be resolved is left in the text as-is.
//! Markup is not interpreted, `&lt;b&gt;` decodes to `<b>` and a literal
//! `<b>` stays `<b>`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::Html;
use std::borrow::Cow;

// Tag openers and numeric references, the two things shielded from the parser
static SHIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<|&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));").expect("valid regex")
});

/// Decode named and numeric character references in `input`
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let shielded = shield(input);
    let fragment = Html::parse_fragment(&shielded);
    let decoded: String = fragment.root_element().text().collect();
    Cow::Owned(decoded)
}

/// Escape what the parser would otherwise change beyond entity resolution
///
/// `<` becomes `&lt;` so the whole input parses as text. A numeric reference
/// with no valid character behind it gets its `&` escaped, which keeps it
/// literal instead of turning into U+FFFD.
fn shield(input: &str) -> Cow<'_, str> {
    SHIELD_RE.replace_all(input, |caps: &Captures| {
        let matched = &caps[0];
        if matched == "<" {
            return "&lt;".to_string();
        }
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            (None, None) => None,
        };
        match code.filter(|c| *c != 0).and_then(char::from_u32) {
            Some(_) => matched.to_string(),
            None => format!("&amp;{}", &matched[1..]),
        }
    })
}
