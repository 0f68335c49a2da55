use regex::Regex;

use crate::order_objects::CardSpec;

/// Pulls the requested card denomination out of free-form listing text.
///
/// The grammar is `apple_card` followed by `:` or `=`, the face value (1 to 6 digits), and the
/// currency code, matched case-insensitively anywhere in the text. The first match wins. Text
/// without a match yields `None`; that is a soft miss the caller turns into a buyer-facing
/// message, not an error.
pub fn extract_card_spec(text: &str) -> Option<CardSpec> {
    let pattern = Regex::new(r"(?i)apple_card[:=]\s*(\d{1,6})\s*(try|usd|rub)").unwrap();
    pattern.captures(text).and_then(|caps| {
        let nominal = caps.get(1)?.as_str().parse::<u32>().ok()?;
        let currency = caps.get(2)?.as_str().parse().ok()?;
        Some(CardSpec { nominal, currency })
    })
}
