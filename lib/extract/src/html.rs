//! Paragraph text extraction from raw HTML
//!
//! Only `<p>` elements are kept: their inner markup is stripped, entities are
//! decoded and the paragraphs are joined with single spaces.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Script/style bodies and comments never contribute text
    static ref NOISE_PATTERN: Regex =
        Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->").unwrap();

    static ref PARAGRAPH_PATTERN: Regex = Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").unwrap();

    static ref TAG_PATTERN: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();

    static ref ENTITY_PATTERN: Regex =
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap();
}

/// Text of every `<p>` element, joined with spaces and trimmed
pub fn extract_paragraphs(html: &str) -> String {
    let cleaned = NOISE_PATTERN.replace_all(html, "");

    let paragraphs: Vec<String> = PARAGRAPH_PATTERN
        .captures_iter(&cleaned)
        .map(|caps| {
            let inner = caps.get(1).map_or("", |m| m.as_str());
            decode_entities(&TAG_PATTERN.replace_all(inner, ""))
        })
        .collect();

    paragraphs.join(" ").trim().to_string()
}

/// Decode named entities commonly found in news pages plus numeric references
pub fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            decode_entity(entity).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix('x').or_else(|| numeric.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "hellip" => "\u{2026}",
        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "deg" => "\u{b0}",
        "middot" => "\u{b7}",
        "laquo" => "\u{ab}",
        "raquo" => "\u{bb}",
        _ => return None,
    };
    Some(decoded.to_string())
}
