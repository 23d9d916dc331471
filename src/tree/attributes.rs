//! Attribute values and their textual renderings
//!
//! Attribute values are either a single string or, for the whitespace-separated
//! token-list attributes (`class`, `rel`, ...), a list of tokens. Two renderings
//! exist: the plain form fed to the hasher and the quoted literal form used in
//! difference records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute map of a node, kept in source order.
///
/// `IndexMap` equality ignores insertion order, which gives whole-map comparison
/// without losing the order used for rendering.
pub type Attributes = IndexMap<String, AttrValue>;

/// Value of a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Plain attribute value, unmodified from the source
    Single(String),
    /// Token list for multi-valued attributes
    Multi(Vec<String>),
}

impl AttrValue {
    /// Build a value for `name` on element `tag`, splitting token-list attributes.
    pub fn from_source(tag: &str, name: &str, value: &str) -> Self {
        if is_multi_valued(tag, name) {
            AttrValue::Multi(value.split_whitespace().map(str::to_string).collect())
        } else {
            AttrValue::Single(value.to_string())
        }
    }

    /// Plain rendering: the raw string, or a list literal for token lists.
    pub fn render_plain(&self) -> String {
        match self {
            AttrValue::Single(value) => value.clone(),
            AttrValue::Multi(values) => render_list(values),
        }
    }

    /// Quoted literal rendering used inside attribute map renderings.
    pub fn render_literal(&self) -> String {
        match self {
            AttrValue::Single(value) => quote_literal(value),
            AttrValue::Multi(values) => render_list(values),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_plain())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Single(value.to_string())
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(values: Vec<&str>) -> Self {
        AttrValue::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Whether `name` on element `tag` holds a whitespace-separated token list.
pub fn is_multi_valued(tag: &str, name: &str) -> bool {
    match name {
        "class" | "accesskey" | "dropzone" => true,
        "rel" => matches!(tag, "a" | "link" | "area"),
        "rev" => matches!(tag, "a" | "link"),
        "headers" => matches!(tag, "td" | "th"),
        "accept-charset" => tag == "form",
        "archive" => tag == "object",
        "sizes" => tag == "icon",
        "sandbox" => tag == "iframe",
        "for" => tag == "output",
        _ => false,
    }
}

/// Render an attribute map as `{'key': 'value', ...}` in source order.
pub fn render_attributes(attributes: &Attributes) -> String {
    let entries: Vec<String> = attributes
        .iter()
        .map(|(key, value)| format!("{}: {}", quote_literal(key), value.render_literal()))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Quote a string as a single-quoted literal.
///
/// Double quotes are used instead when the value contains a single quote and no
/// double quote, so the common case needs no escaping. Non-printable characters
/// are written as `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
pub fn quote_literal(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&escape_code_point(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Controls, separators other than the ASCII space, and format characters.
fn is_printable(c: char) -> bool {
    !matches!(
        c,
        '\u{0}'..='\u{1f}'
            | '\u{7f}'..='\u{a0}'
            | '\u{ad}'
            | '\u{1680}'
            | '\u{180e}'
            | '\u{2000}'..='\u{200f}'
            | '\u{2028}'..='\u{202f}'
            | '\u{205f}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{3000}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
    )
}

fn escape_code_point(c: char) -> String {
    let code = u32::from(c);
    if code <= 0xff {
        format!("\\x{:02x}", code)
    } else if code <= 0xffff {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    }
}

fn render_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| quote_literal(v)).collect();
    format!("[{}]", items.join(", "))
}
