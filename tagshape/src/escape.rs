//! Encoders for attribute values, body text and style values.
//!
//! All three take `impl Into<Option<&str>>`; `None` is treated as the empty
//! string. Substitutions are literal and replace every non-overlapping
//! occurrence, left to right. None of them can fail.
//!
//! Attribute encoding only touches `&` and `"`. `<`, `>`, `'` and `\` pass
//! through unchanged: output that is pasted into an unquoted or single-quoted
//! context is not safe.

use alloc::string::{String, ToString};

/// Encode a value for use inside a double-quoted attribute.
///
/// `&` becomes `&amp;`, then `"` becomes `&quot;`.
///
/// ```rust
/// assert_eq!(tagshape::encode_attribute("say \"hi\""), "say &quot;hi&quot;");
/// assert_eq!(tagshape::encode_attribute(None), "");
/// ```
pub fn encode_attribute<'a>(value: impl Into<Option<&'a str>>) -> String {
    let value = value.into().unwrap_or_default();
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Encode a value as HTML body text.
///
/// Applies [`encode_attribute`] first, so the entities it inserts are not
/// touched again, then turns spaces and tabs into `&nbsp;` and newlines into
/// `<br>`.
///
/// ```rust
/// assert_eq!(tagshape::encode_body("a\nb c"), "a<br>b&nbsp;c");
/// ```
pub fn encode_body<'a>(value: impl Into<Option<&'a str>>) -> String {
    encode_attribute(value)
        .replace(' ', "&nbsp;")
        .replace('\t', "&nbsp;")
        .replace('\n', "<br>")
}

/// Encode a CSS style value.
///
/// A value containing `;` is wrapped in double quotes; anything else is
/// returned as is. No characters are substituted.
///
/// ```rust
/// assert_eq!(tagshape::encode_style("color:red"), "color:red");
/// assert_eq!(
///     tagshape::encode_style("color:red;font-size:1px"),
///     "\"color:red;font-size:1px\""
/// );
/// ```
pub fn encode_style<'a>(value: impl Into<Option<&'a str>>) -> String {
    let value = value.into().unwrap_or_default();
    if value.contains(';') {
        alloc::format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_encoding_replaces_ampersand_and_quote() {
        assert_eq!(encode_attribute("a & b"), "a &amp; b");
        assert_eq!(encode_attribute("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(encode_attribute("&&\"\""), "&amp;&amp;&quot;&quot;");
    }

    #[test]
    fn attribute_encoding_leaves_other_characters_alone() {
        for s in ["", "plain", "<b>", "it's", "back\\slash", "tab\there", "é ü"] {
            assert_eq!(encode_attribute(s), s);
        }
    }

    #[test]
    fn existing_entities_are_encoded_again() {
        assert_eq!(encode_attribute("&amp;"), "&amp;amp;");
    }

    #[test]
    fn none_is_empty() {
        assert_eq!(encode_attribute(None), "");
        assert_eq!(encode_body(None), "");
        assert_eq!(encode_style(None), "");
    }

    #[test]
    fn body_encoding_runs_attribute_encoding_first() {
        assert_eq!(encode_body("a\nb c"), "a<br>b&nbsp;c");
        assert_eq!(encode_body("&\n"), "&amp;<br>");
        assert_eq!(encode_body("A & B"), "A&nbsp;&amp;&nbsp;B");
        assert_eq!(encode_body("\"x\"\ty"), "&quot;x&quot;&nbsp;y");
    }

    #[test]
    fn body_encoding_keeps_angle_brackets() {
        assert_eq!(encode_body("<script>"), "<script>");
    }

    #[test]
    fn style_encoding_quotes_only_with_semicolon() {
        assert_eq!(encode_style("color:red"), "color:red");
        assert_eq!(
            encode_style("color:red;font-size:1px"),
            "\"color:red;font-size:1px\""
        );
        assert_eq!(encode_style(";"), "\";\"");
        assert_eq!(encode_style("a \"b\" & c"), "a \"b\" & c");
    }
}
