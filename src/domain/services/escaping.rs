//! Context-aware escaping for generated documents
//!
//! JSON and YAML documents are produced by serde; these helpers cover the
//! hand-written parts: markup text/attributes and YAML frontmatter scalars.

/// Escape markup text content.
///
/// Escapes `&`, `<`, `>`; control characters other than newline and tab are
/// written as `&#xN;` character references.
pub fn escape_xml_text(s: &str) -> String {
    escape_xml(s, false)
}

/// Escape a markup attribute value (text escaping plus `"`)
pub fn escape_xml_attr(s: &str) -> String {
    escape_xml(s, true)
}

fn escape_xml(s: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\n' if attribute => out.push_str("&#xA;"),
            '\t' if attribute => out.push_str("&#x9;"),
            '\n' | '\t' => out.push(c),
            c if c.is_control() => out.push_str(&format!("&#x{:X};", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Escape a scalar for YAML frontmatter
///
/// Plain scalars are returned as-is. Values YAML would misread (indicators,
/// reserved words, numbers, surrounding spaces, line breaks) are double-quoted.
pub fn escape_yaml(s: &str) -> String {
    let reserved = matches!(
        s.to_ascii_lowercase().as_str(),
        "" | "~" | "null" | "true" | "false" | "yes" | "no" | "on" | "off"
    );
    let numeric = s.parse::<f64>().is_ok();
    let needs_quoting = reserved
        || numeric
        || s.contains(": ")
        || s.ends_with(':')
        || s.contains(" #")
        || s.contains('\n')
        || s.contains('\t')
        || s.contains('"')
        || s.contains('\\')
        || s.starts_with(' ')
        || s.ends_with(' ')
        || s.starts_with(|c: char| "-?:,[]{}#&*!|>'%@`".contains(c));

    if needs_quoting {
        let escaped = s
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\t', "\\t");
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Markup Escaping Tests ===

    #[test]
    fn test_escape_xml_text_simple() {
        assert_eq!(escape_xml_text("hello world"), "hello world");
    }

    #[test]
    fn test_escape_xml_text_markup_chars() {
        assert_eq!(
            escape_xml_text("a < b && c > d"),
            "a &lt; b &amp;&amp; c &gt; d"
        );
    }

    #[test]
    fn test_escape_xml_text_keeps_quotes_and_newlines() {
        assert_eq!(escape_xml_text("say \"hi\"\nbye"), "say \"hi\"\nbye");
    }

    #[test]
    fn test_escape_xml_control_characters() {
        assert_eq!(escape_xml_text("a\u{1}b\u{1b}"), "a&#x1;b&#x1B;");
    }

    #[test]
    fn test_escape_xml_attr_quotes() {
        assert_eq!(escape_xml_attr("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_xml_attr("a\nb"), "a&#xA;b");
    }

    #[test]
    fn test_escape_xml_arrow_untouched() {
        assert_eq!(escape_xml_text("a() → b()"), "a() → b()");
    }

    // === YAML Escaping Tests ===

    #[test]
    fn test_escape_yaml_simple() {
        assert_eq!(escape_yaml("hello world"), "hello world");
    }

    #[test]
    fn test_escape_yaml_with_colon() {
        assert_eq!(escape_yaml("key: value"), "\"key: value\"");
    }

    #[test]
    fn test_escape_yaml_with_hash() {
        assert_eq!(escape_yaml("# comment"), "\"# comment\"");
    }

    #[test]
    fn test_escape_yaml_leading_space() {
        assert_eq!(escape_yaml(" leading"), "\" leading\"");
    }

    #[test]
    fn test_escape_yaml_with_quotes() {
        assert_eq!(escape_yaml(r#"say "hello""#), r#""say \"hello\"""#);
    }

    #[test]
    fn test_escape_yaml_reserved_words_and_numbers() {
        assert_eq!(escape_yaml("true"), "\"true\"");
        assert_eq!(escape_yaml("No"), "\"No\"");
        assert_eq!(escape_yaml("1.5"), "\"1.5\"");
        assert_eq!(escape_yaml(""), "\"\"");
    }

    #[test]
    fn test_escape_yaml_multiline() {
        assert_eq!(escape_yaml("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn test_escape_yaml_url_is_plain() {
        assert_eq!(escape_yaml("https://example.com"), "https://example.com");
    }
}
