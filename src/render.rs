use compact_str::CompactString;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    // `[ 'alpha', 'beta' ]`, the way node prints a string array
    #[default]
    Inspect,
    Json,
}

pub fn render(style: Style, names: &[CompactString]) -> Result<String> {
    match style {
        Style::Inspect => Ok(inspect(names)),
        Style::Json => Ok(serde_json::to_string(names)?),
    }
}

fn inspect(names: &[CompactString]) -> String {
    if names.is_empty() {
        return "[]".to_string()
    }

    let items: Vec<String> = names.iter().map(|n| quote(n)).collect();

    format!("[ {} ]", items.join(", "))
}

fn quote(s: &str) -> String {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);

    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            },
            c if c < ' ' || c == '\u{7f}' => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }

    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<CompactString> {
        v.iter().map(|s| CompactString::from(*s)).collect()
    }

    #[test]
    fn inspect_style() {
        assert_eq!(render(Style::Inspect, &names(&["alpha", "beta"])).unwrap(), "[ 'alpha', 'beta' ]");
        assert_eq!(render(Style::Inspect, &names(&["@scope/pkg"])).unwrap(), "[ '@scope/pkg' ]");
        assert_eq!(render(Style::Inspect, &[]).unwrap(), "[]");
    }

    #[test]
    fn json_style() {
        assert_eq!(render(Style::Json, &names(&["alpha", "beta"])).unwrap(), r#"["alpha","beta"]"#);
        assert_eq!(render(Style::Json, &[]).unwrap(), "[]");
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote("it's"), r#""it's""#);
        assert_eq!(quote(r#"it's "x""#), r#"`it's "x"`"#);
        assert_eq!(quote(r"a\b"), r"'a\\b'");
        assert_eq!(quote(r#"a'b"c"#), r#"`a'b"c`"#);
        assert_eq!(quote("a'b\"c`d"), r#"'a\'b"c`d'"#);
        assert_eq!(quote("x'\ny"), r#""x'\ny""#);
        assert_eq!(quote("t\tz"), r"'t\tz'");
        assert_eq!(quote("\u{8}\u{b}\u{c}\r\u{1b}\u{7f}"), r"'\b\x0B\f\r\x1B\x7F'");
    }

    #[test]
    fn control_characters_stay_on_one_line() {
        let rendered = render(Style::Inspect, &names(&["a'b\nc", "d\re"])).unwrap();

        assert_eq!(rendered, r#"[ "a'b\nc", 'd\re' ]"#);
        assert!(!rendered.contains('\n'));
    }
}
