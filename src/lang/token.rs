/// Marker that opens a string literal.
pub const STRING_MARKER: char = '\'';

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
}

impl Literal {
    /// Classify one raw token. Rules are tried in order: string, integer,
    /// float. A rule that fails to parse only means the next rule gets a
    /// chance; `None` means the token is a word.
    pub fn classify(s: &str) -> Option<Literal> {
        if let Some(rest) = s.strip_prefix(STRING_MARKER) {
            return Some(Literal::String(unescape(rest)));
        }
        if let Ok(i) = s.parse::<i64>() {
            return Some(Literal::Integer(i));
        }
        if let Ok(f) = s.parse::<f64>() {
            return Some(Literal::Float(f));
        }
        None
    }
}

/// Split a line into raw tokens.
pub fn lex(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Decode the body of a string literal. `\x` is a literal `x`, a bare `_`
/// is a space, and one unescaped `'` at the very end closes the literal.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '_' => out.push(' '),
            STRING_MARKER if chars.peek().is_none() => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`unescape`], including the leading marker.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    out.push(STRING_MARKER);
    for ch in s.chars() {
        match ch {
            ' ' => out.push('_'),
            '_' | '\\' | STRING_MARKER => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("hello_world"), "hello world");
        assert_eq!(unescape("a\\_b"), "a_b");
        assert_eq!(unescape("back\\\\slash"), "back\\slash");
        assert_eq!(unescape("square'"), "square");
        assert_eq!(unescape("it\\'"), "it'");
        assert_eq!(unescape("'"), "");
        assert_eq!(unescape(""), "");
        assert_eq!(unescape("dangling\\"), "dangling");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("hello world"), "'hello_world");
        assert_eq!(escape("a_b"), "'a\\_b");
        assert_eq!(unescape(&escape("it's a_b\\c")[1..]), "it's a_b\\c");
    }

    #[test]
    fn test_classify_order() {
        assert_eq!(Literal::classify("42"), Some(Literal::Integer(42)));
        assert_eq!(Literal::classify("-7"), Some(Literal::Integer(-7)));
        assert_eq!(Literal::classify("2.5"), Some(Literal::Float(2.5)));
        assert_eq!(Literal::classify("1e3"), Some(Literal::Float(1000.0)));
        assert_eq!(Literal::classify("'42"), Some(Literal::String("42".into())));
        assert_eq!(Literal::classify("{"), None);
        assert_eq!(Literal::classify("dup"), None);
        assert_eq!(Literal::classify("+"), None);
        assert_eq!(Literal::classify("-"), None);
        assert_eq!(Literal::classify("."), None);
    }

    #[test]
    fn test_lex() {
        assert_eq!(lex("  1 2\t+  . "), vec!["1", "2", "+", "."]);
        assert!(lex("   ").is_empty());
    }
}
