use std::rc::Rc;

/// ## Deferred block of raw tokens
///
/// Captured between `{` and `}` and never parsed ahead of time. Nested
/// braces are kept as ordinary tokens; the nesting only matters again when
/// the quotation runs and its tokens are dispatched one by one.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Quotation {
    tokens: Vec<Rc<str>>,
}

impl Quotation {
    pub fn new() -> Quotation {
        Quotation::default()
    }
    pub fn push(&mut self, token: &str) {
        self.tokens.push(token.into())
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    pub fn tokens(&self) -> &[Rc<str>] {
        &self.tokens
    }
}

impl std::fmt::Display for Quotation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for token in &self.tokens {
            write!(f, " {}", token)?;
        }
        write!(f, " }}")
    }
}
