use super::{Quotation, Val};
use crate::error;
use crate::lang::Error;
use rpds::HashTrieMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What a defined name does when it is executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Word {
    /// Run the stored quotation in a fresh scope.
    Quotation(Rc<Quotation>),
    /// Push the stored value.
    Value(Val),
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Word::Quotation(q) => write!(f, "{}", q),
            Word::Value(v) => write!(f, "{}", v.repr()),
        }
    }
}

/// One frame of definitions. Cloning is O(1); updates share structure.
pub type Scope = HashTrieMap<Rc<str>, Word>;

/// ## Lexical scope stack
///
/// Never empty: the base scope lives as long as the stack does.
/// Lookups only consult the top scope. Entering copies the top so code in
/// a quotation sees everything visible to its caller.

#[derive(Debug)]
pub struct Scopes {
    max_depth: usize,
    vec: Vec<Scope>,
}

impl Scopes {
    pub fn new(max_depth: usize) -> Scopes {
        Scopes {
            max_depth,
            vec: vec![Scope::new()],
        }
    }

    fn top(&self) -> &Scope {
        debug_assert!(!self.vec.is_empty());
        &self.vec[self.vec.len() - 1]
    }

    /// Number of scopes including the base scope.
    pub fn depth(&self) -> usize {
        self.vec.len()
    }

    pub fn enter(&mut self) -> Result<()> {
        if self.vec.len() > self.max_depth {
            return Err(error!(NestingTooDeep; "LIMIT IS {}", self.max_depth));
        }
        let copy = self.top().clone();
        self.vec.push(copy);
        tracing::trace!(depth = self.vec.len(), "enter scope");
        Ok(())
    }

    /// Drop every scope above `depth`. The base scope always survives.
    pub fn leave_to(&mut self, depth: usize) {
        self.vec.truncate(depth.max(1));
        tracing::trace!(depth = self.vec.len(), "leave scope");
    }

    pub fn define(&mut self, name: &str, word: Word) {
        tracing::debug!(word = name, definition = %word, depth = self.vec.len(), "define");
        let len = self.vec.len();
        let updated = self.vec[len - 1].insert(name.into(), word);
        self.vec[len - 1] = updated;
    }

    pub fn lookup(&self, name: &str) -> Option<&Word> {
        self.top().get(name)
    }

    /// Definitions visible in the top scope, sorted by name.
    pub fn definitions(&self) -> Vec<(Rc<str>, Word)> {
        let mut defs: Vec<(Rc<str>, Word)> = self
            .top()
            .iter()
            .map(|(name, word)| (name.clone(), word.clone()))
            .collect();
        defs.sort_by(|a, b| a.0.cmp(&b.0));
        defs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_copy_on_enter() {
        let mut s = Scopes::new(10);
        s.define("x", Word::Value(Val::Integer(1)));
        s.enter().unwrap();
        assert_eq!(s.lookup("x"), Some(&Word::Value(Val::Integer(1))));
        s.define("x", Word::Value(Val::Integer(2)));
        s.define("y", Word::Value(Val::Integer(3)));
        assert_eq!(s.lookup("x"), Some(&Word::Value(Val::Integer(2))));
        s.leave_to(1);
        assert_eq!(s.lookup("x"), Some(&Word::Value(Val::Integer(1))));
        assert_eq!(s.lookup("y"), None);
    }

    #[test]
    fn test_base_scope_survives() {
        let mut s = Scopes::new(10);
        s.define("x", Word::Value(Val::Bool(true)));
        s.leave_to(1);
        s.leave_to(0);
        assert_eq!(s.depth(), 1);
        assert!(s.lookup("x").is_some());
    }

    #[test]
    fn test_max_depth() {
        let mut s = Scopes::new(2);
        s.enter().unwrap();
        s.enter().unwrap();
        assert_eq!(s.enter().unwrap_err().code(), ErrorCode::NestingTooDeep);
        assert_eq!(s.depth(), 3);
    }

    #[test]
    fn test_definitions_sorted() {
        let mut s = Scopes::new(10);
        s.define("b", Word::Value(Val::Integer(2)));
        s.define("a", Word::Value(Val::String("x y".into())));
        let listed: Vec<String> = s
            .definitions()
            .iter()
            .map(|(n, w)| format!("{} {}", n, w))
            .collect();
        assert_eq!(listed, vec!["a 'x_y", "b 2"]);
    }
}
