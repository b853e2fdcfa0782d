use super::Quotation;
use crate::lang::token::escape;
use std::rc::Rc;

/// ## Runtime value
///
/// Values are immutable. Strings and quotations are reference counted so
/// `dup` and friends never copy their contents.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
    Bool(bool),
    Quotation(Rc<Quotation>),
}

impl Val {
    pub fn type_name(&self) -> &'static str {
        use Val::*;
        match self {
            Integer(_) => "INTEGER",
            Float(_) => "FLOAT",
            String(_) => "STRING",
            Bool(_) => "BOOL",
            Quotation(_) => "QUOTATION",
        }
    }

    pub fn is_truthy(&self) -> bool {
        use Val::*;
        match self {
            Integer(n) => *n != 0,
            Float(n) => *n != 0.0,
            String(s) => !s.is_empty(),
            Bool(b) => *b,
            Quotation(q) => !q.is_empty(),
        }
    }

    /// Source form of the value. Feeding the tokens of a repr back into a
    /// machine pushes an equal value, booleans excepted.
    pub fn repr(&self) -> std::string::String {
        match self {
            Val::String(s) => escape(s),
            _ => self.to_string(),
        }
    }
}

impl From<crate::lang::Literal> for Val {
    fn from(literal: crate::lang::Literal) -> Val {
        use crate::lang::Literal;
        match literal {
            Literal::String(s) => Val::String(s.into()),
            Literal::Integer(n) => Val::Integer(n),
            Literal::Float(n) => Val::Float(n),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Float(n) => {
                if n.is_nan() {
                    write!(f, "nan")
                } else if n.is_infinite() {
                    write!(f, "{}inf", if *n < 0.0 { "-" } else { "" })
                } else {
                    write!(f, "{:?}", n)
                }
            }
            String(s) => write!(f, "{}", s),
            Bool(b) => write!(f, "{}", b),
            Quotation(q) => write!(f, "{}", q),
        }
    }
}
