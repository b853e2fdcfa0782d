/// ## Built-in words
///
/// The spelling of every word the machine knows without a definition.
/// The machine turns [`Builtin::ALL`] into its lookup table once, when it
/// is created.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    // *** Arithmetic and bitwise
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    DivInt,
    Pow,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    // *** Conversions
    Int,
    Float,
    Str,
    Bool,
    Invert,
    Not,

    // *** Comparison and logic
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,

    // *** Stack shuffles
    Drop,
    Dup,
    Swap,
    Rot,

    // *** Introspection
    Print,
    PrintStack,
    Defs,

    // *** Blocks and control flow
    OpenBlock,
    CloseBlock,
    Define,
    Do,
    If,
    IfElse,
    While,
    DoWhile,
}

impl Builtin {
    pub const ALL: [Builtin; 41] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
        Builtin::DivInt,
        Builtin::Pow,
        Builtin::BitAnd,
        Builtin::BitOr,
        Builtin::BitXor,
        Builtin::Shl,
        Builtin::Shr,
        Builtin::Int,
        Builtin::Float,
        Builtin::Str,
        Builtin::Bool,
        Builtin::Invert,
        Builtin::Not,
        Builtin::Eq,
        Builtin::NotEq,
        Builtin::Lt,
        Builtin::LtEq,
        Builtin::Gt,
        Builtin::GtEq,
        Builtin::And,
        Builtin::Or,
        Builtin::Drop,
        Builtin::Dup,
        Builtin::Swap,
        Builtin::Rot,
        Builtin::Print,
        Builtin::PrintStack,
        Builtin::Defs,
        Builtin::OpenBlock,
        Builtin::CloseBlock,
        Builtin::Define,
        Builtin::Do,
        Builtin::If,
        Builtin::IfElse,
        Builtin::While,
        Builtin::DoWhile,
    ];

    pub fn name(self) -> &'static str {
        use Builtin::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            DivInt => "//",
            Pow => "**",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            Shl => "<<",
            Shr => ">>",

            Int => "int",
            Float => "float",
            Str => "str",
            Bool => "bool",
            Invert => "~",
            Not => "not",

            Eq => "=",
            NotEq => "!=",
            Lt => "<",
            LtEq => "<=",
            Gt => ">",
            GtEq => ">=",
            And => "and",
            Or => "or",

            Drop => "drop",
            Dup => "dup",
            Swap => "swap",
            Rot => "rot",

            Print => ".",
            PrintStack => ".s",
            Defs => "defs",

            OpenBlock => "{",
            CloseBlock => "}",
            Define => "define",
            Do => "do",
            If => "if",
            IfElse => "ifelse",
            While => "while",
            DoWhile => "dowhile",
        }
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Builtin::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names.len(), Builtin::ALL.len());
    }
}
