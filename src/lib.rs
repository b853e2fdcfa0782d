//! # Brace
//!
//! A small concatenative language. Words take their arguments from a
//! shared data stack and leave their results on it. Blocks of code are
//! values too: `{ dup * }` pushes a quotation that can be run, tested
//! against or given a name.
//!
//! ```text
//! > { dup * } 'square' define
//! > 5 square .
//! 25
//! ```
//!
//! Run the executable with no arguments for an interactive prompt, or
//! pass a file name to run a file line by line.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/words.rs"]
#[allow(non_snake_case)]
pub mod __Word_Reference;

pub mod lang;
pub mod mach;
