/*!
# Rust Language Module

This Rust module splits input into raw tokens, recognizes literals,
and defines the errors every part of the language reports.

*/

#[macro_use]
mod error;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use token::lex;
pub use token::Literal;
