/*!
## Rust Machine Module

This Rust module is the stack machine: values, the data stack,
quotations, scopes and the built-in words.

*/

mod builtin;
mod machine;
mod operation;
mod quotation;
mod scope;
mod stack;
mod val;

pub use builtin::Builtin;
pub use machine::Config;
pub use machine::Machine;
pub use operation::Operation;
pub use quotation::Quotation;
pub use scope::Scope;
pub use scope::Scopes;
pub use scope::Word;
pub use stack::Stack;
pub use val::Val;

#[cfg(test)]
mod tests;
