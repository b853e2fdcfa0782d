use super::{Builtin, Operation, Quotation, Scopes, Stack, Val, Word};
use crate::error;
use crate::lang::{lex, Error, Literal};
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Machine settings

#[derive(Debug, Clone)]
pub struct Config {
    /// How many quotations may run inside each other before
    /// `NESTING TOO DEEP` is raised instead of exhausting the call stack.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { max_depth: 256 }
    }
}

/// What a token turned out to be once classified.
enum Action {
    Literal(Val),
    Builtin(Builtin),
    Word(Word),
}

/// ## Stack machine
///
/// Owns the data stack and the scope stack. Tokens go in one at a time
/// through [`Machine::process_token`]. While a `{` is open the machine is
/// capturing: tokens are appended, unparsed, to the quotation on top of the
/// data stack until the matching `}` arrives.
///
/// Printed output is collected and handed out by [`Machine::take_output`].

pub struct Machine {
    stack: Stack<Val>,
    scopes: Scopes,
    words: HashMap<&'static str, Builtin>,
    depth: usize,
    output: String,
    interrupted: Arc<AtomicBool>,
}

impl Default for Machine {
    fn default() -> Self {
        Machine::new(Config::default())
    }
}

impl Machine {
    pub fn new(config: Config) -> Machine {
        Machine {
            stack: Stack::new(),
            scopes: Scopes::new(config.max_depth),
            words: Builtin::ALL.iter().map(|b| (b.name(), *b)).collect(),
            depth: 0,
            output: String::new(),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run every token of a line, stopping at the first error.
    pub fn enter(&mut self, line: &str) -> Result<()> {
        for token in lex(line) {
            self.process_token(token)?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn process_token(&mut self, token: &str) -> Result<()> {
        if self.depth > 0 {
            return self.capture(token);
        }
        match self.resolve(token)? {
            Action::Literal(val) => {
                self.stack.push(val);
                Ok(())
            }
            Action::Builtin(builtin) => self.execute_builtin(builtin),
            Action::Word(word) => self.execute_word(word),
        }
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    /// True while a `{` is waiting for its `}`.
    pub fn is_capturing(&self) -> bool {
        self.depth > 0
    }

    /// Setting the flag stops the running word at its next token with
    /// a `BREAK` error. Safe to set from a signal handler thread.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    /// Builtin and defined names, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.keys().map(|w| w.to_string()).collect();
        words.extend(self.scopes.definitions().iter().map(|(n, _)| n.to_string()));
        words.sort();
        words.dedup();
        words
    }

    fn check_interrupt(&self) -> Result<()> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            Err(error!(Interrupted))
        } else {
            Ok(())
        }
    }

    fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn resolve(&self, token: &str) -> Result<Action> {
        if let Some(literal) = Literal::classify(token) {
            return Ok(Action::Literal(literal.into()));
        }
        if let Some(builtin) = self.words.get(token) {
            return Ok(Action::Builtin(*builtin));
        }
        match self.scopes.lookup(token) {
            Some(word) => Ok(Action::Word(word.clone())),
            None => Err(error!(UnknownToken; "{}", token)),
        }
    }

    fn capture(&mut self, token: &str) -> Result<()> {
        match self.words.get(token) {
            Some(Builtin::OpenBlock) => self.depth += 1,
            Some(Builtin::CloseBlock) => {
                self.depth -= 1;
                if self.depth == 0 {
                    return Ok(());
                }
            }
            _ => {}
        }
        match self.stack.last_mut() {
            Some(Val::Quotation(q)) => {
                Rc::make_mut(q).push(token);
                Ok(())
            }
            _ => Err(error!(InternalError; "NO OPEN QUOTATION")),
        }
    }

    fn execute_word(&mut self, word: Word) -> Result<()> {
        match word {
            Word::Value(val) => {
                self.stack.push(val);
                Ok(())
            }
            Word::Quotation(q) => self.execute_quotation(&q),
        }
    }

    /// Run a quotation in a copy of the current scope. The copy is dropped
    /// when the quotation finishes, however it finishes.
    pub fn execute_quotation(&mut self, quotation: &Quotation) -> Result<()> {
        let mut frame = ScopeGuard::enter(self)?;
        for token in quotation.tokens() {
            // A nested block is captured whole; breaking inside it would
            // leave the machine capturing.
            if !frame.is_capturing() {
                frame.check_interrupt()?;
            }
            frame.process_token(token)?;
        }
        Ok(())
    }

    fn pop_quotation(&mut self, word: Builtin) -> Result<Rc<Quotation>> {
        match self.stack.pop()? {
            Val::Quotation(q) => Ok(q),
            val => Err(error!(TypeError; "{} EXPECTS QUOTATION, GOT {}", word, val.type_name())),
        }
    }

    fn flag(&self) -> Result<bool> {
        Ok(self.stack.peek()?.is_truthy())
    }

    fn binary(&mut self, op: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(lhs, rhs)?);
        Ok(())
    }

    fn unary(&mut self, op: fn(Val) -> Result<Val>) -> Result<()> {
        let val = self.stack.pop()?;
        self.stack.push(op(val)?);
        Ok(())
    }

    fn execute_builtin(&mut self, builtin: Builtin) -> Result<()> {
        use Builtin::*;
        match builtin {
            Add => self.binary(Operation::sum),
            Sub => self.binary(Operation::subtract),
            Mul => self.binary(Operation::multiply),
            Div => self.binary(Operation::divide),
            Mod => self.binary(Operation::modulo),
            DivInt => self.binary(Operation::divide_int),
            Pow => self.binary(Operation::power),
            BitAnd => self.binary(Operation::bit_and),
            BitOr => self.binary(Operation::bit_or),
            BitXor => self.binary(Operation::bit_xor),
            Shl => self.binary(Operation::shift_left),
            Shr => self.binary(Operation::shift_right),

            Int => self.unary(Operation::to_int),
            Float => self.unary(Operation::to_float),
            Str => self.unary(Operation::to_str),
            Bool => self.unary(Operation::to_bool),
            Invert => self.unary(Operation::invert),
            Not => self.unary(Operation::not),

            Eq => self.binary(Operation::equal),
            NotEq => self.binary(Operation::not_equal),
            Lt => self.binary(Operation::less),
            LtEq => self.binary(Operation::less_equal),
            Gt => self.binary(Operation::greater),
            GtEq => self.binary(Operation::greater_equal),
            And => self.binary(Operation::and),
            Or => self.binary(Operation::or),

            Drop => {
                self.stack.pop()?;
                Ok(())
            }
            Dup => {
                let val = self.stack.peek()?.clone();
                self.stack.push(val);
                Ok(())
            }
            Swap => {
                let (a, b) = self.stack.pop_2()?;
                self.stack.push(b);
                self.stack.push(a);
                Ok(())
            }
            Rot => {
                let mut abc = self.stack.pop_n(3)?;
                abc.rotate_left(1);
                for val in abc {
                    self.stack.push(val);
                }
                Ok(())
            }

            Print => {
                let val = self.stack.pop()?;
                self.print(&format!("{}\n", val));
                Ok(())
            }
            PrintStack => {
                let mut s = format!("<{}>", self.stack.len());
                for val in self.stack.iter() {
                    s.push(' ');
                    s.push_str(&val.repr());
                }
                s.push('\n');
                self.print(&s);
                Ok(())
            }
            Defs => {
                let mut s = String::new();
                for (name, word) in self.scopes.definitions() {
                    s.push_str(&format!("{}: {}\n", name, word));
                }
                self.print(&s);
                Ok(())
            }

            OpenBlock => {
                self.stack.push(Val::Quotation(Rc::new(Quotation::new())));
                self.depth = 1;
                Ok(())
            }
            CloseBlock => Err(error!(UnmatchedBrace)),
            Define => {
                let name = match self.stack.pop()? {
                    Val::String(s) => s,
                    val => {
                        return Err(error!(TypeError; "define EXPECTS STRING NAME, GOT {}", val.type_name()))
                    }
                };
                let word = match self.stack.pop()? {
                    Val::Quotation(q) => Word::Quotation(q),
                    val => Word::Value(val),
                };
                self.scopes.define(&name, word);
                Ok(())
            }
            Do => {
                let q = self.pop_quotation(builtin)?;
                self.execute_quotation(&q)
            }
            If => {
                let q = self.pop_quotation(builtin)?;
                if self.flag()? {
                    self.execute_quotation(&q)?;
                }
                Ok(())
            }
            IfElse => {
                let else_q = self.pop_quotation(builtin)?;
                let if_q = self.pop_quotation(builtin)?;
                if self.flag()? {
                    self.execute_quotation(&if_q)
                } else {
                    self.execute_quotation(&else_q)
                }
            }
            While => {
                let q = self.pop_quotation(builtin)?;
                self.run_while(&q)
            }
            DoWhile => {
                let q = self.pop_quotation(builtin)?;
                self.execute_quotation(&q)?;
                self.run_while(&q)
            }
        }
    }

    fn run_while(&mut self, body: &Quotation) -> Result<()> {
        loop {
            self.check_interrupt()?;
            if !self.flag()? {
                return Ok(());
            }
            self.execute_quotation(body)?;
        }
    }
}

/// Holds a pushed scope for the lifetime of one quotation run and pops it
/// on drop, so early returns through `?` cannot leak it. Capture state is
/// put back too: a body that fails inside a nested `{` must not leave the
/// caller capturing.
struct ScopeGuard<'a> {
    machine: &'a mut Machine,
    depth: usize,
    capture: usize,
}

impl<'a> ScopeGuard<'a> {
    fn enter(machine: &'a mut Machine) -> Result<ScopeGuard<'a>> {
        let depth = machine.scopes.depth();
        let capture = machine.depth;
        machine.scopes.enter()?;
        Ok(ScopeGuard {
            machine,
            depth,
            capture,
        })
    }
}

impl Deref for ScopeGuard<'_> {
    type Target = Machine;
    fn deref(&self) -> &Machine {
        self.machine
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Machine {
        self.machine
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.machine.scopes.leave_to(self.depth);
        self.machine.depth = self.capture;
    }
}
