extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use brace::mach::{Config, Machine};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::sync::atomic::Ordering;
use std::sync::Arc;

mod file;

pub use file::run_file;

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = ". ";

pub fn main(config: Config) {
    let mut machine = Machine::new(config);
    let interrupted = machine.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(%error, "CTRL-C will not interrupt running words");
    }
    if let Err(error) = main_loop(&mut machine) {
        eprintln!("{}", error);
    }
}

fn main_loop(machine: &mut Machine) -> std::io::Result<()> {
    let command = Interface::new("brace")?;
    let interrupted = machine.interrupt_handle();

    loop {
        command.set_prompt(if machine.is_capturing() {
            CONTINUATION_PROMPT
        } else {
            PROMPT
        })?;
        command.set_completer(Arc::new(WordCompleter::new(machine.words())));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        interrupted.store(false, Ordering::SeqCst);
        let result = machine.enter(&string);
        let output = machine.take_output();
        if !output.is_empty() {
            command.write_fmt(format_args!("{}", output))?;
        }
        if let Err(error) = result {
            command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))?;
        }
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}

struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn new(words: Vec<String>) -> WordCompleter {
        WordCompleter { words }
    }
}

impl<Term: Terminal> Completer<Term> for WordCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let completions: Vec<Completion> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Completion::simple(w.clone()))
            .collect();
        if completions.is_empty() {
            None
        } else {
            Some(completions)
        }
    }
}
