#![allow(dead_code)]

use brace::mach::Machine;

/// Feed one line and return everything it printed, followed by the error
/// message when the line failed.
pub fn exec(machine: &mut Machine, line: &str) -> String {
    let result = machine.enter(line);
    let mut s = machine.take_output();
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}

/// The data stack in source form, bottom first.
pub fn stack(machine: &Machine) -> Vec<String> {
    machine.stack().iter().map(|v| v.repr()).collect()
}

/// Run a line on a fresh machine and return the resulting stack.
pub fn eval(line: &str) -> Vec<String> {
    let mut m = Machine::default();
    if let Err(error) = m.enter(line) {
        panic!("{:?} failed: {}", line, error);
    }
    stack(&m)
}

/// Run a line on a fresh machine and return only the error message.
pub fn fail(line: &str) -> String {
    let mut m = Machine::default();
    match m.enter(line) {
        Ok(()) => panic!("{:?} did not fail", line),
        Err(error) => error.to_string(),
    }
}
