use crate::mach::Machine;

mod capture_test;

/// Feed one line and collect what it printed, followed by the error
/// message if the line failed.
fn run(machine: &mut Machine, line: &str) -> String {
    let result = machine.enter(line);
    let mut s = machine.take_output();
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}

fn stack(machine: &Machine) -> Vec<String> {
    machine.stack().iter().map(|v| v.repr()).collect()
}
