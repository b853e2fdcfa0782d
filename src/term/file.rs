use brace::error;
use brace::lang::Error;
use brace::mach::{Config, Machine};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

/// Run a file one line at a time. A failing line is reported with its
/// line number and the rest of that line is skipped; the next line runs
/// as usual. Returns the number of lines that failed.
pub fn run_file(path: &Path, config: Config) -> Result<usize, Error> {
    let reader = match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            return Err(match error.kind() {
                ErrorKind::NotFound => error!(InternalError; "FILE NOT FOUND {}", path.display()),
                _ => error!(InternalError; "{}", error),
            })
        }
    };
    let mut machine = Machine::new(config);
    let stdout = std::io::stdout();
    let mut failures = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| error!(InternalError; "{}", error))?;
        let result = machine.enter(&line);
        let mut out = stdout.lock();
        out.write_all(machine.take_output().as_bytes())
            .and_then(|_| out.flush())
            .map_err(|error| error!(InternalError; "{}", error))?;
        if let Err(error) = result {
            tracing::debug!(line = index + 1, %error, "line failed");
            eprintln!("{}", error.in_line_number(index + 1));
            failures += 1;
        }
    }
    if machine.is_capturing() {
        eprintln!(
            "{}",
            error!(UnmatchedBrace; "QUOTATION NOT CLOSED AT END OF {}", path.display())
        );
        failures += 1;
    }
    Ok(failures)
}
