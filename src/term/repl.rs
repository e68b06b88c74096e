extern crate linefeed;
use super::VERSION;
use crate::lang::{ast::Statement, parse, Error, Line};
use crate::mach::{CodeSink, Compiler, Instruction, Target};
use crate::error;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};

const PROMPT: &str = "kokoro> ";
const CONTINUE: &str = "   ...> ";

type Result<T> = std::result::Result<T, Error>;

fn io_error(error: std::io::Error) -> Error {
    error!(DiskIoError; error.to_string().as_str())
}

/// Compiles statements as they are typed. Ctrl-D or Ctrl-C ends the
/// session with the memory map. A fatal error also ends it and is
/// returned after the map.
pub fn main_loop(target: Target, quiet: bool) -> Result<()> {
    let interface = Interface::new("Kokoro").map_err(io_error)?;
    interface.set_report_signal(Signal::Interrupt, true);
    interface.set_prompt(PROMPT).map_err(io_error)?;
    interface
        .write_fmt(format_args!("Kokoro {} ({})\n", VERSION, target))
        .map_err(io_error)?;

    let mut compiler = Compiler::new(target);
    let mut lines = Prompted {
        interface: &interface,
        block: false,
        error: None,
    };
    let mut echo = Echo {
        interface: &interface,
    };
    let compiled = compiler.compile(&mut lines, &mut echo);
    let result = outcome(compiled, lines.error.take());
    if !quiet {
        interface
            .write_fmt(format_args!("{}", compiler.symbols()))
            .map_err(io_error)?;
    }
    result
}

/// A terminal read error outranks whatever the compiler returned.
fn outcome(compiled: Result<()>, read: Option<std::io::Error>) -> Result<()> {
    match read {
        Some(error) => Err(io_error(error)),
        None => compiled,
    }
}

/// Whether a conditional block is open after `raw` is entered. Only a
/// header the compiler accepts opens one.
fn block_open(open: bool, raw: &str) -> bool {
    let line = Line::new(None, raw);
    if open {
        !line.is_block_end()
    } else {
        matches!(parse(&line), Ok(Statement::If(_)))
    }
}

/// Lines from the editor. The prompt changes while a block is open.
struct Prompted<'a> {
    interface: &'a Interface<DefaultTerminal>,
    block: bool,
    error: Option<std::io::Error>,
}

impl Prompted<'_> {
    fn track(&mut self, line: &str) -> std::io::Result<()> {
        let open = block_open(self.block, line);
        if open != self.block {
            self.block = open;
            self.interface
                .set_prompt(if open { CONTINUE } else { PROMPT })?;
        }
        Ok(())
    }
}

impl Iterator for Prompted<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let result = self.interface.read_line().and_then(|read| match read {
            ReadResult::Input(line) => {
                self.track(&line)?;
                if !line.trim().is_empty() {
                    self.interface.add_history_unique(line.clone());
                }
                Ok(Some(line))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        });
        match result {
            Ok(line) => line,
            Err(error) => {
                self.error = Some(error);
                None
            }
        }
    }
}

/// Writes each instruction back to the terminal as it is compiled.
struct Echo<'a> {
    interface: &'a Interface<DefaultTerminal>,
}

impl CodeSink for Echo<'_> {
    fn emit(&mut self, instruction: Instruction) -> Result<()> {
        if instruction == Instruction::Blank {
            return Ok(());
        }
        self.interface
            .write_fmt(format_args!("{}\n", instruction))
            .map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_fatal_error_is_returned() {
        let e = outcome(Err(error!(OutOfMemory, Some(3))), None).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        assert!(e.is_fatal());
        assert!(outcome(Ok(()), None).is_ok());
    }

    #[test]
    fn test_read_error_wins() {
        let read = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let e = outcome(Err(error!(Break)), Some(read)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DiskIoError);
    }

    #[test]
    fn test_header_opens_block_in_any_case() {
        assert!(block_open(false, "IF x is equal_to 1 do {"));
        assert!(block_open(false, "  if x is less_than y do {\r"));
    }

    #[test]
    fn test_rejected_header_keeps_top_level() {
        assert!(!block_open(false, "if a is b do {"));
        assert!(!block_open(false, "print \"{\""));
        assert!(!block_open(false, "}"));
    }

    #[test]
    fn test_closing_brace_ends_block() {
        assert!(block_open(true, "call beep"));
        assert!(block_open(true, ""));
        assert!(!block_open(true, "  } # done"));
    }
}
