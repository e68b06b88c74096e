/*!
## Rust Terminal Module

Command line front end: batch compilation of files or standard input,
and an interactive session when no input is given.

*/

extern crate ansi_term;
extern crate ctrlc;
use crate::mach::{AsmWriter, CodeSink, Compiler, Instruction, Target};
use crate::{error, lang::Error};
use ansi_term::Style;
use chrono::Local;
use clap::{ArgAction, Parser};
use log::{info, warn, LevelFilter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod logger;
mod repl;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "kokoro",
    version = VERSION,
    about = "Compiles Kokoro source into 6502 assembly"
)]
pub struct Args {
    /// Source file, or `-` for standard input. Interactive when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
    /// Assembly file to write. Standard output when omitted.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
    /// Target instruction set.
    #[arg(short = 't', long = "target", value_enum, default_value_t = Target::Mos6502)]
    pub target: Target,
    /// Log compiler activity to stderr; repeat for more detail.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
    /// No memory map report and no logging.
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn main() {
    let args = Args::parse();
    logger::init(args.level());
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Ctrl-C handler not installed: {}", error);
    }
    let result = match &args.input {
        None => repl::main_loop(args.target, args.quiet),
        Some(input) => batch(&args, input, interrupted),
    };
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn batch(args: &Args, input: &Path, interrupted: Arc<AtomicBool>) -> Result<(), Error> {
    let reader: Box<dyn BufRead> = if input == Path::new("-") {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        Box::new(BufReader::new(open(input)?))
    };
    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(create(path)?)),
        None => Box::new(std::io::stdout()),
    };
    info!("compiling {} for {}", input.display(), args.target);

    let mut writer = AsmWriter::new(out);
    writer.comment(&format!(
        "Kokoro {} ({}) {}",
        VERSION,
        args.target,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;
    writer.emit(Instruction::Blank)?;

    let mut feed = Feed::new(reader, interrupted);
    let mut compiler = Compiler::new(args.target);
    compiler.compile(&mut feed, &mut writer)?;
    writer.flush()?;
    if let Some(error) = feed.error.take() {
        return Err(error);
    }
    if feed.interrupted() {
        return Err(error!(Break));
    }

    if !args.quiet {
        let report = format!("{}Kokoro compile complete.", compiler.symbols());
        if args.output.is_none() {
            eprintln!("{}", report);
        } else {
            println!("{}", report);
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|error| {
        let msg = format!("{}: {}", path.display(), error);
        match error.kind() {
            ErrorKind::NotFound => error!(FileNotFound; msg.as_str()),
            _ => error!(DiskIoError; msg.as_str()),
        }
    })
}

fn create(path: &Path) -> Result<File, Error> {
    File::create(path).map_err(|error| {
        let msg = format!("{}: {}", path.display(), error);
        error!(DiskIoError; msg.as_str())
    })
}

/// Source lines from a reader. Stops early on Ctrl-C or a read error,
/// either of which the caller checks once compilation returns.
struct Feed<R> {
    reader: R,
    interrupted: Arc<AtomicBool>,
    error: Option<Error>,
}

impl<R: BufRead> Feed<R> {
    fn new(reader: R, interrupted: Arc<AtomicBool>) -> Feed<R> {
        Feed {
            reader,
            interrupted,
            error: None,
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

impl<R: BufRead> Iterator for Feed<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.interrupted() || self.error.is_some() {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(error) => {
                self.error = Some(error!(DiskIoError; error.to_string().as_str()));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_stops_on_interrupt() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut feed = Feed::new("goto a\ngoto b\n".as_bytes(), flag.clone());
        assert_eq!(feed.next().as_deref(), Some("goto a\n"));
        flag.store(true, Ordering::SeqCst);
        assert_eq!(feed.next(), None);
        assert!(feed.interrupted());
    }

    #[test]
    fn test_levels() {
        let args = Args::parse_from(["kokoro", "in.kok", "-vv", "--target", "mega6502"]);
        assert_eq!(args.level(), LevelFilter::Trace);
        assert_eq!(args.target, Target::Mega6502);
        let args = Args::parse_from(["kokoro", "-q"]);
        assert_eq!(args.level(), LevelFilter::Off);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_missing_file() {
        let e = open(Path::new("/no/such/kokoro/source")).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::FileNotFound);
    }
}
