use ansi_term::Colour;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Plain stderr logger with a coloured level tag.
struct Logger {
    level: LevelFilter,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => Colour::Red.bold().paint("error"),
            Level::Warn => Colour::Yellow.bold().paint("warn"),
            Level::Info => Colour::Green.paint("info"),
            Level::Debug => Colour::Blue.paint("debug"),
            Level::Trace => Colour::Purple.paint("trace"),
        };
        eprintln!("{}: {}", tag, record.args());
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) {
    if log::set_boxed_logger(Box::new(Logger { level })).is_ok() {
        log::set_max_level(level);
    }
}
