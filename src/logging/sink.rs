//! Destinations for finished log lines

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use tracing::debug;

use crate::logging::Level;

/// Somewhere a finished line can go. Implementations decide persistence
/// and flushing; layout has already happened by the time they see it.
pub trait Sink {
    fn handle(&mut self, level: Level, line: &str);

    fn flush(&mut self) {}
}

/// Writes lines to standard output, colored whole-line per level unless
/// told otherwise.
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Console {
        Console { color }
    }
}

impl Sink for Console {
    fn handle(&mut self, level: Level, line: &str) {
        if self.color {
            println!("{}", paint(level, line));
        } else {
            println!("{}", line);
        }
    }
}

fn paint(level: Level, line: &str) -> String {
    match level {
        Level::Fatal => line
            .red()
            .bold()
            .to_string(),
        Level::Error => line
            .red()
            .to_string(),
        Level::Warning => line
            .yellow()
            .to_string(),
        Level::Success => line
            .green()
            .to_string(),
        Level::Debug => line
            .blue()
            .to_string(),
        Level::Trace => line
            .magenta()
            .to_string(),
        Level::Info => line
            .bright_white()
            .to_string(),
        Level::Version => line
            .yellow()
            .bold()
            .to_string(),
    }
}

/// Appends lines to a file, opening it lazily on the first message and
/// flushing immediately for messages at or above the flush level.
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
    flush_level: Level,
}

impl FileSink {
    pub fn new(path: PathBuf) -> FileSink {
        FileSink {
            path,
            file: None,
            flush_level: Level::Warning,
        }
    }

    pub fn set_flush_level(&mut self, level: Level) {
        self.flush_level = level;
    }
}

impl Sink for FileSink {
    fn handle(&mut self, level: Level, line: &str) {
        if self
            .file
            .is_none()
        {
            match OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
            {
                Ok(file) => self.file = Some(file),
                Err(error) => {
                    debug!(?error);
                    return;
                }
            }
        }

        if let Some(file) = &mut self.file {
            if let Err(error) = writeln!(file, "{}", line) {
                debug!(?error);
            }
            if level <= self.flush_level {
                if let Err(error) = file.flush() {
                    debug!(?error);
                }
            }
        }
    }

    fn flush(&mut self) {
        if let Some(file) = &mut self.file {
            if let Err(error) = file.flush() {
                debug!(?error);
            }
        }
    }
}

/// Writes lines to any stream, flushing per the flush level.
pub struct Stream {
    out: Box<dyn Write>,
    flush_level: Level,
}

impl Stream {
    pub fn new(out: Box<dyn Write>) -> Stream {
        Stream {
            out,
            flush_level: Level::Version,
        }
    }

    pub fn set_flush_level(&mut self, level: Level) {
        self.flush_level = level;
    }
}

impl Sink for Stream {
    fn handle(&mut self, level: Level, line: &str) {
        if let Err(error) = writeln!(self.out, "{}", line) {
            debug!(?error);
        }
        if level <= self.flush_level {
            if let Err(error) = self
                .out
                .flush()
            {
                debug!(?error);
            }
        }
    }

    fn flush(&mut self) {
        if let Err(error) = self
            .out
            .flush()
        {
            debug!(?error);
        }
    }
}
