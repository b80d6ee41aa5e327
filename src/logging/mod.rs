//! Level-tagged logging with placeholder-driven line layouts
//!
//! This is a sibling of the templating engine, not a client of it: message
//! bodies arrive already rendered by `std::fmt`, and the line layout is
//! filled in by literal find-and-replace of the `__WORD__` placeholders.
//! There is no process-wide default logger; construct one and pass it by
//! reference to whatever needs it.

mod sink;

pub use sink::{Console, FileSink, Sink, Stream};

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

/// The eight message severities, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Fatal,
    Error,
    Warning,
    Success,
    Debug,
    Trace,
    Info,
    Version,
}

pub const LEVELS: usize = 8;

impl Level {
    /// The fixed-width label substituted for `__TYPE__`.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Fatal => "FATAL  ",
            Level::Error => "ERROR  ",
            Level::Warning => "WARNING",
            Level::Success => "SUCCESS",
            Level::Debug => "DEBUG  ",
            Level::Trace => "TRACE  ",
            Level::Info => "INFO   ",
            Level::Version => "VERSION",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

const DEFAULT_LAYOUT: &str = "[__TYPE__] <__DATE_TIME__> (__FILE__:__FUNC__:__LINE__) __BODY__";

/// A logging context: one line layout per level and a sink to hand
/// finished lines to.
pub struct Logger {
    layouts: [String; LEVELS],
    sink: Box<dyn Sink>,
}

impl Logger {
    /// A logger writing colored lines to standard output.
    pub fn console() -> Logger {
        Logger::with_sink(Box::new(Console::new(true)))
    }

    /// A logger appending to the given file, opened on first use.
    pub fn file(path: impl Into<PathBuf>) -> Logger {
        Logger::with_sink(Box::new(FileSink::new(path.into())))
    }

    /// A logger writing to an arbitrary stream.
    pub fn stream(writer: impl Write + 'static) -> Logger {
        Logger::with_sink(Box::new(Stream::new(Box::new(writer))))
    }

    pub fn with_sink(sink: Box<dyn Sink>) -> Logger {
        Logger {
            layouts: std::array::from_fn(|_| DEFAULT_LAYOUT.to_string()),
            sink,
        }
    }

    /// Replace the line layout used for one level.
    pub fn set_layout(&mut self, level: Level, layout: &str) {
        self.layouts[level.index()] = layout.to_string();
    }

    /// Replace the line layout used for every level.
    pub fn set_layout_all(&mut self, layout: &str) {
        for slot in self
            .layouts
            .iter_mut()
        {
            *slot = layout.to_string();
        }
    }

    /// Emit one message. Callers normally reach this through the level
    /// macros, which capture the file, module, and line for them.
    pub fn log(&mut self, level: Level, body: fmt::Arguments, file: &str, function: &str, line: u32) {
        let body = body.to_string();
        let rendered = substitute(
            &self.layouts[level.index()],
            level,
            &body,
            file,
            function,
            line,
        );
        self.sink
            .handle(level, &rendered);
    }

    pub fn flush(&mut self) {
        self.sink
            .flush();
    }
}

/// Fill a layout in by literal find-and-replace of the named placeholders.
fn substitute(
    layout: &str,
    level: Level,
    body: &str,
    file: &str,
    function: &str,
    line: u32,
) -> String {
    let now = Local::now();
    layout
        .replace("__TYPE__", level.label())
        .replace("__FILE__", file)
        .replace("__FUNC__", function)
        .replace("__LINE__", &line.to_string())
        .replace("__BODY__", body)
        .replace(
            "__DATE_TIME__",
            &now.format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        )
        .replace(
            "__DATE__",
            &now.format("%Y-%m-%d")
                .to_string(),
        )
        .replace(
            "__TIME__",
            &now.format("%H:%M:%S")
                .to_string(),
        )
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logging::Level::Fatal, format_args!($($arg)*), file!(), module_path!(), line!())
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logging::Level::Error, format_args!($($arg)*), file!(), module_path!(), line!())
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logging::Level::Warning, format_args!($($arg)*), file!(), module_path!(), line!())
    };
}

#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logging::Level::Success, format_args!($($arg)*), file!(), module_path!(), line!())
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logging::Level::Debug, format_args!($($arg)*), file!(), module_path!(), line!())
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logging::Level::Trace, format_args!($($arg)*), file!(), module_path!(), line!())
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logging::Level::Info, format_args!($($arg)*), file!(), module_path!(), line!())
    };
}

#[macro_export]
macro_rules! version {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logging::Level::Version, format_args!($($arg)*), file!(), module_path!(), line!())
    };
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn placeholders_are_replaced_literally() {
        let rendered = substitute(
            "[__TYPE__] __FILE__:__FUNC__:__LINE__ __BODY__",
            Level::Warning,
            "look out",
            "src/job.rs",
            "job::runner",
            40,
        );
        assert_eq!(rendered, "[WARNING] src/job.rs:job::runner:40 look out");
    }

    #[test]
    fn unknown_placeholders_left_alone() {
        let rendered = substitute("__WHAT__ __BODY__", Level::Info, "hi", "f", "m", 1);
        assert_eq!(rendered, "__WHAT__ hi");
    }

    #[test]
    fn repeated_placeholders_all_replaced() {
        let rendered = substitute("__BODY__ __BODY__", Level::Info, "x", "f", "m", 1);
        assert_eq!(rendered, "x x");
    }

    #[test]
    fn labels_are_fixed_width() {
        for level in [
            Level::Fatal,
            Level::Error,
            Level::Warning,
            Level::Success,
            Level::Debug,
            Level::Trace,
            Level::Info,
            Level::Version,
        ] {
            assert_eq!(
                level
                    .label()
                    .len(),
                7
            );
        }
    }

    #[test]
    fn severity_ordering() {
        assert!(Level::Fatal < Level::Warning);
        assert!(Level::Debug > Level::Error);
    }
}
