//! Interactive prompt engine
//!
//! [`Prompt`] owns one input source and one output sink and runs a single
//! exchange at a time: render the question, read a line, normalise it, then
//! validate or parse it. Rejected answers are explained and the question is
//! asked again; there is no retry limit, the loop ends on an accepted answer
//! or when the input source fails or runs dry.
//!
//! The module is structured in layers:
//! - `interface`: prompt descriptions built by callers
//! - `source`: input sources (stdin, any `BufRead`)
//! - `text`, `confirmation`, `choice`: the retry loops per prompt kind

use crate::{
    constants::LOG_TARGET,
    error::{Error, Result},
};
use log::{Level, Log, Record};
use std::{
    fmt,
    io::{self, Write},
};

pub mod choice;
pub mod confirmation;
pub mod interface;
pub mod source;
pub mod text;

pub use interface::*;
pub use source::{BufReadSource, InputSource, StdinSource};

/// Prompt engine reading the process stdin and writing to stderr, which
/// keeps stdout free for the answers document.
pub type StdPrompt = Prompt<StdinSource, io::Stderr>;

/// Runs prompts against an input source and an output sink.
pub struct Prompt<I, W> {
    input: I,
    output: W,
    logger: &'static dyn Log,
}

impl StdPrompt {
    pub fn stdio() -> Self {
        Self::new(StdinSource, io::stderr())
    }
}

impl<I: InputSource, W: Write> Prompt<I, W> {
    /// Creates an engine that logs through the process-wide logger.
    pub fn new(input: I, output: W) -> Self {
        Self { input, output, logger: log::logger() }
    }

    /// Replaces the logger diagnostics are sent to.
    pub fn with_logger(mut self, logger: &'static dyn Log) -> Self {
        self.logger = logger;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }

    /// Writes text to the sink and flushes it.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes the `✗` diagnostic shown before a question is repeated.
    fn reject(&mut self, message: &str) -> Result<()> {
        self.write(&format!("  ✗ {message}\n"))
    }

    fn read_line(&mut self) -> Result<String> {
        let line = self.input.read_line()?.ok_or(Error::EndOfInput)?;
        self.log(Level::Trace, format_args!("read {line:?}"));
        Ok(line)
    }

    fn read_secret(&mut self) -> Result<String> {
        self.input.read_secret()?.ok_or(Error::EndOfInput)
    }

    /// Sends a record to the injected logger.
    pub(crate) fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.logger.log(
            &Record::builder()
                .args(args)
                .level(level)
                .target(LOG_TARGET)
                .module_path(Some(module_path!()))
                .build(),
        );
    }

    /// Records an answer the loop refused.
    fn log_rejection(&self, message: &str, attempt: usize, reason: &str) {
        self.log(
            Level::Debug,
            format_args!("prompt {message:?} attempt {attempt} rejected: {reason}"),
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use log::Metadata;
    use std::io::Cursor;
    use std::sync::Mutex;

    pub type TestSource = BufReadSource<Cursor<String>>;
    pub type TestPrompt = Prompt<TestSource, Vec<u8>>;

    /// Engine fed with the given lines, each terminated by a newline.
    pub fn prompt_with(lines: &[&str]) -> TestPrompt {
        let mut input = lines.join("\n");
        if !lines.is_empty() {
            input.push('\n');
        }
        Prompt::new(BufReadSource::new(Cursor::new(input)), Vec::new())
    }

    pub fn output_of(prompt: &TestPrompt) -> String {
        String::from_utf8_lossy(prompt.output()).into_owned()
    }

    /// Logger that keeps every record as `"{target} {level} {message}"`.
    pub struct CaptureLogger {
        records: Mutex<Vec<String>>,
    }

    impl CaptureLogger {
        pub const fn new() -> Self {
            Self { records: Mutex::new(Vec::new()) }
        }

        pub fn records(&self) -> Vec<String> {
            self.records.lock().unwrap().clone()
        }
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.records
                .lock()
                .unwrap()
                .push(format!("{} {} {}", record.target(), record.level(), record.args()));
        }

        fn flush(&self) {}
    }
}
