//! Input sources the prompt engine reads answers from

use dialoguer::console::Term;
use std::io::{self, BufRead};

/// Abstraction over where answers come from.
///
/// `Ok(None)` signals end of input. Returned lines carry no trailing newline.
pub trait InputSource {
    /// Reads one line of text.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Reads one line without echoing it back to the user.
    ///
    /// Sources that cannot suppress echo fall back to [`InputSource::read_line`].
    fn read_secret(&mut self) -> io::Result<Option<String>> {
        self.read_line()
    }
}

/// Strips the line terminator `read_line` leaves in place.
fn chomp(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(chomp(line)))
}

/// Process stdin, with echo-free secret input through the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_from(&mut io::stdin().lock())
    }

    fn read_secret(&mut self) -> io::Result<Option<String>> {
        let term = Term::stderr();
        if !term.is_term() {
            return self.read_line();
        }
        term.read_secure_line().map(Some)
    }
}

/// Any buffered reader, e.g. a file, a pipe or an in-memory cursor.
#[derive(Debug)]
pub struct BufReadSource<R> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> InputSource for BufReadSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_from(&mut self.reader)
    }
}
