use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

/// Where `PARAMETER` values come from.
///
/// `read_line` may block until a line is available. It returns `Ok(None)`
/// once the source is exhausted and `Err` when reading itself failed; the
/// runtime reports both as fatal, but as different errors.
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, such as stdin or a file.
///
/// A trailing `\n`, `\r\n` or bare `\r` is stripped. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
pub struct BufReadSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        BufReadSource { reader }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = vec![];

        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// A fixed queue of lines, consumed front to back.
#[derive(Debug, Default, Clone)]
pub struct QueuedInput {
    lines: VecDeque<String>,
}

impl QueuedInput {
    pub fn new() -> Self {
        QueuedInput::default()
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl<S: Into<String>> FromIterator<S> for QueuedInput {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        QueuedInput {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for QueuedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
