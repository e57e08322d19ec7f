//! Line-oriented console I/O.
//!
//! The menu talks to the user only through [`Console`], so it runs the same
//! against a terminal and against scripted input in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// A line-oriented text console.
pub trait Console {
    /// Reads one line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read. Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes `text` as-is and flushes, so prompts show before input is read.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// [`Console`] over any buffered reader and writer.
///
/// # Example
///
/// ```rust,ignore
/// use dnslookup::console::{Console, IoConsole};
/// use std::io::Cursor;
///
/// let mut console = IoConsole::new(Cursor::new("3\n"), Vec::new());
/// assert_eq!(console.read_line()?, Some("3".to_owned()));
/// ```
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl IoConsole<StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output.
    ///
    /// Holds the stdin lock until dropped.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_until_eof() {
        let mut console = IoConsole::new(Cursor::new("1\r\nwww.example.com\nlast"), Vec::new());

        assert_eq!(console.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("www.example.com"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_eof() {
        let mut console = IoConsole::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let input = b"caf\xe9.example\r\n3\n".to_vec();
        let mut console = IoConsole::new(Cursor::new(input), Vec::new());

        assert_eq!(
            console.read_line().unwrap().as_deref(),
            Some("caf\u{FFFD}.example")
        );
        assert_eq!(console.read_line().unwrap().as_deref(), Some("3"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_write_and_write_line() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        console.write("Enter choice: ").unwrap();
        console.write_line("Exiting!!!").unwrap();

        let (_, out) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Enter choice: Exiting!!!\n");
    }
}
