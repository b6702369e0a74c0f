use std::io::{self, Read};
use std::str::Chars;

use log::warn;

/// A character stream with a single character of pushback.
///
/// Returning `None` from [`next_char()`](CharSource::next_char) signals the end of the
/// stream. Once a source has reported the end of the stream it must keep doing so.
pub trait CharSource {
    fn next_char(&mut self) -> Option<char>;

    /// Pushes `c` back so the next call to [`next_char()`](CharSource::next_char)
    /// returns it again. Only the most recently read character may be pushed back.
    fn put_back(&mut self, c: char);
}

#[derive(Debug)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
    pushed: Option<char>,
}

impl<'a> StrSource<'a> {
    pub fn new(buf: &'a str) -> Self {
        Self {
            chars: buf.chars(),
            pushed: None,
        }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(buf: &'a str) -> Self {
        Self::new(buf)
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Option<char> {
        self.pushed.take().or_else(|| self.chars.next())
    }

    fn put_back(&mut self, c: char) {
        debug_assert!(self.pushed.is_none(), "only one character of pushback");
        self.pushed = Some(c);
    }
}

/// Decodes UTF-8 from `R` one character at a time.
///
/// Invalid or truncated sequences come through as `U+FFFD`. I/O errors end the
/// stream; the first one is kept for inspection.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    pushed: Option<char>,
    // a byte that turned out not to continue the previous sequence
    pending: Option<u8>,
    exhausted: bool,
    error: Option<io::Error>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushed: None,
            pending: None,
            exhausted: false,
            error: None,
        }
    }

    /// The I/O error that ended the stream, if it didn't end cleanly.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_byte(&mut self) -> Option<u8> {
        if let Some(b) = self.pending.take() {
            return Some(b);
        }
        if self.exhausted {
            return None;
        }

        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => break,
                Ok(_) => return Some(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("treating read error as end of stream: {e}");
                    self.error = Some(e);
                    break;
                }
            }
        }
        self.exhausted = true;
        None
    }

    fn read_char(&mut self) -> Option<char> {
        let lead = self.read_byte()?;
        let len = match lead {
            0x00..=0x7F => return Some(char::from(lead)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => {
                warn!("replacing invalid UTF-8 lead byte {lead:#04x}");
                return Some(char::REPLACEMENT_CHARACTER);
            }
        };

        let mut buf = [lead, 0, 0, 0];
        for i in 1..len {
            match self.read_byte() {
                Some(b) if b & 0xC0 == 0x80 => buf[i] = b,
                Some(b) => {
                    warn!("replacing truncated UTF-8 sequence");
                    self.pending = Some(b);
                    return Some(char::REPLACEMENT_CHARACTER);
                }
                None => {
                    warn!("replacing UTF-8 sequence cut off by end of stream");
                    return Some(char::REPLACEMENT_CHARACTER);
                }
            }
        }

        match std::str::from_utf8(&buf[..len]) {
            Ok(s) => s.chars().next(),
            Err(e) => {
                warn!("replacing invalid UTF-8 sequence: {e}");
                Some(char::REPLACEMENT_CHARACTER)
            }
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        match self.pushed.take() {
            Some(c) => Some(c),
            None => self.read_char(),
        }
    }

    fn put_back(&mut self, c: char) {
        debug_assert!(self.pushed.is_none(), "only one character of pushback");
        self.pushed = Some(c);
    }
}
