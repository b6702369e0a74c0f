use log::{debug, trace};

use super::*;

// C-style `isspace()`, i.e. including vertical tab and form feed
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn is_blank(c: char) -> bool {
    is_space(c) && !matches!(c, '\n' | '\r')
}

fn trim_end(mut s: String) -> String {
    let len = s.trim_end_matches(is_space).len();
    s.truncate(len);
    s
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    General,
    Section,
    ParamName,
    ParamValue,
    End,
}

/// Pull parser producing a flat stream of [`Event`]s from INI text.
///
/// The parser borrows its [`CharSource`] exclusively for its whole lifetime and
/// never reads past what it needs for the next event. It is not reentrant.
///
/// ```
/// use ini_pull::{Event, EventKind, Parser, StrSource};
///
/// let mut src = StrSource::new("[server]\nport = 8080\n");
/// let mut parser = Parser::new(&mut src);
/// let mut event = Event::default();
///
/// assert!(parser.advance(&mut event));
/// assert_eq!(event, Event::new(EventKind::Section, "server"));
/// assert!(parser.advance(&mut event));
/// assert_eq!(event, Event::new(EventKind::Name, "port"));
/// assert!(parser.advance(&mut event));
/// assert_eq!(event, Event::new(EventKind::Value, "8080"));
/// assert!(!parser.advance(&mut event));
/// assert_eq!(event.kind(), EventKind::End);
/// ```
#[derive(Debug)]
pub struct Parser<'a, S: CharSource + ?Sized> {
    source: &'a mut S,
    options: ParserOptions,
    mode: Mode,
    line: usize,
    column: usize,
    error: Option<ParseError>,
}

impl<'a, S: CharSource + ?Sized> Parser<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    pub fn with_label<L: Into<String>>(source: &'a mut S, label: L) -> Self {
        Self::with_options(source, ParserOptions::default().label(label))
    }

    pub fn with_options(source: &'a mut S, options: ParserOptions) -> Self {
        Self {
            source,
            options,
            mode: Mode::General,
            line: 0,
            column: 0,
            error: None,
        }
    }

    /// Reads the next event into `event`.
    ///
    /// Returns `true` if a section, name or value was read. Returns `false` for errors
    /// and the end of the stream. After that every further call reports
    /// [`EventKind::End`].
    pub fn advance(&mut self, event: &mut Event) -> bool {
        match self.mode {
            Mode::General => self.advance_general(event),
            Mode::Section => self.advance_section(event),
            Mode::ParamName => self.advance_param_name(event),
            Mode::ParamValue => self.advance_param_value(event),
            Mode::End => self.advance_end(event),
        }
    }

    /// Iterates over the remaining events. A final error is yielded, the end of the
    /// stream is not.
    pub fn events(&mut self) -> Events<'_, 'a, S> {
        Events {
            parser: self,
            done: false,
        }
    }

    /// The error reported by this parser, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.mode == Mode::End
    }

    pub fn label(&self) -> &str {
        self.options.label.as_str()
    }

    /// Current 0-based `(line, column)`.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn advance_general(&mut self, event: &mut Event) -> bool {
        loop {
            match self.bump() {
                None => return self.advance_end(event),
                Some('\r') => {
                    self.check_lf();
                    self.new_line();
                }
                Some('\n') => self.new_line(),
                Some(';') => {
                    if !self.skip_comment() {
                        return self.advance_end(event);
                    }
                }
                Some('[') => {
                    self.mode = Mode::Section;
                    return self.advance_section(event);
                }
                Some(c) if is_space(c) => {}
                Some(c) if c.is_ascii_alphanumeric() => {
                    self.put_back(c);
                    self.mode = Mode::ParamName;
                    return self.advance_param_name(event);
                }
                Some(c) => return self.fail(event, Unexpected::Symbol(c)),
            }
        }
    }

    // SECTION = '[' BLANK* ANY+ ']'
    fn advance_section(&mut self, event: &mut Event) -> bool {
        self.skip_blanks();

        let mut name = String::new();
        loop {
            match self.bump() {
                None => return self.fail(event, Unexpected::EndOfFile),
                Some(';') => return self.fail(event, Unexpected::Comment),
                Some('\r' | '\n') => return self.fail(event, Unexpected::EndOfLine),
                Some(']') => {
                    if name.is_empty() {
                        return self.fail(event, Unexpected::CloseBracket);
                    }
                    return self.emit(event, EventKind::Section, name, Mode::General);
                }
                Some(c) => name.push(c),
            }
        }
    }

    // NAME = ALNUM ANY* '='
    fn advance_param_name(&mut self, event: &mut Event) -> bool {
        let mut name = String::new();
        loop {
            match self.bump() {
                None => return self.fail(event, Unexpected::EndOfFile),
                Some(';') => return self.fail(event, Unexpected::Comment),
                Some('\r' | '\n') => return self.fail(event, Unexpected::NewLine),
                Some('=') => return self.emit(event, EventKind::Name, name, Mode::ParamValue),
                Some(c) => name.push(c),
            }
        }
    }

    // VALUE = BLANK* ANY* [COMMENT] (NL | EOF)
    fn advance_param_value(&mut self, event: &mut Event) -> bool {
        self.skip_blanks();

        let mut value = String::new();
        loop {
            match self.bump() {
                None => {
                    if value.is_empty() && self.options.trailing_value == TrailingValue::Reject {
                        return self.fail(event, Unexpected::EndOfFile);
                    }
                    return self.emit(event, EventKind::Value, value, Mode::End);
                }
                Some('\r') => {
                    self.check_lf();
                    self.new_line();
                    return self.emit(event, EventKind::Value, value, Mode::General);
                }
                Some('\n') => {
                    self.new_line();
                    return self.emit(event, EventKind::Value, value, Mode::General);
                }
                Some(';') => {
                    let next = if self.skip_comment() {
                        Mode::General
                    } else {
                        Mode::End
                    };
                    return self.emit(event, EventKind::Value, value, next);
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn advance_end(&mut self, event: &mut Event) -> bool {
        if self.mode != Mode::End {
            debug!("{}: reached end of stream", self.options.label);
            self.mode = Mode::End;
        }
        event.set(EventKind::End, String::new());
        false
    }

    fn emit(&mut self, event: &mut Event, kind: EventKind, text: String, next: Mode) -> bool {
        event.set(kind, trim_end(text));
        trace!("{}: {event}", self.options.label);

        if next == Mode::End {
            debug!("{}: reached end of stream", self.options.label);
        }
        self.mode = next;
        true
    }

    #[cold]
    fn fail(&mut self, event: &mut Event, unexpected: Unexpected) -> bool {
        let error = ParseError {
            label: self.options.label.clone(),
            line: self.line,
            column: self.column,
            unexpected,
        };
        debug!("{error}");

        event.set(EventKind::Error, error.to_string());
        self.error = Some(error);
        self.mode = Mode::End;
        false
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.source.next_char();
        if c.is_some() {
            self.column += 1;
        }
        c
    }

    fn put_back(&mut self, c: char) {
        self.source.put_back(c);
        self.column = self.column.saturating_sub(1);
    }

    // consumes the '\n' of a "\r\n" pair
    fn check_lf(&mut self) {
        match self.bump() {
            Some('\n') | None => {}
            Some(c) => self.put_back(c),
        }
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    fn skip_blanks(&mut self) {
        while let Some(c) = self.bump() {
            if !is_blank(c) {
                self.put_back(c);
                break;
            }
        }
    }

    /// Skips the rest of the line including the line terminator.
    /// Returns `false` if the stream ended first.
    fn skip_comment(&mut self) -> bool {
        loop {
            match self.bump() {
                None => return false,
                Some('\r') => {
                    self.check_lf();
                    self.new_line();
                    return true;
                }
                Some('\n') => {
                    self.new_line();
                    return true;
                }
                Some(_) => {}
            }
        }
    }
}

pub struct Events<'p, 'a, S: CharSource + ?Sized> {
    parser: &'p mut Parser<'a, S>,
    done: bool,
}

impl<S: CharSource + ?Sized> Iterator for Events<'_, '_, S> {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut event = Event::default();
        if self.parser.advance(&mut event) {
            return Some(event);
        }

        self.done = true;
        match event.kind() {
            EventKind::Error => Some(event),
            _ => None,
        }
    }
}
