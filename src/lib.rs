//! Pull parser for INI configuration text.
//!
//! [`Parser`] turns a character stream into a flat sequence of [`Event`]s
//! (section headers, parameter names, parameter values, errors and the end of
//! the stream) without building a document in memory. Callers pull one event at
//! a time with [`Parser::advance()`].
//!
//! ```text
//! [section]        ; SECTION "section"
//! name = value     ; NAME "name", VALUE "value"
//! ```

mod ini;

pub use self::ini::*;
