use std::fmt::Display;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EventKind {
    Section,
    Name,
    Value,
    Error,
    #[default]
    End,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Section => "SECTION",
            EventKind::Name => "NAME",
            EventKind::Value => "VALUE",
            EventKind::Error => "ERROR",
            EventKind::End => "END",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of parser output.
///
/// The caller owns the event and hands it to [`Parser::advance()`](super::Parser::advance)
/// to be filled in. The same event can be reused across calls.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Event {
    pub(crate) kind: EventKind,
    pub(crate) text: String,
}

impl Event {
    pub fn new<S: Into<String>>(kind: EventKind, text: S) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn end() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Section name, parameter name, parameter value or error message.
    /// Empty for [`EventKind::End`].
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub(crate) fn set(&mut self, kind: EventKind, text: String) {
        self.kind = kind;
        self.text = text;
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "event{{{}, \"{}\"}}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod eq {
        use super::*;

        #[test]
        fn test_same_kind_and_text_are_equal() {
            assert_eq!(
                Event::new(EventKind::Section, "foo"),
                Event::new(EventKind::Section, String::from("foo"))
            );
        }

        #[test]
        fn test_different_kind_is_not_equal() {
            assert_ne!(
                Event::new(EventKind::Name, "foo"),
                Event::new(EventKind::Value, "foo")
            );
        }

        #[test]
        fn test_different_text_is_not_equal() {
            assert_ne!(
                Event::new(EventKind::Value, "foo"),
                Event::new(EventKind::Value, "foo ")
            );
        }

        #[test]
        fn test_default_is_end() {
            assert_eq!(Event::default(), Event::new(EventKind::End, ""));
            assert_eq!(Event::end().kind(), EventKind::End);
            assert_eq!(Event::end().text(), "");
        }
    }

    mod into_text {
        use super::*;

        #[test]
        fn test_hands_out_text() {
            let event = Event::new(EventKind::Value, "значение");
            assert_eq!(event.into_text(), String::from("значение"));
            assert_eq!(Event::end().into_text(), "");
        }
    }

    mod fmt {
        use super::*;

        #[test]
        fn test_renders_kind_and_quoted_text() {
            let event = Event::new(EventKind::Section, "section 2");
            assert_eq!(event.to_string(), "event{SECTION, \"section 2\"}");
        }

        #[test]
        fn test_renders_end_with_empty_text() {
            assert_eq!(Event::end().to_string(), "event{END, \"\"}");
        }

        #[test]
        fn test_kind_names() {
            assert_eq!(EventKind::Section.to_string(), "SECTION");
            assert_eq!(EventKind::Name.to_string(), "NAME");
            assert_eq!(EventKind::Value.to_string(), "VALUE");
            assert_eq!(EventKind::Error.to_string(), "ERROR");
            assert_eq!(EventKind::End.to_string(), "END");
        }
    }
}
