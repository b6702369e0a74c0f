pub const DEFAULT_LABEL: &str = "(Unknown)";

/// How to treat a parameter whose value is empty and ends the stream, e.g. a
/// last line `key=` without a line terminator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TrailingValue {
    /// Report an empty [`Value`](super::EventKind::Value).
    #[default]
    Accept,
    /// Report an "end of file" error.
    Reject,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParserOptions {
    pub(crate) label: String,
    pub(crate) trailing_value: TrailingValue,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_owned(),
            trailing_value: TrailingValue::default(),
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name error messages are prefixed with (usually the file name).
    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    pub fn trailing_value(mut self, trailing_value: TrailingValue) -> Self {
        self.trailing_value = trailing_value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.label, "(Unknown)");
        assert_eq!(options.trailing_value, TrailingValue::Accept);
    }

    #[test]
    fn test_setters_chain() {
        let options = ParserOptions::new()
            .label("foo.ini")
            .trailing_value(TrailingValue::Reject);
        assert_eq!(options.label, "foo.ini");
        assert_eq!(options.trailing_value, TrailingValue::Reject);
    }
}
