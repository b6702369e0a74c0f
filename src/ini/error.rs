use std::fmt::Display;

/// What the parser ran into when it gave up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unexpected {
    Symbol(char),
    Comment,
    EndOfLine,
    EndOfFile,
    NewLine,
    CloseBracket,
}

impl Display for Unexpected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unexpected::Symbol(c) => write!(f, "symbol '{c}'"),
            Unexpected::Comment => f.write_str("comment"),
            Unexpected::EndOfLine => f.write_str("end of line"),
            Unexpected::EndOfFile => f.write_str("end of file"),
            Unexpected::NewLine => f.write_str("new line"),
            Unexpected::CloseBracket => f.write_str("]"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{label}:{line}:{column}: Unexpected {unexpected}")]
pub struct ParseError {
    pub(crate) label: String,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) unexpected: Unexpected,
}

impl ParseError {
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn unexpected(&self) -> Unexpected {
        self.unexpected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod fmt {
        use super::*;

        fn error(unexpected: Unexpected) -> ParseError {
            ParseError {
                label: "test.ini".into(),
                line: 3,
                column: 7,
                unexpected,
            }
        }

        #[test]
        fn test_unexpected_alone() {
            assert_eq!(Unexpected::Symbol('=').to_string(), "symbol '='");
            assert_eq!(Unexpected::NewLine.to_string(), "new line");
            assert_eq!(Unexpected::CloseBracket.to_string(), "]");
        }

        #[test]
        fn test_symbol() {
            assert_eq!(
                error(Unexpected::Symbol('!')).to_string(),
                "test.ini:3:7: Unexpected symbol '!'"
            );
        }

        #[test]
        fn test_descriptions() {
            assert_eq!(error(Unexpected::Comment).to_string(), "test.ini:3:7: Unexpected comment");
            assert_eq!(
                error(Unexpected::EndOfLine).to_string(),
                "test.ini:3:7: Unexpected end of line"
            );
            assert_eq!(
                error(Unexpected::EndOfFile).to_string(),
                "test.ini:3:7: Unexpected end of file"
            );
            assert_eq!(error(Unexpected::NewLine).to_string(), "test.ini:3:7: Unexpected new line");
            assert_eq!(error(Unexpected::CloseBracket).to_string(), "test.ini:3:7: Unexpected ]");
        }
    }
}
