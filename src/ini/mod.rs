mod error;
mod event;
mod options;
mod parser;
mod source;

pub use self::error::*;
pub use self::event::*;
pub use self::options::*;
pub use self::parser::*;
pub use self::source::*;
