pub use crate::errors::{ErrorCategory, ErrorKind, ParseError};
pub use crate::parser::parse;
pub use crate::span::Span;

pub mod errors;
pub mod legacy;
pub mod parser;
pub mod span;
