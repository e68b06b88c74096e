/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the Kokoro language.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use line::Source;
pub use parse::parse;
pub use token::Token;

pub mod ast;

/// Character range of a token within a normalized line.
pub type Column = std::ops::Range<usize>;

/// One-based position of a line in the source. `None` for synthesized lines.
pub type LineNumber = Option<usize>;

/// Longest accepted source line.
pub const MAX_LINE_LEN: usize = 255;

#[cfg(test)]
mod tests;
