use super::ast::*;
use super::*;

mod lex_test;
mod parse_test;

fn parse_str(s: &str) -> Result<Statement, Error> {
    parse(&Line::new(Some(1), s))
}
