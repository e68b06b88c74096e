use super::lex::*;
use super::token::*;
use super::{Column, LineNumber};

/// A source line, trimmed and lowercased outside of string literals.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    text: String,
    tokens: Vec<(Column, Token)>,
}

impl Line {
    pub fn new(number: LineNumber, s: &str) -> Line {
        let text = normalize(s);
        let tokens = lex(&text);
        Line {
            number,
            text,
            tokens,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[(Column, Token)] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Blank lines and `#` comments produce no code.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() || self.text.starts_with('#')
    }

    pub fn is_block_end(&self) -> bool {
        self.text.starts_with('}')
    }

    pub fn keyword(&self) -> Option<&str> {
        match self.tokens.first() {
            Some((_, Token::Word(w))) => Some(w),
            _ => None,
        }
    }

    pub fn slice(&self, col: &Column) -> &str {
        self.text.get(col.clone()).unwrap_or("").trim()
    }
}

/// Numbers raw text lines from one as they are pulled.
pub struct Source<I> {
    lines: I,
    number: usize,
}

impl<I> Source<I> {
    pub fn new(lines: I) -> Source<I> {
        Source { lines, number: 0 }
    }
}

impl<I> Iterator for Source<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let raw = self.lines.next()?;
        self.number += 1;
        Some(Line::new(Some(self.number), raw.as_ref()))
    }
}

fn normalize(s: &str) -> String {
    let s = match s.find('\r') {
        Some(cr) => &s[..cr],
        None => s,
    };
    let mut quoted = false;
    s.trim()
        .chars()
        .map(|ch| {
            if ch == '"' {
                quoted = !quoted;
            }
            if quoted {
                ch
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
