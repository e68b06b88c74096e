use super::{token::*, Column};

pub fn lex(s: &str) -> Vec<(Column, Token)> {
    KokoroLexer {
        chars: s.char_indices().peekable(),
        len: s.len(),
    }
    .collect()
}

fn is_kokoro_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_kokoro_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_kokoro_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_kokoro_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut Chars<'a>;
    fn end(&self) -> usize;

    fn offset(&mut self) -> usize {
        let end = self.end();
        match self.chars().peek() {
            Some((idx, _)) => *idx,
            None => end,
        }
    }

    fn run(&mut self, keep: fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Some((_, ch)) = self.chars().peek() {
            if !keep(*ch) {
                break;
            }
            s.push(*ch);
            self.chars().next();
        }
        s
    }

    fn number(&mut self) -> Token {
        Token::Number(self.run(is_kokoro_word))
    }

    fn word(&mut self) -> Token {
        Token::Word(self.run(is_kokoro_word))
    }

    fn text(&mut self) -> Token {
        let mut s = String::new();
        self.chars().next();
        while let Some((_, ch)) = self.chars().next() {
            if ch == '"' {
                return Token::Text(s);
            }
            s.push(ch);
        }
        Token::Unknown(format!("\"{}", s))
    }

    fn apostrophe(&mut self) -> Token {
        self.chars().next();
        let mut ahead = self.chars().clone();
        if let Some((_, 's')) = ahead.next() {
            match ahead.peek() {
                Some((_, ch)) if is_kokoro_word(*ch) => {}
                _ => {
                    self.chars().next();
                    return Token::Possessive;
                }
            }
        }
        Token::Unknown("'".to_string())
    }

    fn minutia(&mut self, ch: char) -> Token {
        self.chars().next();
        match ch {
            ',' => Token::Comma,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '+' | '-' | '*' | '/' | '%' => Token::Operator(ch),
            _ => Token::Unknown(ch.to_string()),
        }
    }
}

struct KokoroLexer<'a> {
    chars: Chars<'a>,
    len: usize,
}

impl<'a> Tokenizers<'a> for KokoroLexer<'a> {
    fn chars(&mut self) -> &mut Chars<'a> {
        &mut self.chars
    }
    fn end(&self) -> usize {
        self.len
    }
}

impl<'a> Iterator for KokoroLexer<'a> {
    type Item = (Column, Token);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((_, pk)) = self.chars.peek() {
            if !is_kokoro_whitespace(*pk) {
                break;
            }
            self.chars.next();
        }
        let (start, pk) = *self.chars.peek()?;
        let token = if is_kokoro_digit(pk) {
            self.number()
        } else if is_kokoro_word_start(pk) {
            self.word()
        } else if pk == '"' {
            self.text()
        } else if pk == '\'' {
            self.apostrophe()
        } else {
            self.minutia(pk)
        };
        let end = self.offset();
        Some((start..end, token))
    }
}
