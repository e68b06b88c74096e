use super::{ast::*, token::*, Column, Error, Line, MAX_LINE_LEN};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(line: &Line) -> Result<Statement> {
    if line.len() > MAX_LINE_LEN {
        return Err(error!(LineBufferOverflow, line.number()));
    }
    match Parser::parse(line) {
        Err(e) => Err(e.in_line_number(line.number())),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    line: &'a Line,
    tokens: &'a [(Column, Token)],
    pos: usize,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(line: &'a Line) -> Result<Statement> {
        let mut parse = Parser {
            line,
            tokens: line.tokens(),
            pos: 0,
            col: 0..0,
        };
        let keyword = match parse.next() {
            Some(Token::Word(word)) => word.as_str(),
            _ => return Ok(Statement::Unknown),
        };
        Statement::for_keyword(&mut parse, keyword)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let tokens = self.tokens;
        match tokens.get(self.pos) {
            Some((col, token)) => {
                self.pos += 1;
                self.col = col.clone();
                Some(token)
            }
            None => {
                self.col = self.col.end..self.col.end;
                None
            }
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        let tokens = self.tokens;
        tokens.get(self.pos).map(|(_, t)| t)
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    /// True if `pattern` appears anywhere in the line as adjacent tokens.
    fn contains(&self, pattern: &[Token]) -> bool {
        self.tokens
            .windows(pattern.len())
            .any(|w| w.iter().map(|(_, t)| t).eq(pattern.iter()))
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError, ..&self.column();
            match token {
                Word(w) => match w.as_str() {
                    "in" => "EXPECTED IN",
                    "as" => "EXPECTED AS",
                    "is" => "EXPECTED IS",
                    "do" => "EXPECTED DO",
                    "array" => "EXPECTED ARRAY",
                    "value" => "EXPECTED VALUE",
                    "memory" => "EXPECTED MEMORY",
                    _ => "EXPECTED RESERVED WORD",
                },
                Possessive => "EXPECTED 'S",
                Comma => "EXPECTED COMMA",
                LBracket => "EXPECTED LEFT BRACKET",
                RBracket => "EXPECTED RIGHT BRACKET",
                LBrace => "EXPECTED LEFT BRACE",
                RBrace => "EXPECTED RIGHT BRACE",
                Unknown(_) | Number(_) | Text(_) | Operator(_) => "UNEXPECTED TOKEN",
            }
        ))
    }

    fn expect_word(&mut self, word: &str) -> Result<()> {
        self.expect(Token::Word(word.to_string()))
    }

    fn end(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(_) => Err(error!(SyntaxError, ..&self.column(); "UNEXPECTED TOKEN")),
        }
    }

    /// The optional `as <type>` tail. The type is accepted and ignored.
    fn type_suffix(&mut self) -> Result<()> {
        if let Some(t) = self.peek() {
            if t.is_word("as") {
                self.next();
                match self.next() {
                    Some(Token::Word(_)) => {}
                    _ => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED TYPE")),
                }
            }
        }
        self.end()
    }

    fn name(&mut self) -> Result<Rc<str>> {
        match self.next() {
            Some(Token::Word(w)) => Ok(w.as_str().into()),
            _ => Err(error!(SyntaxError, ..&self.column(); "EXPECTED VARIABLE")),
        }
    }

    fn value(&mut self) -> Result<Value> {
        match self.next() {
            Some(t) => match t.name() {
                Some(s) => Value::classify(s).map_err(|e| e.in_column(&self.column())),
                None => Err(error!(SyntaxError, ..&self.column(); "EXPECTED VALUE")),
            },
            None => Err(error!(MissingOperand, ..&self.column())),
        }
    }

    fn index(&mut self) -> Result<u16> {
        match self.next() {
            Some(Token::Number(s)) => match s.parse::<u16>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(Overflow, ..&self.column(); "INVALID INDEX")),
            },
            _ => Err(error!(SyntaxError, ..&self.column(); "EXPECTED LITERAL INDEX")),
        }
    }

    fn hex_address(&mut self) -> Result<u16> {
        if let Some(t) = self.next() {
            if let Some(s) = t.name() {
                let digits = s.trim_start_matches('$').trim_start_matches("0x");
                if let Ok(addr) = u16::from_str_radix(digits, 16) {
                    return Ok(addr);
                }
            }
        }
        Err(error!(SyntaxError, ..&self.column(); "EXPECTED HEX ADDRESS"))
    }
}

fn word(s: &str) -> Token {
    Token::Word(s.to_string())
}

impl Statement {
    fn for_keyword(parse: &mut Parser, keyword: &str) -> Result<Statement> {
        match keyword {
            "store" => Self::r#store(parse),
            "print" => Self::r#print(parse),
            "call" => Ok(Statement::Call(Self::target(parse)?)),
            "bookmark" => Ok(Statement::Bookmark(Self::target(parse)?)),
            "goto" => Ok(Statement::Goto(Self::target(parse)?)),
            "if" => Self::r#if(parse),
            _ => Ok(Statement::Unknown),
        }
    }

    fn target(parse: &mut Parser) -> Result<Rc<str>> {
        let name = match parse.next() {
            Some(t) => match t.name() {
                Some(s) => s.into(),
                None => return Err(error!(SyntaxError, ..&parse.column(); "EXPECTED LABEL")),
            },
            None => return Err(error!(SyntaxError, ..&parse.column(); "EXPECTED LABEL")),
        };
        parse.end()?;
        Ok(name)
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        let printable = match parse.next() {
            Some(Token::Text(s)) => Printable::Text(s.clone()),
            Some(Token::Word(w)) => Printable::Var(w.as_str().into()),
            _ => {
                return Err(error!(SyntaxError, ..&parse.column(); "EXPECTED STRING OR VARIABLE"))
            }
        };
        parse.end()?;
        Ok(Statement::Print(printable))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let lhs = parse.name()?;
        parse.expect_word("is")?;
        let comparator = match parse.next() {
            Some(Token::Word(w)) => Comparator::from_word(w),
            _ => return Err(error!(SyntaxError, ..&parse.column(); "EXPECTED COMPARATOR")),
        };
        let rhs = match parse.next() {
            Some(t) => match t.name() {
                Some(s) => Value::classify_strict(s).map_err(|e| e.in_column(&parse.column()))?,
                None => return Err(error!(SyntaxError, ..&parse.column(); "EXPECTED VALUE")),
            },
            None => return Err(error!(MissingOperand, ..&parse.column())),
        };
        parse.expect_word("do")?;
        parse.expect(Token::LBrace)?;
        parse.end()?;
        Ok(Statement::If(Condition {
            lhs,
            comparator,
            rhs,
        }))
    }

    fn r#store(parse: &mut Parser) -> Result<Statement> {
        let store = if parse.contains(&[Token::Comma]) && parse.contains(&[word("as"), word("array")])
        {
            Self::array_literal(parse)
        } else if parse.contains(&[Token::Possessive, word("array"), word("value")]) {
            Self::array_element_read(parse)
        } else if parse.contains(&[Token::LBracket]) && parse.contains(&[Token::RBracket]) {
            Self::array_element_write(parse)
        } else if parse.peek().map_or(false, |t| t.is_word("memory")) {
            Self::memory_read(parse)
        } else if parse.contains(&[word("in"), word("memory")]) {
            Self::memory_write(parse)
        } else {
            Self::assign(parse)
        };
        Ok(Statement::Store(store?))
    }

    fn array_literal(parse: &mut Parser) -> Result<Store> {
        let mut values = vec![];
        loop {
            values.push(parse.value()?);
            match parse.next() {
                Some(Token::Comma) => continue,
                Some(t) if t.is_word("in") => break,
                _ => return Err(error!(SyntaxError, ..&parse.column(); "EXPECTED COMMA")),
            }
        }
        let target = parse.name()?;
        parse.expect_word("as")?;
        parse.expect_word("array")?;
        parse.end()?;
        Ok(Store::ArrayLiteral { values, target })
    }

    fn array_element_read(parse: &mut Parser) -> Result<Store> {
        let source = parse.name()?;
        parse.expect(Token::Possessive)?;
        parse.expect_word("array")?;
        parse.expect_word("value")?;
        let index = parse.index()?;
        if index == 0 {
            return Err(
                error!(SubscriptOutOfRange, ..&parse.column(); "ARRAY VALUES COUNT FROM 1"),
            );
        }
        parse.expect_word("in")?;
        let target = parse.name()?;
        parse.type_suffix()?;
        Ok(Store::ArrayElementRead {
            source,
            index,
            target,
        })
    }

    fn array_element_write(parse: &mut Parser) -> Result<Store> {
        let value = parse.value()?;
        parse.expect_word("in")?;
        let target = parse.name()?;
        parse.expect(Token::LBracket)?;
        let index = parse.index()?;
        parse.expect(Token::RBracket)?;
        parse.type_suffix()?;
        Ok(Store::ArrayElementWrite {
            value,
            target,
            index,
        })
    }

    fn memory_read(parse: &mut Parser) -> Result<Store> {
        parse.expect_word("memory")?;
        let address = parse.hex_address()?;
        parse.expect_word("in")?;
        let target = parse.name()?;
        parse.type_suffix()?;
        Ok(Store::MemoryRead { address, target })
    }

    fn memory_write(parse: &mut Parser) -> Result<Store> {
        let value = parse.value()?;
        parse.expect_word("in")?;
        parse.expect_word("memory")?;
        let address = parse.hex_address()?;
        parse.type_suffix()?;
        Ok(Store::MemoryWrite { value, address })
    }

    fn assign(parse: &mut Parser) -> Result<Store> {
        let start = parse.pos;
        let split = match parse.tokens[start..].iter().position(|(_, t)| t.is_word("in")) {
            Some(offset) => start + offset,
            None => {
                let end = parse.line.text().len();
                return Err(error!(SyntaxError, ..&(end..end); "EXPECTED IN"));
            }
        };
        if split == start {
            return Err(error!(MissingOperand, ..&parse.tokens[split].0));
        }
        let expr_col = parse.tokens[start].0.start..parse.tokens[split - 1].0.end;
        let expression = parse.line.slice(&expr_col).to_string();
        parse.pos = split + 1;
        let target = parse.name()?;
        parse.type_suffix()?;
        Ok(Store::Assign { expression, target })
    }
}
