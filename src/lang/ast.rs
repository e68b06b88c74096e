use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Store(Store),
    Print(Printable),
    Call(Rc<str>),
    Bookmark(Rc<str>),
    Goto(Rc<str>),
    If(Condition),
    Unknown,
}

/// The six shapes of `store`, in the order the parser tries them.
#[derive(Debug, PartialEq, Clone)]
pub enum Store {
    /// `store 1, 2, 3 in t as array`
    ArrayLiteral { values: Vec<Value>, target: Rc<str> },
    /// `store t's array value 3 in e as number` (index counts from 1)
    ArrayElementRead {
        source: Rc<str>,
        index: u16,
        target: Rc<str>,
    },
    /// `store 7 in t[2] as number` (index counts from 0)
    ArrayElementWrite {
        value: Value,
        target: Rc<str>,
        index: u16,
    },
    /// `store memory d020 in x as number`
    MemoryRead { address: u16, target: Rc<str> },
    /// `store 5 in memory d020 as number`
    MemoryWrite { value: Value, address: u16 },
    /// `store x + 1 in y as number`
    Assign { expression: String, target: Rc<str> },
}

#[derive(Debug, PartialEq, Clone)]
pub enum Printable {
    Text(String),
    Var(Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Condition {
    pub lhs: Rc<str>,
    pub comparator: Comparator,
    pub rhs: Value,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Comparator {
    GreaterThan,
    LessThan,
    EqualTo,
    NotEqualTo,
    Unsupported(Rc<str>),
}

impl Comparator {
    pub fn from_word(word: &str) -> Comparator {
        match word {
            "greater_than" => Comparator::GreaterThan,
            "less_than" => Comparator::LessThan,
            "equal_to" => Comparator::EqualTo,
            "not_equal_to" => Comparator::NotEqualTo,
            _ => Comparator::Unsupported(word.into()),
        }
    }
}

/// A single operand: a literal number or a variable name.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Literal(u16),
    Variable(Rc<str>),
}

impl Value {
    /// A token starting with a decimal digit is a literal; its leading
    /// digits are the value. Anything else names a variable.
    pub fn classify(s: &str) -> Result<Value> {
        let s = s.trim();
        match s.chars().next() {
            None => Err(error!(MissingOperand)),
            Some(ch) if ch.is_ascii_digit() => {
                let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
                match digits.parse::<u16>() {
                    Ok(n) => Ok(Value::Literal(n)),
                    Err(_) => Err(error!(Overflow; "LITERAL TOO LARGE")),
                }
            }
            Some(_) => {
                if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
                    Ok(Value::Variable(s.into()))
                } else {
                    Err(error!(SyntaxError; "INVALID OPERAND"))
                }
            }
        }
    }

    /// Comparison operands are only literal when every character is a digit.
    pub fn classify_strict(s: &str) -> Result<Value> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            Value::classify(s)
        } else if s.chars().next().is_some() {
            Ok(Value::Variable(s.into()))
        } else {
            Err(error!(MissingOperand))
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Literal(n) => write!(f, "{}", n),
            Value::Variable(s) => write!(f, "{}", s),
        }
    }
}
