#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Word(String),
    Number(String),
    Text(String),
    Operator(char),
    Possessive,
    Comma,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

impl Token {
    pub fn is_word(&self, word: &str) -> bool {
        match self {
            Token::Word(w) => w == word,
            _ => false,
        }
    }

    /// Text of a word or number, the two tokens that can name things.
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Word(s) | Token::Number(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) | Word(s) | Number(s) => write!(f, "{}", s),
            Text(s) => write!(f, "\"{}\"", s),
            Operator(c) => write!(f, "{}", c),
            Possessive => write!(f, "'s"),
            Comma => write!(f, ","),
            LBracket => write!(f, "["),
            RBracket => write!(f, "]"),
            LBrace => write!(f, "{{"),
            RBrace => write!(f, "}}"),
        }
    }
}
