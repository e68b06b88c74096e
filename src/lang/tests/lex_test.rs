use super::super::token::*;
use super::*;

fn tokens(s: &str) -> Vec<Token> {
    lex(s).into_iter().map(|(_, t)| t).collect()
}

#[test]
fn test_words_and_numbers() {
    assert_eq!(
        tokens("store 42 in x2 as number"),
        vec![
            Token::Word("store".into()),
            Token::Number("42".into()),
            Token::Word("in".into()),
            Token::Word("x2".into()),
            Token::Word("as".into()),
            Token::Word("number".into()),
        ]
    );
}

#[test]
fn test_columns() {
    let cols: Vec<Column> = lex("goto  top").into_iter().map(|(c, _)| c).collect();
    assert_eq!(cols, vec![0..4, 6..9]);
}

#[test]
fn test_possessive() {
    assert_eq!(
        tokens("t's array"),
        vec![
            Token::Word("t".into()),
            Token::Possessive,
            Token::Word("array".into()),
        ]
    );
    assert_eq!(
        tokens("it'sx"),
        vec![
            Token::Word("it".into()),
            Token::Unknown("'".into()),
            Token::Word("sx".into()),
        ]
    );
}

#[test]
fn test_text_keeps_spaces() {
    assert_eq!(
        tokens("print \"Hi there\""),
        vec![Token::Word("print".into()), Token::Text("Hi there".into())]
    );
}

#[test]
fn test_unterminated_text() {
    assert_eq!(tokens("\"abc"), vec![Token::Unknown("\"abc".into())]);
    assert_eq!(tokens("\"\""), vec![Token::Text("".into())]);
}

#[test]
fn test_operators_and_punctuation() {
    assert_eq!(
        tokens("x+3,t[1]{}%"),
        vec![
            Token::Word("x".into()),
            Token::Operator('+'),
            Token::Number("3".into()),
            Token::Comma,
            Token::Word("t".into()),
            Token::LBracket,
            Token::Number("1".into()),
            Token::RBracket,
            Token::LBrace,
            Token::RBrace,
            Token::Operator('%'),
        ]
    );
}

#[test]
fn test_hex_forms() {
    assert_eq!(
        tokens("$d020 0x0400 d020"),
        vec![
            Token::Word("$d020".into()),
            Token::Number("0x0400".into()),
            Token::Word("d020".into()),
        ]
    );
}
