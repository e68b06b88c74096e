use super::*;

fn store(s: &str) -> Store {
    match parse_str(s) {
        Ok(Statement::Store(store)) => store,
        other => panic!("{} : {:?}", s, other),
    }
}

#[test]
fn test_array_literal() {
    assert_eq!(
        store("store 1, 2, 3 in t as array"),
        Store::ArrayLiteral {
            values: vec![Value::Literal(1), Value::Literal(2), Value::Literal(3)],
            target: "t".into(),
        }
    );
}

#[test]
fn test_single_value_as_array_is_scalar() {
    assert_eq!(
        store("store 5 in t as array"),
        Store::Assign {
            expression: "5".into(),
            target: "t".into(),
        }
    );
}

#[test]
fn test_array_element_read() {
    assert_eq!(
        store("store t's array value 3 in e as number"),
        Store::ArrayElementRead {
            source: "t".into(),
            index: 3,
            target: "e".into(),
        }
    );
}

#[test]
fn test_array_element_read_from_zero() {
    let e = parse_str("store t's array value 0 in e as number").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SubscriptOutOfRange);
}

#[test]
fn test_array_element_write() {
    assert_eq!(
        store("store 7 in t[2] as number"),
        Store::ArrayElementWrite {
            value: Value::Literal(7),
            target: "t".into(),
            index: 2,
        }
    );
    let e = parse_str("store 7 in t[i] as number").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 1 (13..14); EXPECTED LITERAL INDEX");
}

#[test]
fn test_memory_read_and_write() {
    assert_eq!(
        store("store memory d020 in border as number"),
        Store::MemoryRead {
            address: 0xD020,
            target: "border".into(),
        }
    );
    assert_eq!(
        store("STORE 5 IN MEMORY $0400 AS NUMBER"),
        Store::MemoryWrite {
            value: Value::Literal(5),
            address: 0x0400,
        }
    );
}

#[test]
fn test_assign_keeps_expression_text() {
    assert_eq!(
        store("store x + 3 in y as number"),
        Store::Assign {
            expression: "x + 3".into(),
            target: "y".into(),
        }
    );
    assert_eq!(
        store("store x*40 in y"),
        Store::Assign {
            expression: "x*40".into(),
            target: "y".into(),
        }
    );
}

#[test]
fn test_assign_errors() {
    let e = parse_str("store 5 into x").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 1 (14..14); EXPECTED IN");
    let e = parse_str("store in x").unwrap_err();
    assert_eq!(e.code(), ErrorCode::MissingOperand);
    let e = parse_str("store 5 in x as").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 1 (15..15); EXPECTED TYPE");
}

#[test]
fn test_print() {
    assert_eq!(
        parse_str("print \"Hello\"").unwrap(),
        Statement::Print(Printable::Text("Hello".into()))
    );
    assert_eq!(
        parse_str("PRINT Score").unwrap(),
        Statement::Print(Printable::Var("score".into()))
    );
    assert!(parse_str("print").is_err());
    assert_eq!(
        parse_str("print \"abc").unwrap_err().to_string(),
        "SYNTAX ERROR IN 1 (6..10); EXPECTED STRING OR VARIABLE"
    );
}

#[test]
fn test_jumps() {
    assert_eq!(parse_str("call clear_screen").unwrap(), Statement::Call("clear_screen".into()));
    assert_eq!(parse_str("bookmark top").unwrap(), Statement::Bookmark("top".into()));
    assert_eq!(parse_str("goto top").unwrap(), Statement::Goto("top".into()));
    assert!(parse_str("goto").is_err());
}

#[test]
fn test_if_header() {
    assert_eq!(
        parse_str("if x is greater_than 10 do {").unwrap(),
        Statement::If(Condition {
            lhs: "x".into(),
            comparator: Comparator::GreaterThan,
            rhs: Value::Literal(10),
        })
    );
    assert_eq!(
        parse_str("if x is near y do{").unwrap(),
        Statement::If(Condition {
            lhs: "x".into(),
            comparator: Comparator::Unsupported("near".into()),
            rhs: Value::Variable("y".into()),
        })
    );
}

#[test]
fn test_if_header_malformed() {
    let e = parse_str("if a is b do {").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 1 (13..14); EXPECTED DO");
}

#[test]
fn test_if_strict_literal() {
    assert_eq!(
        parse_str("if x is equal_to 12abc do {").unwrap(),
        Statement::If(Condition {
            lhs: "x".into(),
            comparator: Comparator::EqualTo,
            rhs: Value::Variable("12abc".into()),
        })
    );
}

#[test]
fn test_unknown() {
    assert_eq!(parse_str("dance wildly").unwrap(), Statement::Unknown);
    assert_eq!(parse_str("42 things").unwrap(), Statement::Unknown);
}

#[test]
fn test_line_too_long() {
    let long = format!("store {} in x", "1".repeat(300));
    assert_eq!(parse_str(&long).unwrap_err().code(), ErrorCode::LineBufferOverflow);
}
