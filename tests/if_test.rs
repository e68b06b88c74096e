mod common;
use common::*;

#[test]
fn test_equal_to() {
    assert_eq!(
        compile("if x is equal_to 5 do {\n    call beep\n}\ngoto top"),
        "LDA $0200\nCMP #5\nBNE skip_if_0\n\
         JSR beep\n\n\
         skip_if_0:\n\n\
         JMP top\n\n"
    );
}

#[test]
fn test_comparators() {
    let asm = compile(
        "if a is greater_than b do {\n}\n\
         if a is less_than 1 do {\n}\n\
         if a is not_equal_to b do {\n}",
    );
    assert_eq!(
        asm,
        "LDA $0200\nCMP $0201\nBCC skip_if_0\nskip_if_0:\n\n\
         LDA $0200\nCMP #1\nBCS skip_if_1\nskip_if_1:\n\n\
         LDA $0200\nCMP $0201\nBEQ skip_if_2\nskip_if_2:\n\n"
    );
}

#[test]
fn test_unknown_comparison_skips_block() {
    assert_eq!(
        compile("if a is near b do {\ngoto top\n}"),
        "LDA $0200\nCMP $0201\n\
         ; Unsupported comparison: near\nJMP skip_if_0\n\
         JMP top\n\n\
         skip_if_0:\n\n"
    );
}

#[test]
fn test_body_statements() {
    let asm = compile(
        "if x is less_than 10 do {\n\
         \x20   # bump\n\
         \n\
         \x20   store x + 1 in x as number\n\
         \x20   store 5 x\n\
         \x20   bogus\n\
         }",
    );
    assert_eq!(
        asm,
        "LDA $0200\nCMP #10\nBCS skip_if_0\n\
         LDA $0200\nCLC\nADC #1\nSTA $0200\n\n\
         ; ERROR: SYNTAX ERROR IN 5 (9..9); EXPECTED IN: store 5 x\n\
         ; Unknown line: bogus\n\n\
         skip_if_0:\n\n"
    );
}

#[test]
fn test_nested_if_is_unknown() {
    assert_eq!(
        compile("if a is equal_to 1 do {\nif b is equal_to 2 do {\ncall inner\n}\ncall outer\n}"),
        "LDA $0200\nCMP #1\nBNE skip_if_0\n\
         ; Unknown line: if b is equal_to 2 do {\n\n\
         JSR inner\n\n\
         skip_if_0:\n\n\
         JSR outer\n\n\
         ; Unknown line: }\n\n"
    );
}

#[test]
fn test_malformed_header() {
    assert_eq!(
        compile("if a is b do {\ngoto top\n}"),
        "; ERROR: SYNTAX ERROR IN 1 (13..14); EXPECTED DO: if a is b do {\n\
         JMP top\n\n\
         ; Unknown line: }\n\n"
    );
}

#[test]
fn test_unterminated_block() {
    assert_eq!(
        compile("if a is equal_to 1 do {\ncall x"),
        "LDA $0200\nCMP #1\nBNE skip_if_0\nJSR x\n\nskip_if_0:\n\n"
    );
}

#[test]
fn test_closing_brace_with_trailing_text() {
    assert_eq!(
        compile("if a is equal_to 1 do {\n   } # done\ngoto top"),
        "LDA $0200\nCMP #1\nBNE skip_if_0\nskip_if_0:\n\nJMP top\n\n"
    );
}
