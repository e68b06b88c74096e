use super::Address;
use std::rc::Rc;

/// ## Instruction operands
///
/// Only the addressing modes the compiler actually produces.

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// `#n`
    Immediate(u16),
    /// `$XXXX`
    Absolute(Address),
    /// `A`
    Accumulator,
    /// A location named by the surrounding program, such as the
    /// zero page screen pointer.
    Named(&'static str),
    /// `(name),Y`
    IndirectY(&'static str),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operand::*;
        match self {
            Immediate(n) => write!(f, "#{}", n),
            Absolute(a) => write!(f, "${:04X}", a),
            Accumulator => write!(f, "A"),
            Named(s) => write!(f, "{}", s),
            IndirectY(s) => write!(f, "({}),Y", s),
        }
    }
}

/// ## Target instruction set
///
/// Everything the compiler writes to a code sink. `Mul` and `Div` exist
/// only on the extended target.

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    // *** Loads and stores
    Lda(Operand),
    Ldy(Operand),
    Sta(Operand),

    // *** Arithmetic
    Adc(Operand),
    Sbc(Operand),
    Asl(Operand),
    Inc(Operand),
    Cmp(Operand),
    Clc,
    Sec,
    Mul(Operand, Operand),
    Div(Operand, Operand),

    // *** Branch control
    Bcc(Rc<str>),
    Bcs(Rc<str>),
    Beq(Rc<str>),
    Bne(Rc<str>),
    Jmp(Rc<str>),
    Jsr(Rc<str>),

    // *** Listing
    Label(Rc<str>),
    Comment(String),
    Blank,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Instruction::*;
        match self {
            Lda(o) => write!(f, "LDA {}", o),
            Ldy(o) => write!(f, "LDY {}", o),
            Sta(o) => write!(f, "STA {}", o),

            Adc(o) => write!(f, "ADC {}", o),
            Sbc(o) => write!(f, "SBC {}", o),
            Asl(o) => write!(f, "ASL {}", o),
            Inc(o) => write!(f, "INC {}", o),
            Cmp(o) => write!(f, "CMP {}", o),
            Clc => write!(f, "CLC"),
            Sec => write!(f, "SEC"),
            Mul(l, r) => write!(f, "MUL {}, {}", l, r),
            Div(l, r) => write!(f, "DIV {}, {}", l, r),

            Bcc(s) => write!(f, "BCC {}", s),
            Bcs(s) => write!(f, "BCS {}", s),
            Beq(s) => write!(f, "BEQ {}", s),
            Bne(s) => write!(f, "BNE {}", s),
            Jmp(s) => write!(f, "JMP {}", s),
            Jsr(s) => write!(f, "JSR {}", s),

            Label(s) => write!(f, "{}:", s),
            Comment(s) => write!(f, "; {}", s),
            Blank => Ok(()),
        }
    }
}
