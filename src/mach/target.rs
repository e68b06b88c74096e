use super::{
    CodeSink, Instruction, Operand, SCRATCH_32, SCRATCH_8, SCRATCH_MULTIPLY, SCREEN_WIDTH,
};
use crate::lang::Error;
use clap::ValueEnum;

type Result<T> = std::result::Result<T, Error>;

/// Target profile, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Stock 6502: no multiply or divide instructions.
    #[value(name = "6502")]
    Mos6502,
    /// Extended 6502 with `MUL` and `DIV`.
    #[value(name = "mega6502")]
    Mega6502,
}

impl Default for Target {
    fn default() -> Target {
        Target::Mos6502
    }
}

impl Target {
    pub fn lowering(self) -> Box<dyn Lowering> {
        match self {
            Target::Mos6502 => Box::new(Mos6502),
            Target::Mega6502 => Box::new(Mega6502),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Target::Mos6502 => write!(f, "6502"),
            Target::Mega6502 => write!(f, "mega6502"),
        }
    }
}

/// ## Lowering strategy
///
/// The target-specific parts of code generation. Implementations are
/// stateless and never allocate variables; every address they touch is
/// either an operand or one of the fixed scratch cells.
pub trait Lowering {
    fn target(&self) -> Target;

    /// Leaves `left * right` in the accumulator.
    fn multiply(&self, sink: &mut dyn CodeSink, left: &Operand, right: &Operand) -> Result<()>;

    /// Leaves `left / right` in the accumulator.
    fn divide(&self, sink: &mut dyn CodeSink, left: &Operand, right: &Operand) -> Result<()>;
}

pub struct Mos6502;

impl Lowering for Mos6502 {
    fn target(&self) -> Target {
        Target::Mos6502
    }

    fn multiply(&self, sink: &mut dyn CodeSink, left: &Operand, right: &Operand) -> Result<()> {
        use Instruction::*;
        sink.emit(Comment(format!("6502 multiply: {} * {}", left, right)))?;
        if *right != Operand::Immediate(SCREEN_WIDTH) {
            return sink.emit(Comment(format!(
                "Fallback multiply not implemented yet for {} * {}",
                left, right
            )));
        }
        // x*40 = x*32 + x*8
        let temp = Operand::Absolute(SCRATCH_MULTIPLY);
        let mut code = vec![Lda(left.clone()), Sta(temp.clone()), Lda(temp.clone())];
        code.extend((0..5).map(|_| Asl(Operand::Accumulator)));
        code.push(Sta(Operand::Absolute(SCRATCH_32)));
        code.push(Lda(temp));
        code.extend((0..3).map(|_| Asl(Operand::Accumulator)));
        code.push(Sta(Operand::Absolute(SCRATCH_8)));
        code.push(Clc);
        code.push(Lda(Operand::Absolute(SCRATCH_32)));
        code.push(Adc(Operand::Absolute(SCRATCH_8)));
        sink.emit_all(code)
    }

    fn divide(&self, sink: &mut dyn CodeSink, left: &Operand, right: &Operand) -> Result<()> {
        sink.emit(Instruction::Comment(format!(
            "6502 divide: JSR Divide (args: {}, {})",
            left, right
        )))
    }
}

pub struct Mega6502;

impl Lowering for Mega6502 {
    fn target(&self) -> Target {
        Target::Mega6502
    }

    fn multiply(&self, sink: &mut dyn CodeSink, left: &Operand, right: &Operand) -> Result<()> {
        sink.emit(Instruction::Mul(left.clone(), right.clone()))
    }

    fn divide(&self, sink: &mut dyn CodeSink, left: &Operand, right: &Operand) -> Result<()> {
        sink.emit(Instruction::Div(left.clone(), right.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(target: Target, right: Operand) -> String {
        let mut out = String::new();
        target
            .lowering()
            .multiply(&mut out, &Operand::Absolute(0xF003), &right)
            .unwrap();
        out
    }

    #[test]
    fn test_times_forty_by_shifts() {
        assert_eq!(
            lower(Target::Mos6502, Operand::Immediate(40)),
            "; 6502 multiply: $F003 * #40\n\
             LDA $F003\nSTA $F004\n\
             LDA $F004\nASL A\nASL A\nASL A\nASL A\nASL A\nSTA $F005\n\
             LDA $F004\nASL A\nASL A\nASL A\nSTA $F006\n\
             CLC\nLDA $F005\nADC $F006\n"
        );
    }

    #[test]
    fn test_other_multiplier_is_a_marker() {
        assert_eq!(
            lower(Target::Mos6502, Operand::Immediate(3)),
            "; 6502 multiply: $F003 * #3\n\
             ; Fallback multiply not implemented yet for $F003 * #3\n"
        );
    }

    #[test]
    fn test_extended_target() {
        assert_eq!(
            lower(Target::Mega6502, Operand::Immediate(40)),
            "MUL $F003, #40\n"
        );
        let mut out = String::new();
        Target::Mega6502
            .lowering()
            .divide(&mut out, &Operand::Absolute(0x200), &Operand::Immediate(2))
            .unwrap();
        assert_eq!(out, "DIV $0200, #2\n");
    }

    #[test]
    fn test_baseline_divide_marker() {
        let mut out = String::new();
        Target::Mos6502
            .lowering()
            .divide(&mut out, &Operand::Absolute(0x200), &Operand::Immediate(2))
            .unwrap();
        assert_eq!(out, "; 6502 divide: JSR Divide (args: $0200, #2)\n");
    }
}
