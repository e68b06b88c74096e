use super::{CodeSink, Compiler, Instruction, Operand};
use crate::lang::{ast::Value, Error};

type Result<T> = std::result::Result<T, Error>;

const OPERATORS: &[char] = &['+', '-', '*', '/', '%'];

/// Where the value of an expression ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// An operation ran; the result is already in A.
    Accumulator,
    /// Nothing was emitted; the caller loads this operand if it needs to.
    Operand(Operand),
}

impl Compiler {
    /// Compiles a single-operator expression. Only the leftmost operator
    /// splits; whatever follows it is the right operand.
    pub fn evaluate(&mut self, expr: &str, sink: &mut dyn CodeSink) -> Result<Evaluation> {
        let expr = expr.trim();
        let (pos, op) = match expr.char_indices().find(|(_, ch)| OPERATORS.contains(ch)) {
            Some(found) => found,
            None => {
                let value = Value::classify(expr)?;
                return Ok(Evaluation::Operand(self.operand(&value)?));
            }
        };
        let left = Value::classify(&expr[..pos])?;
        let right = Value::classify(&expr[pos + op.len_utf8()..])?;
        let left = self.operand(&left)?;
        let right = self.operand(&right)?;

        use Instruction::*;
        sink.emit(Lda(left.clone()))?;
        match op {
            '+' => sink.emit_all(vec![Clc, Adc(right)])?,
            '-' => sink.emit_all(vec![Sec, Sbc(right)])?,
            '*' => self.lowering.multiply(sink, &left, &right)?,
            '/' => self.lowering.divide(sink, &left, &right)?,
            '%' => sink.emit(Comment("MODULO operation not implemented yet".into()))?,
            _ => sink.emit(Comment(format!("Unknown operator: {}", op)))?,
        }
        Ok(Evaluation::Accumulator)
    }

    /// Literals become immediates; names are registered as scalars on
    /// first use.
    pub fn operand(&mut self, value: &Value) -> Result<Operand> {
        match value {
            Value::Literal(n) => Ok(Operand::Immediate(*n)),
            Value::Variable(name) => Ok(Operand::Absolute(self.symbols.resolve(name, 1, false)?)),
        }
    }
}
