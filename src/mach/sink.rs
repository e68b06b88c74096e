use super::Instruction;
use crate::error;
use crate::lang::Error;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// Where compiled instructions go. The compiler never formats text itself.
pub trait CodeSink {
    fn emit(&mut self, instruction: Instruction) -> Result<()>;

    fn emit_all(&mut self, instructions: Vec<Instruction>) -> Result<()> {
        for instruction in instructions {
            self.emit(instruction)?;
        }
        Ok(())
    }
}

impl CodeSink for Vec<Instruction> {
    fn emit(&mut self, instruction: Instruction) -> Result<()> {
        self.push(instruction);
        Ok(())
    }
}

/// One line of assembly text per instruction.
impl CodeSink for String {
    fn emit(&mut self, instruction: Instruction) -> Result<()> {
        self.push_str(&instruction.to_string());
        self.push('\n');
        Ok(())
    }
}

/// Writes assembly text to a file or stream.
pub struct AsmWriter<W: Write> {
    out: W,
}

impl<W: Write> AsmWriter<W> {
    pub fn new(out: W) -> AsmWriter<W> {
        AsmWriter { out }
    }

    pub fn comment(&mut self, text: &str) -> Result<()> {
        self.emit(Instruction::Comment(text.to_string()))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out
            .flush()
            .map_err(|e| error!(DiskIoError; &e.to_string()))
    }
}

impl<W: Write> CodeSink for AsmWriter<W> {
    fn emit(&mut self, instruction: Instruction) -> Result<()> {
        writeln!(self.out, "{}", instruction).map_err(|e| error!(DiskIoError; &e.to_string()))
    }
}
