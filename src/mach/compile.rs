use super::{
    Address, CodeSink, Evaluation, Instruction, Lowering, Operand, SymbolTable, Target, CURSOR_X,
    CURSOR_Y, SCREEN_BASE, SCREEN_WIDTH,
};
use crate::error;
use crate::lang::ast::{Comparator, Condition, Printable, Statement, Store};
use crate::lang::{parse, Error, Line, Source};
use log::debug;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Label counters. Both run for the life of the compiler so no two
/// statements ever share a branch target.
#[derive(Debug, Default)]
struct Labels {
    skip: usize,
    print: usize,
}

impl Labels {
    fn skip(&mut self) -> Rc<str> {
        let label = format!("skip_if_{}", self.skip);
        self.skip += 1;
        label.into()
    }

    fn print(&mut self) -> Rc<str> {
        let label = format!("print_continue_{}", self.print);
        self.print += 1;
        label.into()
    }
}

/// ## Compiler context
///
/// Owns everything that lives for a whole run: the symbol table, the
/// label counters and the lowering for the chosen target.
pub struct Compiler {
    pub(super) symbols: SymbolTable,
    pub(super) lowering: Box<dyn Lowering>,
    labels: Labels,
}

impl Compiler {
    pub fn new(target: Target) -> Compiler {
        Compiler {
            symbols: SymbolTable::new(),
            lowering: target.lowering(),
            labels: Labels::default(),
        }
    }

    pub fn target(&self) -> Target {
        self.lowering.target()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Compiles every line. Only fatal errors stop the run; anything
    /// else is written to the sink as a diagnostic comment.
    pub fn compile<I>(&mut self, lines: I, sink: &mut dyn CodeSink) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut source = Source::new(lines.into_iter());
        while let Some(line) = source.next() {
            self.line(&line, &mut source, sink)?;
        }
        Ok(())
    }

    fn line(
        &mut self,
        line: &Line,
        source: &mut dyn Iterator<Item = Line>,
        sink: &mut dyn CodeSink,
    ) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }
        debug!("line {}: {}", line.number().unwrap_or_default(), line);
        let result = match parse(line) {
            Ok(Statement::If(condition)) => self.r#if(&condition, source, sink),
            Ok(statement) => self.statement(line, &statement, sink),
            Err(e) => Err(e),
        };
        result.or_else(|e| self.recover(line, e, sink))
    }

    fn recover(&mut self, line: &Line, error: Error, sink: &mut dyn CodeSink) -> Result<()> {
        let error = error.in_line_number(line.number());
        if error.is_fatal() {
            return Err(error);
        }
        sink.emit(Instruction::Comment(format!("ERROR: {}: {}", error, line)))
    }

    fn statement(
        &mut self,
        line: &Line,
        statement: &Statement,
        sink: &mut dyn CodeSink,
    ) -> Result<()> {
        use Instruction::*;
        match statement {
            Statement::Store(store) => self.r#store(store, sink)?,
            Statement::Print(printable) => self.r#print(printable, sink)?,
            Statement::Call(name) => sink.emit(Jsr(name.clone()))?,
            Statement::Bookmark(name) => sink.emit(Label(name.clone()))?,
            Statement::Goto(name) => sink.emit(Jmp(name.clone()))?,
            Statement::If(_) | Statement::Unknown => {
                sink.emit(Comment(format!("Unknown line: {}", line)))?
            }
        }
        sink.emit(Blank)
    }

    fn r#store(&mut self, store: &Store, sink: &mut dyn CodeSink) -> Result<()> {
        use Instruction::*;
        match store {
            Store::ArrayLiteral { values, target } => {
                let size = match u16::try_from(values.len()) {
                    Ok(size) => size,
                    Err(_) => return Err(error!(Overflow; "TOO MANY ARRAY VALUES")),
                };
                let base = self.symbols.resolve(target, size, true)?;
                let mut code = vec![];
                for (i, value) in (0..size).zip(values) {
                    let address = offset(base, i)?;
                    code.push(Lda(self.operand(value)?));
                    code.push(Sta(Operand::Absolute(address)));
                }
                sink.emit_all(code)
            }
            Store::ArrayElementRead {
                source,
                index,
                target,
            } => {
                let base = self.symbols.resolve(source, 0, true)?;
                let address = offset(base, index - 1)?;
                let dest = self.symbols.resolve(target, 1, false)?;
                sink.emit_all(vec![
                    Lda(Operand::Absolute(address)),
                    Sta(Operand::Absolute(dest)),
                ])
            }
            Store::ArrayElementWrite {
                value,
                target,
                index,
            } => {
                let base = self.symbols.resolve(target, 0, true)?;
                let address = offset(base, *index)?;
                let value = self.operand(value)?;
                sink.emit_all(vec![Lda(value), Sta(Operand::Absolute(address))])
            }
            Store::MemoryRead { address, target } => {
                let dest = self.symbols.resolve(target, 1, false)?;
                sink.emit_all(vec![
                    Lda(Operand::Absolute(*address)),
                    Sta(Operand::Absolute(dest)),
                ])
            }
            Store::MemoryWrite { value, address } => {
                let value = self.operand(value)?;
                sink.emit_all(vec![Lda(value), Sta(Operand::Absolute(*address))])
            }
            Store::Assign { expression, target } => {
                let dest = self.symbols.resolve(target, 1, false)?;
                if let Evaluation::Operand(op) = self.evaluate(expression, sink)? {
                    sink.emit(Lda(op))?;
                }
                sink.emit(Sta(Operand::Absolute(dest)))
            }
        }
    }

    fn r#print(&mut self, printable: &Printable, sink: &mut dyn CodeSink) -> Result<()> {
        let values = match printable {
            Printable::Text(text) => {
                let mut values = vec![];
                for ch in text.chars() {
                    match u8::try_from(u32::from(ch)) {
                        Ok(byte) => values.push(Operand::Immediate(u16::from(byte))),
                        Err(_) => return Err(error!(Overflow; "CHARACTER OUT OF RANGE")),
                    }
                }
                values
            }
            Printable::Var(name) => vec![Operand::Absolute(self.symbols.resolve(name, 1, false)?)],
        };
        for value in values {
            self.screen_cell(value, sink)?;
        }
        Ok(())
    }

    /// Writes one value at the cursor and advances it, wrapping at the
    /// right edge of the screen.
    fn screen_cell(&mut self, value: Operand, sink: &mut dyn CodeSink) -> Result<()> {
        use Instruction::*;
        use Operand::*;
        let next = self.labels.print();
        self.lowering
            .multiply(sink, &Absolute(CURSOR_Y), &Immediate(SCREEN_WIDTH))?;
        sink.emit_all(vec![
            Clc,
            Adc(Absolute(CURSOR_X)),
            Sta(Named("temp_addr_low")),
            Lda(Immediate(SCREEN_BASE >> 8)),
            Sta(Named("temp_addr_high")),
            Lda(value),
            Ldy(Immediate(0)),
            Sta(IndirectY("temp_addr_low")),
            Inc(Absolute(CURSOR_X)),
            Lda(Absolute(CURSOR_X)),
            Cmp(Immediate(SCREEN_WIDTH)),
            Bne(next.clone()),
            Lda(Immediate(0)),
            Sta(Absolute(CURSOR_X)),
            Inc(Absolute(CURSOR_Y)),
            Label(next),
        ])
    }

    /// Compiles a conditional block. The body is pulled straight from
    /// `source` up to the closing brace; blocks do not nest.
    fn r#if(
        &mut self,
        condition: &Condition,
        source: &mut dyn Iterator<Item = Line>,
        sink: &mut dyn CodeSink,
    ) -> Result<()> {
        use Instruction::*;
        let lhs = Operand::Absolute(self.symbols.resolve(&condition.lhs, 1, false)?);
        let rhs = self.operand(&condition.rhs)?;
        let skip = self.labels.skip();
        sink.emit_all(vec![Lda(lhs), Cmp(rhs)])?;
        match &condition.comparator {
            Comparator::GreaterThan => sink.emit(Bcc(skip.clone()))?,
            Comparator::LessThan => sink.emit(Bcs(skip.clone()))?,
            Comparator::EqualTo => sink.emit(Bne(skip.clone()))?,
            Comparator::NotEqualTo => sink.emit(Beq(skip.clone()))?,
            Comparator::Unsupported(word) => sink.emit_all(vec![
                Comment(format!("Unsupported comparison: {}", word)),
                Jmp(skip.clone()),
            ])?,
        }
        let mut terminated = false;
        while let Some(line) = source.next() {
            if line.is_empty() {
                continue;
            }
            if line.is_block_end() {
                terminated = true;
                break;
            }
            debug!("block {}: {}", skip, line);
            let result = match line.keyword() {
                Some("if") => self.statement(&line, &Statement::Unknown, sink),
                _ => match parse(&line) {
                    Ok(statement) => self.statement(&line, &statement, sink),
                    Err(e) => Err(e),
                },
            };
            if let Err(e) = result {
                self.recover(&line, e, sink)?;
            }
        }
        if !terminated {
            debug!("{} reached end of input without a closing brace", skip);
        }
        sink.emit_all(vec![Label(skip), Blank])
    }
}

fn offset(base: Address, by: u16) -> Result<Address> {
    match base.checked_add(by) {
        Some(address) => Ok(address),
        None => Err(error!(Overflow; "ADDRESS OUT OF RANGE")),
    }
}
