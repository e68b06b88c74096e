/*!
## Rust Machine Module

This Rust module compiles Kokoro statements into 6502 assembly.

*/

pub type Address = u16;

/// First address handed out to variables.
pub const BASE_ADDRESS: Address = 0x0200;
pub const MAX_SYMBOLS: usize = 256;
pub const MAX_NAME_LEN: usize = 31;

pub const SCREEN_BASE: Address = 0xE000;
pub const SCREEN_WIDTH: u16 = 40;
pub const CURSOR_X: Address = 0xF002;
pub const CURSOR_Y: Address = 0xF003;

// Scratch cells for the shift-and-add multiply.
pub const SCRATCH_MULTIPLY: Address = 0xF004;
pub const SCRATCH_32: Address = 0xF005;
pub const SCRATCH_8: Address = 0xF006;

mod compile;
mod eval;
mod opcode;
mod sink;
mod symbol;
mod target;

pub use compile::Compiler;
pub use eval::Evaluation;
pub use opcode::Instruction;
pub use opcode::Operand;
pub use sink::AsmWriter;
pub use sink::CodeSink;
pub use symbol::Symbol;
pub use symbol::SymbolTable;
pub use target::Lowering;
pub use target::Target;

#[cfg(test)]
mod tests;
