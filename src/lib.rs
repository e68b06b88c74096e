//! # Kokoro
//!
//! An English-like language for 8-bit machines, compiled to 6502 assembly.
//!
//! ```text
//! store 5 in x as number
//! print x
//! ```
//!
//! Run `kokoro input.kok output.asm` to compile a file, or `kokoro` alone
//! for an interactive session.
//!
//! The library side is usable on its own. [`mach::Compiler`] takes source
//! lines and writes instructions to any [`mach::CodeSink`].
//!
//! ```
//! use kokoro::mach::{Compiler, Target};
//!
//! let mut compiler = Compiler::new(Target::Mos6502);
//! let mut asm = String::new();
//! compiler.compile(&["store 5 in x as number"], &mut asm).unwrap();
//! assert_eq!(asm, "LDA #5\nSTA $0200\n\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
