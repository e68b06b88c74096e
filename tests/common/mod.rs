use kokoro::lang::Error;
use kokoro::mach::{Compiler, Target};

pub fn compile(src: &str) -> String {
    compile_for(Target::Mos6502, src)
}

pub fn compile_for(target: Target, src: &str) -> String {
    match try_compile(target, src) {
        Ok(asm) => asm,
        Err(error) => panic!("{}", error),
    }
}

pub fn try_compile(target: Target, src: &str) -> Result<String, Error> {
    let mut compiler = Compiler::new(target);
    let mut asm = String::new();
    compiler.compile(src.lines(), &mut asm)?;
    Ok(asm)
}

/// The screen cell sequence `print` writes for one value.
#[allow(dead_code)]
pub fn screen_cell(value: &str, label: &str) -> String {
    format!(
        "; 6502 multiply: $F003 * #40\n\
         LDA $F003\nSTA $F004\n\
         LDA $F004\nASL A\nASL A\nASL A\nASL A\nASL A\nSTA $F005\n\
         LDA $F004\nASL A\nASL A\nASL A\nSTA $F006\n\
         CLC\nLDA $F005\nADC $F006\n\
         CLC\nADC $F002\n\
         STA temp_addr_low\nLDA #224\nSTA temp_addr_high\n\
         LDA {}\nLDY #0\nSTA (temp_addr_low),Y\n\
         INC $F002\nLDA $F002\nCMP #40\nBNE {}\n\
         LDA #0\nSTA $F002\nINC $F003\n\
         {}:\n",
        value, label, label
    )
}
