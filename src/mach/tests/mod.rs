use crate::mach::{Compiler, Evaluation, Instruction, Operand, Target};


fn compile_lines(compiler: &mut Compiler, lines: &[&str]) -> Vec<Instruction> {
    let mut code: Vec<Instruction> = vec![];
    compiler.compile(lines, &mut code).unwrap();
    code
}

fn listing(target: Target, lines: &[&str]) -> String {
    let mut compiler = Compiler::new(target);
    let mut s = String::new();
    compiler.compile(lines, &mut s).unwrap();
    s
}
