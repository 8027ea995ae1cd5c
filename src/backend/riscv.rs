//! Demo translation of TAC lines into RISC-V assembly text.
//!
//! Only three line shapes are recognised:
//!
//! - `dest = left + right`
//! - `dest = src`
//! - `return src`
//!
//! Every other line (other operators, `ifFalse`, `goto`, labels) is skipped.
//! Temporaries are given registers `t0`..`t5` round-robin, `t6` is scratch.

use std::collections::HashMap;

use tracing::debug;

const REGISTER_POOL: [&str; 6] = ["t0", "t1", "t2", "t3", "t4", "t5"];
const SCRATCH: &str = "t6";

fn is_immediate(operand: &str) -> bool {
    !operand.is_empty() && operand.chars().all(|c| c.is_ascii_digit())
}

/// Emits the instruction that loads `operand` into `register`.
fn load(register: &str, operand: &str) -> String {
    if is_immediate(operand) {
        format!("    li {}, {}", register, operand)
    } else {
        format!("    lw {}, {}", register, operand)
    }
}

#[derive(Debug, Default)]
pub struct RiscvTranslator {
    registers: HashMap<String, &'static str>,
    next_register: usize,
    output: Vec<String>,
}

impl RiscvTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, temp: &str) -> &'static str {
        let register = REGISTER_POOL[self.next_register % REGISTER_POOL.len()];
        self.next_register += 1;
        self.registers.insert(temp.to_string(), register);
        register
    }

    /// Moves `operand` into `target`, from its register if it has one.
    fn materialize(&mut self, target: &str, operand: &str) -> String {
        match self.registers.get(operand) {
            Some(register) => register.to_string(),
            None => {
                self.output.push(load(target, operand));
                target.to_string()
            }
        }
    }

    pub fn translate_line(&mut self, line: &str) {
        let parts = line.split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            [dest, "=", left, "+", right] => {
                let register = self.allocate(dest);
                self.output.push(load(register, right));
                self.output.push(load(SCRATCH, left));
                self.output
                    .push(format!("    add {}, {}, {}", register, SCRATCH, register));
            }
            [dest, "=", src] => {
                let register = self.materialize(SCRATCH, src);
                self.output.push(format!("    sw {}, {}", register, dest));
            }
            ["return", src] => {
                match self.registers.get(*src) {
                    Some(register) => self.output.push(format!("    mv a0, {}", register)),
                    None => self.output.push(load("a0", src)),
                }
                self.output.push(String::from("    ret"));
            }
            _ => debug!(line, "no RISC-V pattern for TAC line, skipping"),
        }
    }

    pub fn finish(self) -> Vec<String> {
        self.output
    }
}

/// Translates TAC lines into RISC-V assembly lines.
pub fn translate<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut translator = RiscvTranslator::new();
    for line in lines {
        translator.translate_line(line.as_ref());
    }
    translator.finish()
}

#[cfg(test)]
mod tests {
    use super::translate;

    #[test]
    fn test_translate_add_store_return() {
        let assembly = translate(&["t1 = x + 1", "y = t1", "return y"]);

        assert_eq!(
            assembly,
            vec![
                "    li t0, 1",
                "    lw t6, x",
                "    add t0, t6, t0",
                "    sw t0, y",
                "    lw a0, y",
                "    ret",
            ]
        );
    }

    #[test]
    fn test_return_of_temporary_uses_its_register() {
        let assembly = translate(&["t1 = 2 + 3", "return t1"]);

        assert_eq!(
            assembly,
            vec![
                "    li t0, 3",
                "    li t6, 2",
                "    add t0, t6, t0",
                "    mv a0, t0",
                "    ret",
            ]
        );
    }

    #[test]
    fn test_registers_rotate() {
        let lines = (1..=7)
            .map(|n| format!("t{} = a + {}", n, n))
            .collect::<Vec<_>>();
        let assembly = translate(&lines);

        assert_eq!(assembly[2], "    add t0, t6, t0");
        assert_eq!(assembly[17], "    add t5, t6, t5");
        assert_eq!(assembly[20], "    add t0, t6, t0");
    }

    #[test]
    fn test_store_of_plain_operand() {
        let assembly = translate(&["x = 7", "y = x"]);

        assert_eq!(
            assembly,
            vec!["    li t6, 7", "    sw t6, x", "    lw t6, x", "    sw t6, y"]
        );
    }

    #[test]
    fn test_unrecognised_lines_are_skipped() {
        let assembly = translate(&["t1 = a - b", "ifFalse t1 goto L1", "goto L2", "L1:", "L2:"]);

        assert!(assembly.is_empty());
    }
}
