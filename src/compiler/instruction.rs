use std::fmt::Display;

/// One three-address instruction.
///
/// `Display` renders the line format consumed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacInstruction {
    /// `dest = src`
    Copy { dest: String, src: String },
    /// `dest = left op right`
    Binary {
        dest: String,
        left: String,
        op: String,
        right: String,
    },
    /// `return value`
    Return { value: String },
    /// `ifFalse condition goto label`
    IfFalse { condition: String, label: String },
    /// `goto label`
    Goto { label: String },
    /// `label:`
    Label { name: String },
}

impl Display for TacInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TacInstruction::Copy { dest, src } => write!(f, "{} = {}", dest, src),
            TacInstruction::Binary {
                dest,
                left,
                op,
                right,
            } => write!(f, "{} = {} {} {}", dest, left, op, right),
            TacInstruction::Return { value } => write!(f, "return {}", value),
            TacInstruction::IfFalse { condition, label } => {
                write!(f, "ifFalse {} goto {}", condition, label)
            }
            TacInstruction::Goto { label } => write!(f, "goto {}", label),
            TacInstruction::Label { name } => write!(f, "{}:", name),
        }
    }
}
