//! Error and halt types for the engine.
//!
//! The teacher threads raw `Result<(), String>`/`panic!` through its
//! `cpu_6502.rs`. spec.md's ERROR HANDLING DESIGN section asks for typed,
//! matchable error values instead, so this follows the wider corpus
//! (`yamos6502` uses a similar split of "this is a bug in the host/program"
//! vs "the machine halted normally") and reaches for `thiserror`.

use thiserror::Error;

/// Conditions spec.md classifies as errors: a host/program defect, never a
/// normal outcome of program execution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The opcode fetched has no entry in the dispatch table. PC is left
    /// pointing at the offending byte so a caller can inspect it.
    #[error("undefined opcode {opcode:#04x} at {address:#06x}")]
    UndefinedOpcode { opcode: u8, address: u16 },
}

/// Why `Cpu::run` returned, distinguishing the two non-error ways a run can
/// end: spec.md treats BRK as the program's own halt signal, and a
/// caller-supplied step ceiling as a harness safety net, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// A BRK instruction was fetched and executed.
    Break,
    /// `max_steps` instructions were executed without hitting BRK or an
    /// error.
    MaxStepsReached,
}

/// The outcome of a single `Cpu::step` call: which instruction ran, how
/// many cycles it cost (including any page-cross/branch penalty), and
/// whether it was BRK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub mnemonic: crate::opcodes::Mnemonic,
    pub cycles: u8,
    pub is_break: bool,
}
