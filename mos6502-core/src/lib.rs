// Clippy rules to disable.
#![allow(clippy::new_without_default)]

pub mod addressing;
pub mod clock;
pub mod cpu;
pub mod error;
pub mod memory;
pub mod opcodes;
pub mod registers;
mod semantics;

/// Byte-poking helpers for building tiny test programs. Not gated behind
/// `#[cfg(test)]` since the integration tests under `tests/` are a
/// separate crate and need to reach it too; there's no meaningful runtime
/// cost to shipping it.
pub mod testutil;

pub use addressing::{Mode, Operand};
pub use clock::{BusyWaitClock, Clock, ClockSpeed, HybridClock};
pub use cpu::Cpu;
pub use error::{CoreError, Halt, StepOutcome};
pub use memory::Memory;
pub use opcodes::{Instruction, Mnemonic, OPCODE_TABLE};
pub use registers::{StatusFlags, RESET_STATUS};
