//! A thin host around `mos6502-core`: load a flat 64 KiB memory image from
//! disk, bootstrap a `Cpu` from its reset vector, and run it to completion
//! at a configurable clock speed, logging the final register state.
//!
//! ROM/program loading format, assembling test fixtures, and anything
//! resembling memory-mapped I/O are explicitly the host's problem per
//! spec.md — this binary is the simplest possible host, not a reference
//! one.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mos6502_core::{BusyWaitClock, Clock, ClockSpeed, CoreError, Cpu, Halt, Memory};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a flat 64KiB 6502 memory image to completion")]
struct Args {
    /// Path to a raw, exactly-65536-byte memory image. The reset vector at
    /// 0xFFFC/0xFFFD must already point at the intended entry point.
    image: PathBuf,

    /// Emulated clock speed in MHz. Must be positive.
    #[arg(long, default_value_t = 1.0)]
    speed_mhz: f64,

    /// Stop after this many instructions even if BRK is never reached, as
    /// a safety net for runaway programs.
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let memory = match load_memory(&args.image) {
        Ok(memory) => memory,
        Err(message) => {
            log::error!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let clock_speed = ClockSpeed::from_mhz(args.speed_mhz);
    let clock: Box<dyn Clock> = Box::new(BusyWaitClock::new());
    let mut cpu = Cpu::new(memory, clock_speed, clock);

    log::info!("starting execution at pc={:#06x}", cpu.pc);

    match cpu.run(args.max_steps) {
        Ok(Halt::Break) => {
            report_final_state(&cpu);
            ExitCode::SUCCESS
        }
        Ok(Halt::MaxStepsReached) => {
            log::warn!("stopped after {} instructions without hitting BRK", cpu.tick_count());
            report_final_state(&cpu);
            ExitCode::FAILURE
        }
        Err(CoreError::UndefinedOpcode { opcode, address }) => {
            log::error!("undefined opcode {opcode:#04x} at {address:#06x}");
            ExitCode::FAILURE
        }
    }
}

fn load_memory(path: &PathBuf) -> Result<Memory, String> {
    let bytes = fs::read(path).map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let image: [u8; 0x10000] = bytes.try_into().map_err(|bytes: Vec<u8>| {
        format!(
            "{} is {} bytes, expected exactly 65536 (a flat 64KiB image)",
            path.display(),
            bytes.len()
        )
    })?;
    Ok(Memory::from_bytes(image))
}

fn report_final_state(cpu: &Cpu) {
    log::info!(
        "halted: pc={:#06x} a={:#04x} x={:#04x} y={:#04x} sp={:#04x} p={:#04x} steps={}",
        cpu.pc,
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.sp,
        cpu.p.bits(),
        cpu.tick_count(),
    );
}
