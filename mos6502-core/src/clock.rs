//! Cycle-aware real-time pacing.
//!
//! spec.md's CONCURRENCY & RESOURCE MODEL explicitly defers "the primitives
//! for monotonic time and sleeping" to the host; this module only defines
//! the trait the host-supplied clock must satisfy and the arithmetic that
//! converts a cycle count at a given [`ClockSpeed`] into a sleep duration.
//! Grounded on `examples/original_source/timing.h`'s `now_micros`/busy-wait
//! pairing, which this mirrors one-to-one rather than reaching for
//! `std::thread::sleep`'s coarser OS-scheduled wakeups.

use std::time::{Duration, Instant};

/// A host-supplied source of monotonic time and the means to wait on it.
/// Boxed as a trait object rather than threaded through `Cpu` as a generic
/// parameter, so every semantics handler's signature stays clock-agnostic.
pub trait Clock {
    /// Microseconds since some unspecified epoch, monotonically
    /// non-decreasing. Only differences between two calls are meaningful.
    fn now_micros(&self) -> u64;

    /// Block the calling thread for approximately `micros` microseconds.
    /// Implementations may sleep for less (e.g. a busy-wait clamped to a
    /// minimum slice) but must never block for *longer* than requested by
    /// more than their documented slop, or cycle pacing drifts slow.
    fn sleep_micros(&self, micros: u64);
}

/// Cycles per microsecond, i.e. MHz. `Cpu::run` divides a step's cycle
/// count by this to get the microseconds that step "should" have taken on
/// real silicon, then sleeps off whatever time host-side work didn't
/// already spend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSpeed(f64);

impl ClockSpeed {
    /// Build a clock speed from a MHz figure, e.g. `ClockSpeed::from_mhz(1.79)`
    /// for the NTSC NES's 6502. Panics on non-positive input: a zero or
    /// negative clock has no sensible cycle-to-microsecond conversion.
    pub fn from_mhz(mhz: f64) -> ClockSpeed {
        assert!(mhz > 0.0, "clock speed must be positive, got {mhz}");
        ClockSpeed(mhz)
    }

    /// Convert a cycle count to the microseconds those cycles should take
    /// at this speed.
    pub fn cycles_to_micros(&self, cycles: u8) -> u64 {
        (cycles as f64 / self.0).round() as u64
    }
}

impl Default for ClockSpeed {
    /// 1 MHz, the stock NMOS 6502's speed grade and spec.md's documented
    /// default.
    fn default() -> ClockSpeed {
        ClockSpeed(1.0)
    }
}

/// Spins on [`Clock::now_micros`] until the requested duration elapses.
/// Matches `timing.h`'s own busy-wait pacing loop exactly: at microsecond
/// granularity an OS sleep's scheduling jitter would dominate a single
/// instruction's few-microsecond budget, so this trades CPU for precision
/// the same way the original does.
pub struct BusyWaitClock {
    epoch: Instant,
}

impl BusyWaitClock {
    pub fn new() -> BusyWaitClock {
        BusyWaitClock { epoch: Instant::now() }
    }
}

impl Default for BusyWaitClock {
    fn default() -> BusyWaitClock {
        BusyWaitClock::new()
    }
}

impl Clock for BusyWaitClock {
    fn now_micros(&self) -> u64 {
        self.epoch.elapsed().as_micros() as u64
    }

    fn sleep_micros(&self, micros: u64) {
        let target = self.epoch.elapsed() + Duration::from_micros(micros);
        while self.epoch.elapsed() < target {
            std::hint::spin_loop();
        }
    }
}

/// Sleeps via the OS for the bulk of the requested duration and busy-waits
/// only the last slice, trading a little precision for far less burned
/// CPU on longer waits. Not required by spec.md but a natural enrichment
/// for a host running many emulated machines at once; off by default.
pub struct HybridClock {
    epoch: Instant,
    os_sleep_floor_micros: u64,
}

impl HybridClock {
    /// `os_sleep_floor_micros` is the minimum remaining wait before this
    /// bothers handing control to the OS scheduler at all; below it, every
    /// wait is a pure busy-wait, same as `BusyWaitClock`.
    pub fn new(os_sleep_floor_micros: u64) -> HybridClock {
        HybridClock { epoch: Instant::now(), os_sleep_floor_micros }
    }
}

impl Clock for HybridClock {
    fn now_micros(&self) -> u64 {
        self.epoch.elapsed().as_micros() as u64
    }

    fn sleep_micros(&self, micros: u64) {
        if micros > self.os_sleep_floor_micros {
            std::thread::sleep(Duration::from_micros(
                micros - self.os_sleep_floor_micros,
            ));
        }
        let target = self.epoch.elapsed() + Duration::from_micros(micros.min(self.os_sleep_floor_micros));
        while self.epoch.elapsed() < target {
            std::hint::spin_loop();
        }
    }
}
