//! Shared test bench for clockbox integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use clockbox::{ClockBox, ClockConfig, ClockEvent, Inputs, Outputs, TimeDigits};

/// Tick rate used by the bench. Low enough to keep minute-long runs quick.
pub const TICKS_PER_SECOND: u32 = 100;

/// Ticks a button is held, then released, for a short press.
pub const PRESS_TICKS: u32 = TICKS_PER_SECOND / 20 + 10;

// ============================================================================
// Bench
// ============================================================================

/// Button inputs the bench can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Mode,
    Start,
    Stop,
}

/// Drives a `ClockBox` tick by tick, holding input levels between calls
/// and recording every event raised.
pub struct Bench {
    pub dut: ClockBox,
    inputs: Inputs,
    last: Option<Outputs>,
    events: heapless::Vec<ClockEvent, 256>,
}

impl Bench {
    pub fn new() -> Self {
        Self::with_config(bench_config())
    }

    pub fn with_config(config: ClockConfig) -> Self {
        Self {
            dut: ClockBox::new(config),
            inputs: Inputs::IDLE,
            last: None,
            events: heapless::Vec::new(),
        }
    }

    /// Holds reset for two ticks, releases it, and runs one more tick.
    pub fn reset(&mut self) {
        self.inputs = Inputs {
            reset: true,
            ..Inputs::IDLE
        };
        self.tick();
        self.tick();
        self.inputs.reset = false;
        self.tick();
    }

    /// Sets a button level; it stays at that level until changed.
    pub fn set(&mut self, button: Button, level: bool) {
        match button {
            Button::Mode => self.inputs.mode = level,
            Button::Start => self.inputs.start = level,
            Button::Stop => self.inputs.stop = level,
        }
    }

    pub fn tick(&mut self) -> &Outputs {
        let outputs = self.dut.step(self.inputs);
        for event in outputs.events.iter() {
            let _ = self.events.push(*event);
        }
        self.last.insert(outputs)
    }

    pub fn wait_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn wait_seconds(&mut self, seconds: u32) {
        self.wait_ticks(seconds * TICKS_PER_SECOND);
    }

    /// Presses a button briefly and releases it for the same duration.
    pub fn tap(&mut self, button: Button) {
        self.set(button, true);
        self.wait_ticks(PRESS_TICKS);
        self.set(button, false);
        self.wait_ticks(PRESS_TICKS);
    }

    /// Holds a button for `seconds`, then releases it for one tick.
    pub fn hold(&mut self, button: Button, seconds: u32) {
        self.set(button, true);
        self.wait_seconds(seconds);
        self.set(button, false);
        self.tick();
    }

    pub fn outputs(&self) -> &Outputs {
        self.last.as_ref().expect("bench has not ticked yet")
    }

    pub fn time(&self) -> TimeDigits {
        self.outputs().cur_time
    }

    pub fn events(&self) -> &[ClockEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn count_events(&self, wanted: ClockEvent) -> usize {
        self.events.iter().filter(|event| **event == wanted).count()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn bench_config() -> ClockConfig {
    ClockConfig::builder()
        .ticks_per_second(TICKS_PER_SECOND)
        .build()
        .unwrap()
}

/// Asserts the displayed digits, `cur_time3` first.
pub fn assert_time(bench: &Bench, d3: u8, d2: u8, d1: u8, d0: u8) {
    assert_eq!(
        bench.time(),
        TimeDigits::new(d3, d2, d1, d0),
        "displayed {}",
        bench.time()
    );
}
