//! Shared test infrastructure for digit-matrix integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};

use digit_matrix::{
    ButtonPin, DIGIT_GLYPHS, DelaySource, PixelBus, PixelWord, Srgb, StatusLed, TimeDuration,
    TimeInstant, TimeSource, color,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TestDuration {
    /// Convenience constructor from milliseconds
    pub fn millis(millis: u64) -> Self {
        TestDuration(millis * 1_000)
    }
}

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
    }
}

/// Mock instant type for testing (microsecond tick count)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TestInstant {
    /// Convenience constructor from milliseconds
    pub fn at_millis(millis: u64) -> Self {
        TestInstant(millis * 1_000)
    }
}

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockClock {
    current_time: Cell<TestInstant>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance_millis(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis * 1_000));
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Button Pin
// ============================================================================

/// Scripted button level, shared between the test and the owned pin
pub struct LevelState(Cell<bool>);

impl LevelState {
    pub fn pressed() -> Self {
        LevelState(Cell::new(true))
    }

    pub fn released() -> Self {
        LevelState(Cell::new(false))
    }

    pub fn set_pressed(&self, pressed: bool) {
        self.0.set(pressed);
    }
}

/// Button pin whose level the test script controls through a [`LevelState`]
pub struct LevelPin<'l>(pub &'l LevelState);

impl ButtonPin for LevelPin<'_> {
    fn is_pressed(&mut self) -> bool {
        self.0.0.get()
    }
}

// ============================================================================
// Recording Pixel Bus
// ============================================================================

/// Log of every word written to the bus, shared between test and bus
pub struct BusLog(RefCell<heapless::Vec<u32, 512>>);

impl BusLog {
    pub fn new() -> Self {
        BusLog(RefCell::new(heapless::Vec::new()))
    }

    /// Total words written so far
    pub fn word_count(&self) -> usize {
        self.0.borrow().len()
    }

    /// Number of complete 25-word frames written so far
    pub fn frame_count(&self) -> usize {
        self.word_count() / 25
    }

    /// Returns the `index`th 25-word frame written to the bus
    pub fn frame(&self, index: usize) -> [u32; 25] {
        let log = self.0.borrow();
        let start = index * 25;
        core::array::from_fn(|i| log[start + i])
    }

    /// Returns the most recent complete frame
    pub fn last_frame(&self) -> [u32; 25] {
        assert!(self.frame_count() > 0, "no frame written yet");
        self.frame(self.frame_count() - 1)
    }
}

/// Pixel bus that records every written word into a shared [`BusLog`]
pub struct RecordingBus<'l>(pub &'l BusLog);

impl PixelBus for RecordingBus<'_> {
    fn write(&mut self, word: PixelWord) {
        self.0.0.borrow_mut().push(word.value()).unwrap();
    }
}

// ============================================================================
// Recording Status LED and Delay Source
// ============================================================================

/// One observed action of the blink cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkEvent {
    /// Status output driven to the given level
    Level(bool),
    /// Blocking delay of the given length in microseconds
    Sleep(u64),
}

/// Interleaved log of levels and sleeps, shared by both blink mocks
pub struct BlinkLog(RefCell<heapless::Vec<BlinkEvent, 64>>);

impl BlinkLog {
    pub fn new() -> Self {
        BlinkLog(RefCell::new(heapless::Vec::new()))
    }

    pub fn events(&self) -> heapless::Vec<BlinkEvent, 64> {
        self.0.borrow().clone()
    }

    pub fn toggle_count(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|event| matches!(event, BlinkEvent::Level(_)))
            .count()
    }

    fn push(&self, event: BlinkEvent) {
        self.0.borrow_mut().push(event).unwrap();
    }
}

/// Status LED that records level changes instead of driving a pin
pub struct RecordingStatusLed<'l>(pub &'l BlinkLog);

impl StatusLed for RecordingStatusLed<'_> {
    fn set_state(&mut self, on: bool) {
        self.0.push(BlinkEvent::Level(on));
    }
}

/// Delay source that records requested durations instead of sleeping
pub struct RecordingDelay<'l>(pub &'l BlinkLog);

impl DelaySource<TestDuration> for RecordingDelay<'_> {
    fn delay(&mut self, duration: TestDuration) {
        self.0.push(BlinkEvent::Sleep(duration.as_micros()));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds the wire words expected for a digit under a foreground color
pub fn expected_frame(digit: u8, foreground: Srgb<u8>) -> [u32; 25] {
    let glyph = &DIGIT_GLYPHS[digit as usize];
    let fg = color::pack(foreground).value();
    core::array::from_fn(|i| if glyph.is_lit(i) { fg } else { 0 })
}
