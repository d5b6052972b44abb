//! Shared test infrastructure for obstacle-lights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use obstacle_lights::{DriveConfig, DriveMotor, LedStrip, ObstacleSensor, RandomSource};
use palette::Srgb;

// ============================================================================
// Mock LED strip
// ============================================================================

/// Mock strip that records the last pushed frame and counts pushes
pub struct MockStrip {
    started: Option<usize>,
    writes: usize,
    last_frame: heapless::Vec<Srgb, 64>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            started: None,
            writes: 0,
            last_frame: heapless::Vec::new(),
        }
    }

    pub fn started(&self) -> Option<usize> {
        self.started
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn last_frame(&self) -> &[Srgb] {
        &self.last_frame
    }
}

impl LedStrip for MockStrip {
    fn start(&mut self, length: usize) {
        self.started = Some(length);
    }

    fn write(&mut self, frame: &[Srgb]) {
        self.writes += 1;
        self.last_frame.clear();
        let _ = self.last_frame.extend_from_slice(frame);
    }
}

// ============================================================================
// Mock motor
// ============================================================================

/// Mock motor controller recording configuration and duty commands
pub struct MockMotor {
    config: Option<DriveConfig>,
    duty: Option<f32>,
    commands: usize,
    persisted: bool,
    duty_history: heapless::Vec<f32, 32>,
}

impl MockMotor {
    pub fn new() -> Self {
        Self {
            config: None,
            duty: None,
            commands: 0,
            persisted: false,
            duty_history: heapless::Vec::new(),
        }
    }

    pub fn config(&self) -> Option<DriveConfig> {
        self.config
    }

    /// Last commanded duty
    pub fn duty(&self) -> Option<f32> {
        self.duty
    }

    pub fn commands(&self) -> usize {
        self.commands
    }

    pub fn persisted(&self) -> bool {
        self.persisted
    }

    /// First 32 duty commands
    pub fn duty_history(&self) -> &[f32] {
        &self.duty_history
    }
}

impl DriveMotor for MockMotor {
    fn configure(&mut self, config: &DriveConfig) {
        self.config = Some(*config);
    }

    fn set_duty(&mut self, duty: f32) {
        self.duty = Some(duty);
        self.commands += 1;
        let _ = self.duty_history.push(duty);
    }

    fn persist(&mut self) {
        self.persisted = true;
    }
}

// ============================================================================
// Scripted sensor
// ============================================================================

/// Sensor whose reading is set by the test
pub struct ScriptedSensor {
    triggered: bool,
    reads: usize,
}

impl ScriptedSensor {
    pub fn new() -> Self {
        Self {
            triggered: false,
            reads: 0,
        }
    }

    pub fn set(&mut self, triggered: bool) {
        self.triggered = triggered;
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ObstacleSensor for ScriptedSensor {
    fn is_triggered(&mut self) -> bool {
        self.reads += 1;
        self.triggered
    }
}

// ============================================================================
// Scripted random source
// ============================================================================

/// Random source replaying fixed values.
///
/// `index` draws come from `indices` in order, `chance` draws from `chances`.
/// Once a list is exhausted it keeps returning its fallback (0 and 0.99).
pub struct ScriptedRandom {
    indices: heapless::Vec<usize, 32>,
    chances: heapless::Vec<f32, 32>,
    next_index: usize,
    next_chance: usize,
}

impl ScriptedRandom {
    pub fn new(indices: &[usize], chances: &[f32]) -> Self {
        let mut rng = Self {
            indices: heapless::Vec::new(),
            chances: heapless::Vec::new(),
            next_index: 0,
            next_chance: 0,
        };
        let _ = rng.indices.extend_from_slice(indices);
        let _ = rng.chances.extend_from_slice(chances);
        rng
    }

    /// Picks `pattern` and palette entry `color` on the first activation
    pub fn selecting(pattern: usize, color: usize) -> Self {
        Self::new(&[pattern, color], &[])
    }

    pub fn index_draws(&self) -> usize {
        self.next_index
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, _bound: usize) -> usize {
        let value = self.indices.get(self.next_index).copied().unwrap_or(0);
        self.next_index += 1;
        value
    }

    fn chance(&mut self) -> f32 {
        let value = self.chances.get(self.next_chance).copied().unwrap_or(0.99);
        self.next_chance += 1;
        value
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use obstacle_lights::{BLACK, BLUE, GREEN, RED};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Count of pixels in a pushed frame that are not pure black
pub fn lit(frame: &[Srgb]) -> usize {
    frame.iter().filter(|pixel| **pixel != BLACK).count()
}
