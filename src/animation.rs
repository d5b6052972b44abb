//! Animation state and per-tick pattern dispatch.
//!
//! [`AnimationState`] holds everything the patterns remember between ticks.
//! There is exactly one instance, owned by the
//! [`AnimationController`](crate::controller::AnimationController).

use crate::colors::BLACK;
use crate::frame::PixelBuffer;
use crate::patterns;
use crate::random::RandomSource;
use crate::types::Pattern;
use palette::Srgb;

/// A flag that flips every `period` ticks.
///
/// The counter is incremented before it is compared, so with a period of 20
/// the first flip happens on the 20th tick, the second on the 40th.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggle {
    ticks: u32,
    on: bool,
}

impl Toggle {
    /// A toggle that starts in the on state with its counter at zero.
    pub const fn new() -> Self {
        Self { ticks: 0, on: true }
    }

    /// Advances one tick and returns the (possibly flipped) state.
    pub fn advance(&mut self, period: u32) -> bool {
        self.ticks += 1;
        if self.ticks >= period {
            self.on = !self.on;
            self.ticks = 0;
        }
        self.on
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Ticks counted since the last flip.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightsaber flicker sub-state. Counts are ticks remaining in the phase,
/// including the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flicker {
    /// Normal sweep.
    #[default]
    Off,

    /// Whole strip in the chosen color.
    Flash(u8),

    /// Whole strip dark before the sweep resumes.
    Blank(u8),
}

/// Mutable state carried between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub(crate) pattern: Pattern,
    pub(crate) color: Srgb,
    pub(crate) cursor: i32,
    pub(crate) blink: Toggle,
    pub(crate) police: Toggle,
    pub(crate) bounce_forward: bool,
    pub(crate) extending: bool,
    pub(crate) flicker: Flicker,
    pub(crate) idle: bool,
}

impl AnimationState {
    /// The start-up state: idle, dark, nothing selected yet.
    pub const fn new() -> Self {
        Self {
            pattern: Pattern::Rainbow,
            color: BLACK,
            cursor: 0,
            blink: Toggle::new(),
            police: Toggle::new(),
            bounce_forward: true,
            extending: true,
            flicker: Flicker::Off,
            idle: true,
        }
    }

    /// A state that has just been activated with `pattern` and `color`.
    pub fn activated(pattern: Pattern, color: Srgb) -> Self {
        let mut state = Self::new();
        state.activate(pattern, color);
        state
    }

    /// Selects a pattern and color and restarts every per-pattern timer.
    pub(crate) fn activate(&mut self, pattern: Pattern, color: Srgb) {
        *self = Self {
            pattern,
            color,
            idle: false,
            ..Self::new()
        };
    }

    /// Marks the strip as dark. The selection is kept until the next
    /// activation replaces it.
    pub(crate) fn deactivate(&mut self) {
        self.idle = true;
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn color(&self) -> Srgb {
        self.color
    }

    /// Shared cursor: rainbow/pulse phase, bounce start index, lightsaber
    /// length.
    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    pub fn blink(&self) -> Toggle {
        self.blink
    }

    pub fn police(&self) -> Toggle {
        self.police
    }

    pub fn bouncing_forward(&self) -> bool {
        self.bounce_forward
    }

    pub fn extending(&self) -> bool {
        self.extending
    }

    pub fn flicker(&self) -> Flicker {
        self.flicker
    }

    /// Overrides the shared cursor.
    pub fn set_cursor(&mut self, cursor: i32) {
        self.cursor = cursor;
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one frame of the selected pattern into `frame`.
pub fn advance<R, const N: usize>(state: &mut AnimationState, frame: &mut PixelBuffer<N>, rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    match state.pattern {
        Pattern::Rainbow => patterns::rainbow(state, frame),
        Pattern::Blink => patterns::blink(state, frame),
        Pattern::Pulse => patterns::pulse(state, frame),
        Pattern::Bounce => patterns::bounce(state, frame),
        Pattern::Sparkle => patterns::sparkle(state, frame, rng),
        Pattern::Lightsaber => patterns::lightsaber(state, frame, rng),
        Pattern::PoliceLights => patterns::police_lights(state, frame),
    }
}
