//! Sensor-driven animation controller.
//!
//! Provides [`AnimationController`], which owns the pixel frame and the
//! animation state, detects sensor edges and pushes frames to the strip. Also
//! defines the [`LedStrip`] trait for hardware abstraction.

use crate::animation::{self, AnimationState};
use crate::colors::{BLACK, PALETTE};
use crate::frame::PixelBuffer;
use crate::random::{RandomSource, bounded_index};
use crate::types::{Pattern, TickOutcome};
use palette::Srgb;

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your strip driver (PWM, SPI, RMT, etc.) to allow the
/// controller to push frames to it.
pub trait LedStrip {
    /// Prepares the driver for a strip of `length` pixels. Called once before
    /// the first frame.
    fn start(&mut self, length: usize) {
        let _ = length;
    }

    /// Transmits one frame.
    ///
    /// Color components are in the range 0.0-1.0. Implementations should
    /// convert these to the strip's native format. Handle any hardware errors
    /// internally - this method cannot fail.
    fn write(&mut self, frame: &[Srgb]);
}

/// Renders the strip from a per-tick sensor reading.
///
/// While the sensor is inactive the strip stays dark. On the tick the sensor
/// becomes active a pattern and a palette color are drawn at random; they stay
/// fixed until the sensor goes inactive again.
///
/// # Type Parameters
/// * `L` - LED strip implementation type
/// * `R` - Random source type
/// * `N` - Number of pixels on the strip
pub struct AnimationController<L: LedStrip, R: RandomSource, const N: usize> {
    strip: L,
    rng: R,
    frame: PixelBuffer<N>,
    state: AnimationState,
}

impl<L: LedStrip, R: RandomSource, const N: usize> AnimationController<L, R, N> {
    /// Creates an idle controller and pushes a dark frame to the strip.
    pub fn new(mut strip: L, rng: R) -> Self {
        let frame = PixelBuffer::new();
        strip.start(N);
        strip.write(frame.as_slice());

        Self {
            strip,
            rng,
            frame,
            state: AnimationState::new(),
        }
    }

    /// Runs one tick with the current sensor reading.
    ///
    /// # Returns
    /// * `TickOutcome::Activated` - Rising edge, new pattern drawn and rendered
    /// * `TickOutcome::Animated` - Sensor held, pattern advanced one frame
    /// * `TickOutcome::Blanked` - Falling edge, strip turned off
    /// * `TickOutcome::Idle` - Sensor inactive and strip already off, nothing pushed
    pub fn update(&mut self, triggered: bool) -> TickOutcome {
        match (triggered, self.state.idle) {
            (true, true) => {
                self.activate_random();
                self.render();
                TickOutcome::Activated(self.state.pattern)
            }
            (true, false) => {
                self.render();
                TickOutcome::Animated(self.state.pattern)
            }
            (false, false) => {
                self.blank();
                TickOutcome::Blanked
            }
            (false, true) => TickOutcome::Idle,
        }
    }

    /// Activates `pattern` with `color` as a rising edge would, without
    /// drawing either at random. Nothing is rendered until the next
    /// [`update`](Self::update).
    pub fn select(&mut self, pattern: Pattern, color: Srgb) {
        #[cfg(feature = "defmt")]
        defmt::debug!("selected {}", pattern);

        self.state.activate(pattern, color);
    }

    fn activate_random(&mut self) {
        let pattern = Pattern::ALL[bounded_index(&mut self.rng, Pattern::COUNT)];
        let color_index = bounded_index(&mut self.rng, PALETTE.len());

        #[cfg(feature = "defmt")]
        defmt::debug!("activated {} with palette color {}", pattern, color_index);

        self.state.activate(pattern, PALETTE[color_index]);
    }

    fn render(&mut self) {
        animation::advance(&mut self.state, &mut self.frame, &mut self.rng);
        self.strip.write(self.frame.as_slice());
    }

    fn blank(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("sensor clear, blanking strip");

        self.frame.fill(BLACK);
        self.strip.write(self.frame.as_slice());
        self.state.deactivate();
    }

    /// Returns the animation state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Returns the animation state for tuning, e.g. to move the cursor.
    pub fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    /// Returns the last rendered frame.
    pub fn frame(&self) -> &PixelBuffer<N> {
        &self.frame
    }

    /// Returns true if the strip is dark and waiting for the sensor.
    pub fn is_idle(&self) -> bool {
        self.state.idle
    }

    /// Returns the selected pattern, or `None` while idle.
    pub fn current_pattern(&self) -> Option<Pattern> {
        (!self.state.idle).then_some(self.state.pattern)
    }

    /// Returns the color chosen on activation.
    pub fn current_color(&self) -> Srgb {
        self.state.color
    }

    pub fn strip(&self) -> &L {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut L {
        &mut self.strip
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
