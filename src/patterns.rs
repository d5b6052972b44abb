//! The seven strip patterns.
//!
//! Each function renders exactly one frame and advances the state it owns in
//! [`AnimationState`]. They are called once per tick by
//! [`animation::advance`](crate::animation::advance); none of them blocks.

use crate::animation::{AnimationState, Flicker};
use crate::colors::{self, BLACK, BLUE, RED};
use crate::frame::PixelBuffer;
use crate::random::RandomSource;

/// Hue scale used by the rainbow, in half-degree steps.
pub const HUE_RANGE: i32 = 180;

/// Hue advance per tick.
pub const RAINBOW_STEP: i32 = 3;

/// Rainbow brightness (128 of 255).
pub const RAINBOW_VALUE: f32 = 128.0 / 255.0;

/// Ticks between blink flips.
pub const BLINK_PERIOD: u32 = 20;

/// Pulse phase multiplier, radians per tick.
pub const PULSE_RATE: f32 = 0.075;

/// Lit segment width for bounce.
pub const BOUNCE_WIDTH: usize = 3;

/// Probability that a sparkle pixel is lit on a given tick.
pub const SPARKLE_DENSITY: f32 = 0.2;

/// Per-tick probability of a flicker once the blade is fully out.
pub const FLICKER_CHANCE: f32 = 0.01;

/// Ticks spent in each flicker phase (about 100 ms at 50 Hz).
pub const FLICKER_TICKS: u8 = 5;

/// Ticks between police-light swaps.
pub const POLICE_PERIOD: u32 = 20;

#[inline]
fn strip_len<const N: usize>() -> i32 {
    i32::try_from(N).unwrap_or(i32::MAX)
}

/// Hue sweep spread over the whole strip, shifting by [`RAINBOW_STEP`] each tick.
pub fn rainbow<const N: usize>(state: &mut AnimationState, frame: &mut PixelBuffer<N>) {
    let len = strip_len::<N>();
    let phase = state.cursor.rem_euclid(HUE_RANGE);

    for i in 0..len {
        let hue = (phase + i * HUE_RANGE / len) % HUE_RANGE;
        // the strip's hue scale is half-degrees
        frame.set(i as usize, colors::hsv(hue as f32 * 2.0, 1.0, RAINBOW_VALUE));
    }

    state.cursor = (phase + RAINBOW_STEP) % HUE_RANGE;
}

/// Whole strip on and off in the chosen color.
pub fn blink<const N: usize>(state: &mut AnimationState, frame: &mut PixelBuffer<N>) {
    if state.blink.advance(BLINK_PERIOD) {
        frame.fill(state.color);
    } else {
        frame.fill(BLACK);
    }
}

/// Chosen color breathing with a sine envelope.
pub fn pulse<const N: usize>(state: &mut AnimationState, frame: &mut PixelBuffer<N>) {
    let brightness = 0.5 + 0.5 * libm::sinf(state.cursor as f32 * PULSE_RATE);
    frame.fill(colors::scaled(state.color, brightness));
    state.cursor = state.cursor.wrapping_add(1);
}

/// A [`BOUNCE_WIDTH`]-pixel segment sliding end to end.
pub fn bounce<const N: usize>(state: &mut AnimationState, frame: &mut PixelBuffer<N>) {
    frame.fill(BLACK);
    if N == 0 {
        return;
    }

    if state.cursor < 0 {
        state.cursor = 0;
        state.bounce_forward = true;
    }

    let first = state.cursor as usize % N;
    for k in 0..BOUNCE_WIDTH {
        frame.set((first + k) % N, state.color);
    }

    let last_start = strip_len::<N>() - BOUNCE_WIDTH as i32;
    if state.bounce_forward {
        state.cursor = state.cursor.saturating_add(1);
        if state.cursor >= last_start {
            state.bounce_forward = false;
        }
    } else {
        state.cursor = state.cursor.saturating_sub(1);
        if state.cursor <= 0 {
            state.bounce_forward = true;
        }
    }
    // strips shorter than the segment would otherwise step outside it
    state.cursor = state.cursor.clamp(0, last_start.max(0));
}

/// Each pixel independently lit with probability [`SPARKLE_DENSITY`].
pub fn sparkle<R, const N: usize>(state: &mut AnimationState, frame: &mut PixelBuffer<N>, rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in 0..N {
        let color = if rng.chance() < SPARKLE_DENSITY {
            state.color
        } else {
            BLACK
        };
        frame.set(i, color);
    }
}

/// Blade growing from pixel 0, flickering now and then once fully out.
///
/// The blade only ever extends: `extending` is never cleared, so once the
/// cursor passes the end of the strip it stays there.
pub fn lightsaber<R, const N: usize>(
    state: &mut AnimationState,
    frame: &mut PixelBuffer<N>,
    rng: &mut R,
) where
    R: RandomSource + ?Sized,
{
    let len = strip_len::<N>();

    if state.flicker == Flicker::Off && state.cursor > len && rng.chance() < FLICKER_CHANCE {
        #[cfg(feature = "defmt")]
        defmt::trace!("lightsaber flicker");
        state.flicker = Flicker::Flash(FLICKER_TICKS);
    }

    match state.flicker {
        Flicker::Flash(remaining) => {
            frame.fill(state.color);
            state.flicker = if remaining > 1 {
                Flicker::Flash(remaining - 1)
            } else {
                Flicker::Blank(FLICKER_TICKS)
            };
        }
        Flicker::Blank(remaining) => {
            frame.fill(BLACK);
            state.flicker = if remaining > 1 {
                Flicker::Blank(remaining - 1)
            } else {
                Flicker::Off
            };
        }
        Flicker::Off => {
            let lit = state.cursor.clamp(0, len) as usize;
            frame.fill_range(0..lit, state.color);

            if state.extending {
                state.cursor = state.cursor.saturating_add(1).min(len.saturating_add(1));
            } else {
                state.cursor = state.cursor.saturating_sub(1).max(0);
            }
        }
    }
}

/// Strip split in halves, red and blue swapping every [`POLICE_PERIOD`] ticks.
pub fn police_lights<const N: usize>(state: &mut AnimationState, frame: &mut PixelBuffer<N>) {
    let half = N / 2;
    let (first, second) = if state.police.advance(POLICE_PERIOD) {
        (RED, BLUE)
    } else {
        (BLUE, RED)
    };

    frame.fill_range(0..half, first);
    frame.fill_range(half..N, second);
}
