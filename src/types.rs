//! Core types shared by the controller and the robot loop.

/// The seven strip animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// Hue sweep across the strip.
    Rainbow,

    /// Whole strip on/off in the chosen color.
    Blink,

    /// Sinusoidal brightness of the chosen color.
    Pulse,

    /// Three-pixel segment bouncing end to end.
    Bounce,

    /// Random pixels lit each tick.
    Sparkle,

    /// Blade extending from pixel 0, with an occasional flicker.
    Lightsaber,

    /// Red/blue halves swapping.
    PoliceLights,
}

impl Pattern {
    /// Number of patterns.
    pub const COUNT: usize = 7;

    /// All patterns, in index order.
    pub const ALL: [Pattern; Self::COUNT] = [
        Pattern::Rainbow,
        Pattern::Blink,
        Pattern::Pulse,
        Pattern::Bounce,
        Pattern::Sparkle,
        Pattern::Lightsaber,
        Pattern::PoliceLights,
    ];

    /// Looks up a pattern by index, `None` if `index >= COUNT`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this pattern in [`Pattern::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// What a controller tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Sensor inactive and the strip already dark. Nothing was pushed.
    Idle,

    /// Sensor just went inactive. The strip was blanked and pushed.
    Blanked,

    /// Sensor just went active. A fresh pattern and color were drawn and the
    /// first frame pushed.
    Activated(Pattern),

    /// Sensor still active. The running pattern advanced one frame.
    Animated(Pattern),
}

impl TickOutcome {
    /// Returns true if the sensor was active on this tick.
    pub fn is_active(&self) -> bool {
        matches!(self, TickOutcome::Activated(_) | TickOutcome::Animated(_))
    }

    /// The pattern that rendered this tick, if any.
    pub fn pattern(&self) -> Option<Pattern> {
        match self {
            TickOutcome::Activated(pattern) | TickOutcome::Animated(pattern) => Some(*pattern),
            TickOutcome::Idle | TickOutcome::Blanked => None,
        }
    }
}
