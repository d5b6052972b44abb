//! Motor drive: the hardware trait, its static configuration and validation.

/// Trait for abstracting a closed-loop motor controller.
///
/// Implement this for your motor controller (CAN, PWM, etc.). Like the strip,
/// implementations handle hardware errors internally.
pub trait DriveMotor {
    /// Loads PID gains and the output clamp. Called once at start-up.
    fn configure(&mut self, config: &DriveConfig);

    /// Commands a duty cycle in `-1.0..=1.0`.
    fn set_duty(&mut self, duty: f32);

    /// Persists the configuration to controller flash, if supported.
    fn persist(&mut self) {}
}

/// Closed-loop gains handed to the motor controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PidGains {
    pub p: f32,
    pub i: f32,
    pub d: f32,
    /// Error band outside of which the integral term is ignored. Zero disables it.
    pub i_zone: f32,
    /// Velocity feed-forward.
    pub ff: f32,
}

impl PidGains {
    fn is_finite(&self) -> bool {
        [self.p, self.i, self.d, self.i_zone, self.ff]
            .iter()
            .all(|gain| gain.is_finite())
    }
}

/// Controller output clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputRange {
    pub min: f32,
    pub max: f32,
}

impl OutputRange {
    /// Clamps `duty` into the range. Never panics, even on an inverted range.
    #[inline]
    pub fn clamp(&self, duty: f32) -> f32 {
        duty.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(&self, duty: f32) -> bool {
        (self.min..=self.max).contains(&duty)
    }
}

/// Everything the motor needs: gains, clamp and the duty used while the
/// sensor is triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveConfig {
    pub gains: PidGains,
    pub output: OutputRange,
    pub active_duty: f32,
}

impl DriveConfig {
    /// Checks the configuration before it is sent to the controller.
    ///
    /// # Errors
    /// * `NonFiniteGain` - A gain is NaN or infinite
    /// * `InvalidOutputRange` - The clamp is inverted, not finite, or outside -1.0..=1.0
    /// * `DutyOutOfRange` - `active_duty` lies outside the clamp
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gains.is_finite() {
            return Err(ConfigError::NonFiniteGain);
        }

        let OutputRange { min, max } = self.output;
        if !(min.is_finite() && max.is_finite()) || min > max || min < -1.0 || max > 1.0 {
            return Err(ConfigError::InvalidOutputRange { min, max });
        }

        if !self.output.contains(self.active_duty) {
            return Err(ConfigError::DutyOutOfRange {
                duty: self.active_duty,
            });
        }

        Ok(())
    }

    /// Duty to command for a sensor state, clamped into the output range.
    pub fn duty(&self, active: bool) -> f32 {
        let duty = if active { self.active_duty } else { 0.0 };
        self.output.clamp(duty)
    }
}

/// Drive configuration errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A PID gain is NaN or infinite.
    NonFiniteGain,

    /// Output clamp is inverted, not finite, or wider than full duty.
    InvalidOutputRange { min: f32, max: f32 },

    /// The active duty cannot be reached within the output clamp.
    DutyOutOfRange { duty: f32 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NonFiniteGain => {
                write!(f, "PID gains must be finite")
            }
            ConfigError::InvalidOutputRange { min, max } => {
                write!(
                    f,
                    "invalid output range {}..={} (must be ordered and within -1.0..=1.0)",
                    min, max
                )
            }
            ConfigError::DutyOutOfRange { duty } => {
                write!(f, "active duty {} is outside the output range", duty)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
