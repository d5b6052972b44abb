//! The periodic control loop.

use crate::controller::{AnimationController, LedStrip};
use crate::drive::{ConfigError, DriveConfig, DriveMotor};
use crate::random::RandomSource;
use crate::sensor::ObstacleSensor;
use crate::types::TickOutcome;

/// Sensor, strip and motor wired together.
///
/// The scheduler calls [`tick`](Self::tick) at a fixed rate
/// ([`TICK_RATE_HZ`](crate::config::TICK_RATE_HZ)). Each tick reads the
/// sensor once, updates the strip and commands the motor.
pub struct Robot<S, L, M, R, const N: usize>
where
    S: ObstacleSensor,
    L: LedStrip,
    M: DriveMotor,
    R: RandomSource,
{
    sensor: S,
    motor: M,
    drive: DriveConfig,
    controller: AnimationController<L, R, N>,
}

impl<S, L, M, R, const N: usize> Robot<S, L, M, R, N>
where
    S: ObstacleSensor,
    L: LedStrip,
    M: DriveMotor,
    R: RandomSource,
{
    /// Validates `drive`, configures and stops the motor, persists its
    /// settings, then starts the strip dark.
    ///
    /// # Errors
    /// Returns the validation error if `drive` is rejected. Nothing is sent
    /// to the motor in that case.
    pub fn new(
        sensor: S,
        strip: L,
        mut motor: M,
        rng: R,
        drive: DriveConfig,
    ) -> Result<Self, ConfigError> {
        drive.validate()?;

        motor.configure(&drive);
        motor.set_duty(drive.duty(false));
        motor.persist();

        let controller = AnimationController::new(strip, rng);

        #[cfg(feature = "defmt")]
        defmt::info!("robot ready: {} pixels, active duty {}", N, drive.active_duty);

        Ok(Self {
            sensor,
            motor,
            drive,
            controller,
        })
    }

    /// Runs one control cycle.
    ///
    /// The motor is driven at the active duty on every active tick and
    /// stopped on the tick the sensor clears. Idle ticks touch nothing.
    pub fn tick(&mut self) -> TickOutcome {
        let triggered = self.sensor.is_triggered();
        let outcome = self.controller.update(triggered);

        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Blanked => self.motor.set_duty(self.drive.duty(false)),
            TickOutcome::Activated(_) | TickOutcome::Animated(_) => {
                self.motor.set_duty(self.drive.duty(true))
            }
        }

        outcome
    }

    pub fn controller(&self) -> &AnimationController<L, R, N> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut AnimationController<L, R, N> {
        &mut self.controller
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn drive(&self) -> &DriveConfig {
        &self.drive
    }
}
