#![no_std]
#![no_main]

//! Smallest firmware that links the whole controller, for measuring the
//! library's flash and RAM footprint.

use cortex_m_rt::entry;
use obstacle_lights::config::{self, STRIP_LENGTH};
use obstacle_lights::{DriveConfig, DriveMotor, LedStrip, ObstacleSensor, Robot};
use palette::Srgb;
use panic_halt as _;

// ============================================================================
// Minimal hardware implementations
// ============================================================================

/// Zero-size strip for measuring library overhead
pub struct MinimalStrip;

impl LedStrip for MinimalStrip {
    fn write(&mut self, frame: &[Srgb]) {
        core::hint::black_box(frame);
    }
}

/// Sensor that toggles every 500 reads so every pattern path is linked
pub struct MinimalSensor {
    reads: u32,
}

impl ObstacleSensor for MinimalSensor {
    fn is_triggered(&mut self) -> bool {
        self.reads = self.reads.wrapping_add(1);
        core::hint::black_box(self.reads / 500 % 2 == 1)
    }
}

pub struct MinimalMotor;

impl DriveMotor for MinimalMotor {
    fn configure(&mut self, config: &DriveConfig) {
        core::hint::black_box(config);
    }

    fn set_duty(&mut self, duty: f32) {
        core::hint::black_box(duty);
    }
}

#[entry]
fn main() -> ! {
    let rng = fastrand::Rng::with_seed(0x5eed);
    let sensor = MinimalSensor { reads: 0 };

    let robot = Robot::<_, _, _, _, STRIP_LENGTH>::new(sensor, MinimalStrip, MinimalMotor, rng, config::DRIVE);

    match robot {
        Ok(mut robot) => loop {
            core::hint::black_box(robot.tick());
        },
        Err(_) => loop {
            cortex_m::asm::nop();
        },
    }
}
