//! Fixed timestep frame driver
//!
//! Turns variable frame times into a whole number of fixed simulation steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    pub step_dt: f32,
    accumulator: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FrameClock {
    pub fn new(step_dt: f32) -> Self {
        Self {
            step_dt,
            accumulator: 0.0,
        }
    }

    /// Account for one rendered frame; returns how many steps to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step_dt && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.step_dt;
            substeps += 1;
        }
        substeps
    }

    /// Leftover time not yet simulated
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
