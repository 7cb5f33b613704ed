//! Platform abstraction layer
//!
//! The windowing collaborator (event polling, cursor, GUI checkbox) lives
//! outside the core; the frame loop consumes it through non-blocking
//! per-frame samples of the current input state.

use glam::Vec2;

/// Snapshot of external input for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    /// Cursor position in normalized window coordinates
    pub cursor: Vec2,
    /// Primary button held
    pub primary_held: bool,
    /// Voltage checkbox value
    pub voltage: bool,
    /// The window asked the loop to stop
    pub close_requested: bool,
}

/// Source of per-frame input samples. `sample` must not block.
pub trait InputSource {
    fn sample(&mut self) -> InputSample;
}

/// Deterministic input script for headless runs: drags an orbit during the
/// first quarter of the run, pulses the voltage flag during the third
/// quarter, then requests close.
#[derive(Debug)]
pub struct ScriptedInput {
    frame: u64,
    run_frames: u64,
}

impl ScriptedInput {
    pub fn new(run_frames: u64) -> Self {
        Self {
            frame: 0,
            run_frames,
        }
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> InputSample {
        let f = self.frame;
        self.frame += 1;
        if f >= self.run_frames {
            return InputSample {
                close_requested: true,
                ..Default::default()
            };
        }

        let t = f as f32 / self.run_frames as f32;
        let dragging = t < 0.25;
        let cursor = if dragging {
            Vec2::new(0.5 + t, 0.5 + 0.5 * t)
        } else {
            Vec2::new(0.75, 0.625)
        };
        InputSample {
            cursor,
            primary_held: dragging,
            voltage: (0.5..0.75).contains(&t),
            close_requested: false,
        }
    }
}
