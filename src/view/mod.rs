//! View transform: cumulative rotation, projection, color classification
//!
//! The rotation accumulator is driven by pointer drag and applied as
//! `R_y(yaw) * R_x(pitch)` to the axis triad and to every grid point's full
//! 3D position. Projection is orthographic with distinct scales for the axis
//! triad and the grid; both must be preserved exactly for visual parity.

use glam::{Mat3, Vec2, Vec3};
use rayon::prelude::*;

use crate::consts::{AXIS_SCALE, BAND_HALF_WIDTH, POINT_SCALE, SCREEN_CENTER};
use crate::renderer::vertex::{Vertex, colors};
use crate::renderer::Frame;
use crate::sim::WaveField;

/// Reference axis directions: -x, +x, -y, +y, -z, +z
pub const AXIS_DIRECTIONS: [Vec3; 6] = [
    Vec3::NEG_X,
    Vec3::X,
    Vec3::NEG_Y,
    Vec3::Y,
    Vec3::NEG_Z,
    Vec3::Z,
];

/// Cumulative rotation state plus pointer tracking
#[derive(Debug, Clone)]
pub struct OrbitView {
    /// Accumulated (yaw, pitch) from pointer drag
    pub rotation: Vec2,
    prev_cursor: Vec2,
}

impl Default for OrbitView {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitView {
    pub fn new() -> Self {
        Self {
            rotation: Vec2::ZERO,
            prev_cursor: Vec2::ZERO,
        }
    }

    /// Track the cursor for one frame. The delta against the previous cursor
    /// is accumulated into the rotation only while `held`; the previous
    /// cursor updates every frame either way.
    pub fn track(&mut self, cursor: Vec2, held: bool) {
        if held {
            self.rotation += cursor - self.prev_cursor;
        }
        self.prev_cursor = cursor;
    }

    /// Rotation matrix for the current accumulator: yaw about Y composed
    /// after pitch about X.
    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_rotation_y(self.rotation.x) * Mat3::from_rotation_x(self.rotation.y)
    }
}

/// Display band for a cell height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    /// Height below the mid band (acceptor-depressed)
    Low,
    /// Height within the band around zero
    Mid,
    /// Height above the mid band (donor-raised)
    High,
}

impl ColorBand {
    /// Classify a pre-rotation height
    #[inline]
    pub fn classify(z: f32) -> Self {
        if z.abs() <= BAND_HALF_WIDTH {
            ColorBand::Mid
        } else if z < -BAND_HALF_WIDTH {
            ColorBand::Low
        } else {
            ColorBand::High
        }
    }

    pub fn color(self) -> [f32; 3] {
        match self {
            ColorBand::Low => colors::BAND_LOW,
            ColorBand::Mid => colors::BAND_MID,
            ColorBand::High => colors::BAND_HIGH,
        }
    }
}

/// Project a rotated axis-triad point to screen space
#[inline]
pub fn project_axis(p: Vec3) -> [f32; 2] {
    [
        SCREEN_CENTER + AXIS_SCALE * p.x,
        SCREEN_CENTER + AXIS_SCALE * p.y,
    ]
}

/// Project a rotated grid point to screen space
#[inline]
pub fn project_point(p: Vec3) -> [f32; 2] {
    [
        SCREEN_CENTER + POINT_SCALE * p.x,
        SCREEN_CENTER + POINT_SCALE * p.y,
    ]
}

/// Rotate, project, and classify the whole field into the frame buffers.
/// Colors are classified from the pre-rotation height.
pub fn project_frame(field: &WaveField, view: &OrbitView, frame: &mut Frame) {
    let rot = view.rotation_matrix();

    for (k, dir) in AXIS_DIRECTIONS.iter().enumerate() {
        let rotated = rot * *dir;
        frame.axis[k] = Vertex::new(project_axis(rotated), colors::AXIS[k]);
    }

    field
        .points
        .par_iter()
        .map(|p| {
            let band = ColorBand::classify(p.z);
            let rotated = rot * *p;
            Vertex::new(project_point(rotated), band.color())
        })
        .collect_into_vec(&mut frame.points);
}
