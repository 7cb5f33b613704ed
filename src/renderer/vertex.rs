//! Vertex type for 2D point/line rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and RGB color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 2], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Colors for display elements
pub mod colors {
    pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
    pub const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
    pub const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

    /// Axis triad colors, one per direction (-x, +x, -y, +y, -z, +z)
    pub const AXIS: [[f32; 3]; 6] = [RED, RED, GREEN, GREEN, BLUE, BLUE];

    /// Acceptor-depressed heights
    pub const BAND_LOW: [f32; 3] = RED;
    /// Heights inside the band around zero
    pub const BAND_MID: [f32; 3] = GREEN;
    /// Donor-raised heights
    pub const BAND_HIGH: [f32; 3] = BLUE;
}
