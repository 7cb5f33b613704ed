//! Output contract for the presentation backend
//!
//! The core fills a [`Frame`] of render-ready vertices each tick and hands it
//! to a [`Renderer`]; how presentation happens (GPU upload, windowing, frame
//! pacing) is entirely the implementation's concern. Vertices are `Pod` so a
//! GPU backend can upload the slices directly.

use std::fmt;

pub mod vertex;

pub use vertex::{Vertex, colors};

pub use crate::consts::{AXIS_LINE_WIDTH, POINT_RADIUS, WINDOW_SIZE};

/// One frame of renderable geometry, reused across frames
#[derive(Debug, Clone)]
pub struct Frame {
    /// Axis triad line-list vertices, drawn with [`AXIS_LINE_WIDTH`]
    pub axis: [Vertex; 6],
    /// Grid point cloud, drawn with [`POINT_RADIUS`]
    pub points: Vec<Vertex>,
}

impl Frame {
    /// Frame with point capacity preallocated for `points` cells
    pub fn with_capacity(points: usize) -> Self {
        Self {
            axis: [Vertex::new([0.0; 2], [0.0; 3]); 6],
            points: Vec::with_capacity(points),
        }
    }
}

/// Presentation failure reported by a backend
#[derive(Debug)]
pub enum PresentError {
    /// The presentation surface was lost and must be recreated
    SurfaceLost,
    /// The backend is out of memory
    OutOfMemory,
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::SurfaceLost => write!(f, "presentation surface lost"),
            PresentError::OutOfMemory => write!(f, "presentation backend out of memory"),
        }
    }
}

impl std::error::Error for PresentError {}

/// Consumer of per-frame geometry. `present` returns once the frame has been
/// handed off, which is what paces the loop.
pub trait Renderer {
    fn present(&mut self, frame: &Frame) -> Result<(), PresentError>;
}

/// Backend stand-in that counts and inspects frames; used by the headless
/// demo and by loop tests.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames_presented: u64,
    pub last_point_count: usize,
}

impl Renderer for HeadlessRenderer {
    fn present(&mut self, frame: &Frame) -> Result<(), PresentError> {
        self.frames_presented += 1;
        self.last_point_count = frame.points.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_is_tightly_packed() {
        // 2 position + 3 color floats, no padding: backends rely on this
        // layout when casting the buffers for upload.
        assert_eq!(std::mem::size_of::<Vertex>(), 5 * 4);
        let v = [Vertex::new([0.25, 0.75], [1.0, 0.0, 0.0])];
        let raw: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(raw, &[0.25, 0.75, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_headless_renderer_counts_frames() {
        let mut renderer = HeadlessRenderer::default();
        let mut frame = Frame::with_capacity(4);
        frame.points.push(Vertex::new([0.5, 0.5], colors::BAND_MID));
        renderer.present(&frame).unwrap();
        renderer.present(&frame).unwrap();
        assert_eq!(renderer.frames_presented, 2);
        assert_eq!(renderer.last_point_count, 1);
    }
}
