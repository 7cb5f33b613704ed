//! Junction Wave - interactive p-n junction wave field visualizer
//!
//! Core modules:
//! - `sim`: Deterministic wave-field simulation (grid state, perturbation, integration)
//! - `view`: Cumulative-rotation view transform and color classification
//! - `renderer`: Render-ready buffer contract for the presentation backend
//! - `platform`: Input sampling contract for the windowing collaborator
//! - `settings`: Runtime configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod view;

pub use settings::Settings;

/// Simulation and display constants
pub mod consts {
    /// Grid cell budget; the grid is floor(sqrt(CELL_COUNT)) cells per side
    pub const CELL_COUNT: usize = 131_072;
    /// Fixed integrator timestep
    pub const DT: f32 = 1e-6;
    /// Wave propagation speed
    pub const WAVE_SPEED: f32 = 1.0;
    /// Exponential velocity damping rate
    pub const DAMPING: f32 = 100_000.0;

    /// Per-cell acceptor injection probability on the p side (left half)
    pub const ACCEPTOR_PROB: f32 = 0.001;
    /// Donor injection draw threshold on the n side (draw > threshold injects)
    pub const DONOR_THRESHOLD: f32 = 0.99;
    /// Height forced by an acceptor injection
    pub const ACCEPTOR_LEVEL: f32 = -0.5;
    /// Height forced by a donor injection
    pub const DONOR_LEVEL: f32 = 0.5;

    /// Bias clamp covers rows below this fraction of the grid...
    pub const BIAS_LOW_FRACTION: f32 = 0.2;
    /// ...and rows above this fraction
    pub const BIAS_HIGH_FRACTION: f32 = 0.8;
    /// Height clamped onto the low-index bias rows
    pub const BIAS_LOW_LEVEL: f32 = 0.5;
    /// Height clamped onto the high-index bias rows
    pub const BIAS_HIGH_LEVEL: f32 = -1.0;

    /// Half-width of the mid color band around zero height
    pub const BAND_HALF_WIDTH: f32 = 0.1;

    /// Screen-space center of the orthographic projection
    pub const SCREEN_CENTER: f32 = 0.5;
    /// Projection scale for the axis triad
    pub const AXIS_SCALE: f32 = 0.3;
    /// Projection scale for grid points
    pub const POINT_SCALE: f32 = 0.5;

    /// Axis line thickness consumed by the renderer
    pub const AXIS_LINE_WIDTH: f32 = 2e-3;
    /// Grid point radius consumed by the renderer
    pub const POINT_RADIUS: f32 = 9e-4;
    /// Logical window resolution (square)
    pub const WINDOW_SIZE: u32 = 1000;
}

/// Map a grid index to its fixed coordinate in [-1, 1]
#[inline]
pub fn grid_coord(index: usize, dim: usize) -> f32 {
    index as f32 / dim as f32 * 2.0 - 1.0
}
