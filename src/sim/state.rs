//! Grid state and the simulation context object
//!
//! The grid stores one `Vec3` per cell: `(x, y)` are fixed coordinates in
//! [-1, 1] derived from the cell index at construction; only `z` (the wave
//! height) evolves. The velocity field is a flat scalar array of the same
//! dimensions, mutated only by the integrator.

use glam::Vec3;

use crate::consts::{CELL_COUNT, WAVE_SPEED};
use crate::grid_coord;
use crate::view::OrbitView;

/// The simulated height field and its time derivative
#[derive(Debug, Clone)]
pub struct WaveField {
    /// Cells per side (row-major storage, row index varies along x)
    pub dim: usize,
    /// Spatial step used by the Laplacian, 1 / cell budget
    pub dx: f32,
    /// Per-cell positions; x/y fixed after construction, z is the height
    pub points: Vec<Vec3>,
    /// Per-cell height time-derivative
    pub vel: Vec<f32>,
    /// Elapsed simulated time
    pub time: f32,
}

impl WaveField {
    /// Flat zero-height field of `dim x dim` cells
    pub fn new(dim: usize) -> Self {
        Self::with_dx(dim, 1.0 / (dim * dim) as f32)
    }

    /// Field sized from a total cell budget: floor(sqrt(n)) cells per side,
    /// `dx = 1/n`. Budgets below 9 cells are clamped so the integrator
    /// interior stays non-empty.
    pub fn from_cell_count(n: usize) -> Self {
        let dim = (n as f64).sqrt() as usize;
        if dim < 3 {
            log::warn!("cell budget {n} gives a degenerate grid, clamping to 3x3");
            return Self::with_dx(3, 1.0 / 9.0);
        }
        Self::with_dx(dim, 1.0 / n as f32)
    }

    fn with_dx(dim: usize, dx: f32) -> Self {
        let mut points = Vec::with_capacity(dim * dim);
        for i in 0..dim {
            let x = grid_coord(i, dim);
            for j in 0..dim {
                points.push(Vec3::new(x, grid_coord(j, dim), 0.0));
            }
        }
        Self {
            dim,
            dx,
            points,
            vel: vec![0.0; dim * dim],
            time: 0.0,
        }
    }

    /// Total cell count
    pub fn cell_count(&self) -> usize {
        self.dim * self.dim
    }

    /// Flat index of cell `(i, j)`
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i * self.dim + j
    }

    /// Height at cell `(i, j)`
    #[inline]
    pub fn height(&self, i: usize, j: usize) -> f32 {
        self.points[self.idx(i, j)].z
    }

    /// Total energy diagnostic: kinetic `sum(v^2)` plus the gradient
    /// potential `c^2 * sum(dz^2) / dx^2` over forward-difference bonds.
    /// Non-increasing over time when no forcing is applied.
    pub fn energy(&self) -> f64 {
        let kinetic: f64 = self.vel.iter().map(|&v| (v as f64) * (v as f64)).sum();

        let inv_dx2 = 1.0 / (self.dx as f64 * self.dx as f64);
        let c2 = (WAVE_SPEED as f64) * (WAVE_SPEED as f64);
        let mut potential = 0.0;
        for i in 0..self.dim {
            for j in 0..self.dim {
                let z = self.height(i, j) as f64;
                if i + 1 < self.dim {
                    let d = self.height(i + 1, j) as f64 - z;
                    potential += d * d;
                }
                if j + 1 < self.dim {
                    let d = self.height(i, j + 1) as f64 - z;
                    potential += d * d;
                }
            }
        }

        kinetic + c2 * potential * inv_dx2
    }
}

/// Complete simulation context, owned by the frame loop and passed to each
/// phase. Frame `n+1` never starts before frame `n` finishes every phase.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Height and velocity fields
    pub field: WaveField,
    /// Cumulative user-driven rotation and pointer tracking
    pub view: OrbitView,
    /// Doping RNG seed for reproducible runs
    pub seed: u64,
    /// Completed frame count
    pub frame: u64,
}

impl SimState {
    /// Default-sized simulation with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_field(WaveField::from_cell_count(CELL_COUNT), seed)
    }

    /// Simulation over a caller-provided field
    pub fn with_field(field: WaveField, seed: u64) -> Self {
        Self {
            field,
            view: OrbitView::new(),
            seed,
            frame: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_grid_coordinates() {
        let field = WaveField::new(8);
        for i in 0..8 {
            for j in 0..8 {
                let p = field.points[field.idx(i, j)];
                assert_eq!(p.x, i as f32 / 8.0 * 2.0 - 1.0);
                assert_eq!(p.y, j as f32 / 8.0 * 2.0 - 1.0);
                assert_eq!(p.z, 0.0);
            }
        }
        assert!(field.vel.iter().all(|&v| v == 0.0));
        assert_eq!(field.time, 0.0);
    }

    #[test]
    fn test_from_cell_count_dim_and_dx() {
        let field = WaveField::from_cell_count(131_072);
        assert_eq!(field.dim, 362);
        assert_eq!(field.points.len(), 362 * 362);
        assert!((field.dx - 1.0 / 131_072.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_cell_budget_clamps() {
        let field = WaveField::from_cell_count(4);
        assert_eq!(field.dim, 3);
    }

    #[test]
    fn test_flat_field_has_zero_energy() {
        let field = WaveField::new(16);
        assert_eq!(field.energy(), 0.0);
    }

    #[test]
    fn test_energy_counts_kinetic_and_potential() {
        let mut field = WaveField::new(4);
        let vi = field.idx(1, 1);
        field.vel[vi] = 2.0;
        assert!((field.energy() - 4.0).abs() < 1e-9);

        let c = field.idx(1, 1);
        field.points[c].z = 1.0;
        // Four bonds around the raised cell, each dz^2 = 1, scaled by 1/dx^2.
        let inv_dx2 = 1.0 / (field.dx as f64 * field.dx as f64);
        assert!((field.energy() - (4.0 + 4.0 * inv_dx2)).abs() < 1e-3);
    }
}
