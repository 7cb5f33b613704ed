//! Explicit damped wave-equation step
//!
//! Leapfrog-style update split into two barrier-separated parallel phases:
//! the velocity phase reads only heights and writes only velocities, the
//! height phase reads only velocities and writes only heights. Every
//! Laplacian therefore sees the previous step's heights; the split stands in
//! for a double buffer without copying the grid.
//!
//! The outermost ring of cells is never integrated; its heights change only
//! through perturbation.

use rayon::prelude::*;

use super::state::WaveField;
use crate::consts::{DAMPING, DT, WAVE_SPEED};

/// Advance the field by one timestep
pub fn step(field: &mut WaveField) {
    let dim = field.dim;
    if dim < 3 {
        // No interior cells to integrate; the clock still advances.
        field.time += DT;
        return;
    }

    let inv_dx2 = 1.0 / (field.dx * field.dx);
    let c2 = WAVE_SPEED * WAVE_SPEED;
    let damp = (-DAMPING * DT).exp();

    // Velocity phase. Damping multiplies the post-increment velocity; the
    // order Laplacian -> increment -> damp is load-bearing.
    let points = &field.points;
    field
        .vel
        .par_chunks_mut(dim)
        .enumerate()
        .for_each(|(i, vrow)| {
            if i == 0 || i == dim - 1 {
                return;
            }
            let base = i * dim;
            for j in 1..dim - 1 {
                let lap = (points[base + dim + j].z
                    + points[base - dim + j].z
                    + points[base + j + 1].z
                    + points[base + j - 1].z
                    - 4.0 * points[base + j].z)
                    * inv_dx2;
                let v = &mut vrow[j];
                *v += c2 * lap * DT;
                *v *= damp;
            }
        });

    // Height phase.
    let vel = &field.vel;
    field
        .points
        .par_chunks_mut(dim)
        .enumerate()
        .for_each(|(i, prow)| {
            if i == 0 || i == dim - 1 {
                return;
            }
            let base = i * dim;
            for j in 1..dim - 1 {
                prow[j].z += vel[base + j] * DT;
            }
        });

    field.time += DT;
}
