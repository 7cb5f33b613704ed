//! Stochastic doping and deterministic voltage forcing
//!
//! Doping runs every frame: the left (p-type) half of the grid receives rare
//! acceptor injections pulling cells to a negative height, the right (n-type)
//! half receives more frequent donor injections pushing cells positive. The
//! probability asymmetry between the halves is intentional and must not be
//! equalized.
//!
//! Voltage forcing runs only while the external flag is set and clamps the
//! outer row bands before integration; the clamped rows are still visible to
//! the same frame's stencil.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rayon::prelude::*;

use super::state::WaveField;
use crate::consts::{
    ACCEPTOR_LEVEL, ACCEPTOR_PROB, BIAS_HIGH_FRACTION, BIAS_HIGH_LEVEL, BIAS_LOW_FRACTION,
    BIAS_LOW_LEVEL, DONOR_LEVEL, DONOR_THRESHOLD,
};

/// Independent RNG stream for one row of one frame. Rows draw in parallel,
/// so each gets its own hashed stream instead of sharing a cursor.
#[inline]
fn row_rng(seed: u64, frame: u64, row: usize) -> Pcg32 {
    let mixed = (row as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(frame.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(seed);
    Pcg32::seed_from_u64(mixed)
}

/// Apply one frame of stochastic impurity injection
pub fn doping(field: &mut WaveField, seed: u64, frame: u64) {
    let dim = field.dim;
    let half = dim as f32 * 0.5;
    field
        .points
        .par_chunks_mut(dim)
        .enumerate()
        .for_each(|(i, row)| {
            let mut rng = row_rng(seed, frame, i);
            if i as f32 <= half {
                for cell in row {
                    if rng.random::<f32>() < ACCEPTOR_PROB {
                        cell.z = ACCEPTOR_LEVEL;
                    }
                }
            } else {
                for cell in row {
                    if rng.random::<f32>() > DONOR_THRESHOLD {
                        cell.z = DONOR_LEVEL;
                    }
                }
            }
        });
}

/// Clamp the bias bands onto the height field. Rows below 20% of the grid are
/// held at the low-band level, rows above 80% at the high-band level, the
/// middle is untouched.
pub fn apply_voltage(field: &mut WaveField) {
    let dim = field.dim;
    let low_edge = dim as f32 * BIAS_LOW_FRACTION;
    let high_edge = dim as f32 * BIAS_HIGH_FRACTION;
    field
        .points
        .par_chunks_mut(dim)
        .enumerate()
        .for_each(|(i, row)| {
            let fi = i as f32;
            if fi < low_edge {
                for cell in row {
                    cell.z = BIAS_LOW_LEVEL;
                }
            } else if fi > high_edge {
                for cell in row {
                    cell.z = BIAS_HIGH_LEVEL;
                }
            }
        });
}
