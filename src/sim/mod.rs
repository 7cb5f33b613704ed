//! Deterministic wave-field simulation
//!
//! All numeric state evolution lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (per-row streams, no shared cursor)
//! - No rendering or platform dependencies

pub mod integrate;
pub mod perturb;
pub mod state;
pub mod tick;

pub use state::{SimState, WaveField};
pub use tick::{TickInput, tick};
