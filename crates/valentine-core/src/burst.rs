//! Emission parameters for the celebration burst.
//!
//! The actual particle rendering lives in an external canvas capability;
//! this module only decides what each emission looks like. The burst runs
//! two overlapping phases: a short per-frame stream raining from the top of
//! the surface, and a single dense finale fired shortly after the start.

use rand::Rng;

/// One emission handed to the particle capability. Origin coordinates are
/// normalized over the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmissionShot {
    pub particle_count: u32,
    pub spread: f32,
    pub start_velocity: f32,
    pub ticks: u32,
    pub origin: (f32, f32),
}

/// Per-frame shot for the continuous stream phase, origin biased to the top
/// of the surface.
pub fn stream_shot(rng: &mut impl Rng) -> EmissionShot {
    EmissionShot {
        particle_count: 10,
        spread: 90.0,
        start_velocity: 44.0,
        ticks: 170,
        origin: (rng.gen::<f32>(), rng.gen::<f32>() * 0.35),
    }
}

/// The single delayed high-intensity finale.
pub fn finale_shot() -> EmissionShot {
    EmissionShot {
        particle_count: 240,
        spread: 140.0,
        start_velocity: 60.0,
        ticks: 220,
        origin: (0.5, 0.58),
    }
}
