//! Batch generation
//!
//! A batch is always generated whole and replaces whatever was live.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Hsla, Particle, ParticleKind};
use crate::consts::ROTATION_SPEED_SPREAD;

/// Replace the live particles with a fresh batch for the current level and
/// difficulty. Returns the batch size.
pub fn generate_batch(state: &mut GameState) -> usize {
    let count = state.difficulty.batch_size(state.settings.base_batch_size);
    let multiplier = state.difficulty.multiplier();
    let level = state.level as f32;
    let viewport = state.viewport;
    let rng = &mut state.rng;

    let particles: Vec<Particle> = (0..count as u32)
        .map(|id| {
            let kind = ParticleKind::ALL[rng.random_range(0..ParticleKind::ALL.len())];
            let (min_size, spread) = kind.size_range();
            let size = rng.random::<f32>() * spread + min_size;

            let pos = Vec2::new(
                rng.random::<f32>() * viewport.width,
                rng.random::<f32>() * viewport.height,
            );
            let color = spawn_color(kind, rng);

            let speed = level * kind.speed_factor() * multiplier;
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * speed,
                (rng.random::<f32>() - 0.5) * speed,
            );

            Particle {
                id,
                kind,
                pos,
                vel,
                size,
                color,
                rotation: rng.random::<f32>() * 360.0,
                rotation_speed: (rng.random::<f32>() - 0.5) * ROTATION_SPEED_SPREAD * multiplier,
            }
        })
        .collect();

    state.particles = particles;
    state.batches_generated += 1;

    log::debug!(
        "Generated batch #{}: {} particles (level {}, {})",
        state.batches_generated,
        count,
        state.level,
        state.difficulty.as_str()
    );

    count
}

/// Per-kind color formula
fn spawn_color(kind: ParticleKind, rng: &mut Pcg32) -> Hsla {
    match kind {
        // Any hue, translucent
        ParticleKind::Bubble => Hsla::new(rng.random::<f32>() * 360.0, 100.0, 50.0, 0.6),
        // Blues
        ParticleKind::Comet => Hsla::new(rng.random::<f32>() * 60.0 + 200.0, 100.0, 70.0, 1.0),
        // Reds to browns
        ParticleKind::Asteroid => Hsla::new(rng.random::<f32>() * 60.0, 70.0, 40.0, 1.0),
    }
}
