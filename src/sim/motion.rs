//! Per-frame motion with screen wrap

use super::state::{GameState, Particle, Viewport};
use crate::{normalize_degrees, wrap_coord};

/// Move a single particle one frame and wrap it back onto the viewport
#[inline]
pub fn step_particle(particle: &mut Particle, viewport: Viewport) {
    let next = particle.pos + particle.vel;
    particle.pos.x = wrap_coord(next.x, viewport.width);
    particle.pos.y = wrap_coord(next.y, viewport.height);
    particle.rotation = normalize_degrees(particle.rotation + particle.rotation_speed);
}

/// Advance every live particle by one frame. Does nothing unless a round is
/// active.
pub fn advance(state: &mut GameState) {
    if !state.is_active() {
        return;
    }

    let viewport = state.viewport;
    for particle in &mut state.particles {
        step_particle(particle, viewport);
    }
}
