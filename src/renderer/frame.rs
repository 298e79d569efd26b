//! Read-only snapshot handed to the presentation layer each frame

use serde::Serialize;

use crate::settings::Difficulty;
use crate::sim::{GamePhase, GameState, Particle, ParticleKind};

/// One particle as the presentation layer draws it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub id: u32,
    pub kind: ParticleKind,
    /// Top-left corner in CSS pixels
    pub x: f32,
    pub y: f32,
    /// Width and height in CSS pixels
    pub size: f32,
    /// CSS color string
    pub color: String,
    /// Degrees
    pub rotation: f32,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            kind: p.kind,
            x: p.pos.x,
            y: p.pos.y,
            size: p.size,
            color: p.color.to_css(),
            rotation: p.rotation,
        }
    }
}

/// Scalar readouts for the HUD and screen switching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub time_left: u32,
    pub active: bool,
    pub difficulty: Difficulty,
    pub show_select: bool,
    pub game_over: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    /// Empty unless a round is active
    pub particles: Vec<ParticleView>,
    pub hud: Hud,
}

impl RenderFrame {
    pub fn from_state(state: &GameState) -> Self {
        // Particles only exist on screen while a round is running
        let particles = if state.is_active() {
            state.particles.iter().map(ParticleView::from).collect()
        } else {
            Vec::new()
        };

        Self {
            particles,
            hud: Hud {
                score: state.score,
                level: state.level,
                time_left: state.time_left,
                active: state.is_active(),
                difficulty: state.difficulty,
                show_select: state.show_select(),
                game_over: state.phase == GamePhase::GameOver,
            },
        }
    }

    /// JSON dump (debug overlay, native demo output)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Viewport, start_round};

    #[test]
    fn test_select_screen_hides_particles() {
        let state = GameState::new(5, Viewport::default(), Settings::default());
        let frame = RenderFrame::from_state(&state);
        assert!(frame.particles.is_empty());
        assert!(frame.hud.show_select);
        assert!(!frame.hud.active);
        assert!(!frame.hud.game_over);
    }

    #[test]
    fn test_active_frame_mirrors_particles() {
        let mut state = GameState::new(5, Viewport::default(), Settings::default());
        start_round(&mut state);
        let frame = RenderFrame::from_state(&state);

        assert_eq!(frame.particles.len(), state.particles.len());
        let view = &frame.particles[0];
        let p = &state.particles[0];
        assert_eq!(view.id, p.id);
        assert_eq!((view.x, view.y), (p.pos.x, p.pos.y));
        assert_eq!(view.color, p.color.to_css());
        assert_eq!(frame.hud.time_left, 30);
        assert!(frame.hud.active);
    }

    #[test]
    fn test_json_has_hud_fields() {
        let state = GameState::new(5, Viewport::default(), Settings::default());
        let json = RenderFrame::from_state(&state).to_json().unwrap();
        assert!(json.contains("\"time_left\": 30"));
        assert!(json.contains("\"difficulty\": \"Medium\""));
    }
}
