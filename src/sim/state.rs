//! Game state and core simulation types
//!
//! Everything a round owns lives in [`GameState`]; the transition functions in
//! the sibling modules take it by `&mut` and nothing else.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::{Difficulty, Settings};

/// Current phase of the round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty select screen (initial)
    #[default]
    Select,
    /// Round running: clock counting, particles moving, captures count
    Active,
    /// Clock hit zero; final score on display
    GameOver,
}

/// Particle kinds, drawn uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleKind {
    Bubble,
    Comet,
    Asteroid,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Bubble,
        ParticleKind::Comet,
        ParticleKind::Asteroid,
    ];

    /// Points awarded on capture
    pub fn points(&self) -> u32 {
        match self {
            ParticleKind::Bubble => 1,
            ParticleKind::Comet => 3,
            ParticleKind::Asteroid => 5,
        }
    }

    /// Comets move twice as fast
    pub fn speed_factor(&self) -> f32 {
        match self {
            ParticleKind::Comet => 2.0,
            _ => 1.0,
        }
    }

    /// Size range in pixels as (min, spread)
    pub fn size_range(&self) -> (f32, f32) {
        match self {
            ParticleKind::Bubble => (10.0, 20.0),
            ParticleKind::Comet => (20.0, 30.0),
            ParticleKind::Asteroid => (30.0, 40.0),
        }
    }

    /// CSS class name used by the DOM renderer
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleKind::Bubble => "bubble",
            ParticleKind::Comet => "comet",
            ParticleKind::Asteroid => "asteroid",
        }
    }
}

/// HSL color with alpha, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in degrees
    pub h: f32,
    /// Saturation in percent
    pub s: f32,
    /// Lightness in percent
    pub l: f32,
    /// Alpha 0-1
    pub a: f32,
}

impl Hsla {
    pub fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("hsl({:.1}, {}%, {}%)", self.h, self.s, self.l)
        } else {
            format!("hsla({:.1}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
        }
    }
}

/// A catchable particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Unique within the current batch only
    pub id: u32,
    pub kind: ParticleKind,
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub size: f32,
    pub color: Hsla,
    /// Degrees
    pub rotation: f32,
    /// Degrees per frame
    pub rotation_speed: f32,
}

impl Particle {
    pub fn points(&self) -> u32 {
        self.kind.points()
    }
}

/// Visible play area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub score: u32,
    /// Starts at 1
    pub level: u32,
    /// Whole seconds left on the clock
    pub time_left: u32,
    /// Live batch (sorted by id)
    pub particles: Vec<Particle>,
    pub viewport: Viewport,
    pub settings: Settings,
    /// Number of batches generated so far (diagnostics)
    pub batches_generated: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a state on the select screen with an initial batch already spawned
    pub fn new(seed: u64, viewport: Viewport, settings: Settings) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Select,
            difficulty: Difficulty::default(),
            score: 0,
            level: 1,
            time_left: settings.round_seconds,
            particles: Vec::new(),
            viewport,
            settings,
            batches_generated: 0,
            rng: Pcg32::seed_from_u64(seed),
        };

        super::spawn::generate_batch(&mut state);

        state
    }

    /// `gameActive` in UI terms
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Whether the difficulty select screen is showing
    pub fn show_select(&self) -> bool {
        self.phase == GamePhase::Select
    }

    pub fn particle(&self, id: u32) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_select() {
        let state = GameState::new(7, Viewport::default(), Settings::default());
        assert_eq!(state.phase, GamePhase::Select);
        assert!(state.show_select());
        assert!(!state.is_active());
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.time_left, ROUND_SECONDS);
        // Mounted with a batch already in place
        assert_eq!(state.particles.len(), 20);
        assert_eq!(state.batches_generated, 1);
    }

    #[test]
    fn test_kind_points_and_speed() {
        assert_eq!(ParticleKind::Bubble.points(), 1);
        assert_eq!(ParticleKind::Comet.points(), 3);
        assert_eq!(ParticleKind::Asteroid.points(), 5);
        assert_eq!(ParticleKind::Comet.speed_factor(), 2.0);
        assert_eq!(ParticleKind::Bubble.speed_factor(), 1.0);
        assert_eq!(ParticleKind::Asteroid.speed_factor(), 1.0);
    }

    #[test]
    fn test_hsla_css() {
        assert_eq!(
            Hsla::new(120.0, 100.0, 50.0, 0.6).to_css(),
            "hsla(120.0, 100%, 50%, 0.6)"
        );
        assert_eq!(Hsla::new(210.5, 100.0, 70.0, 1.0).to_css(), "hsl(210.5, 100%, 70%)");
    }

    #[test]
    fn test_viewport_clamps_negative() {
        let vp = Viewport::new(-5.0, 10.0);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 10.0);
    }
}
