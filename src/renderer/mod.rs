//! Presentation boundary
//!
//! `frame` builds the read-only snapshot any front end can draw. On wasm,
//! `dom` paints that snapshot with plain DOM elements.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use frame::{Hud, ParticleView, RenderFrame};
