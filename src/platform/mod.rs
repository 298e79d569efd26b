//! Platform abstraction layer
//!
//! Browser resources that must be released when the game goes away:
//! - Event listeners (removed on drop)
//! - Animation frame requests (cancelled on drop)

#[cfg(target_arch = "wasm32")]
pub mod web;
