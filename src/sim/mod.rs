//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod input;
pub mod state;
pub mod tick;

pub use input::{ClickOutcome, click, hit_test, key_pressed, restart};
pub use state::{Ball, GamePhase, GameState, LosingAura, Splash, SplashKind};
pub use tick::tick;
