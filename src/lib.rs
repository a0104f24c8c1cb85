//! Aura Pop - a single-screen click-the-ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (balls, splashes, clicks, score)
//! - `renderer`: Draw-list construction plus WebGPU and 2D text backends
//! - `game_loop`: Per-frame driver owning the game state
//! - `settings`: Data-driven game configuration

pub mod error;
pub mod game_loop;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::AppError;
pub use game_loop::GameLoop;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (game space == canvas pixels, y down)
    pub const CANVAS_WIDTH: f32 = 500.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 30.0;
    /// Initial per-axis speed range, pixels per frame (upper bound exclusive)
    pub const BALL_MIN_SPEED: f32 = 2.0;
    pub const BALL_MAX_SPEED: f32 = 5.0;
    pub const DEFAULT_BALL_COUNT: usize = 4;
    pub const MAX_BALL_COUNT: usize = 1000;

    /// Splash growth/decay per frame
    pub const SPLASH_MAX_SIZE: f32 = 150.0;
    pub const SPLASH_GROWTH: f32 = 4.0;
    pub const SPLASH_FADE: f32 = 3.0;

    /// Alpha values use the 0-255 range
    pub const FULL_ALPHA: f32 = 255.0;

    /// Losing aura banner fade per frame
    pub const AURA_FADE: f32 = 5.0;

    /// Scoring
    pub const STARTING_SCORE: i64 = 1000;
    pub const MISS_PENALTY: i64 = 25;
}
