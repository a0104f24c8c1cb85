//! Frame driver
//!
//! `GameLoop` owns the game state and is the single entry point for the
//! host: one `frame` call per display refresh, plus `on_click`/`on_key` for
//! input. The host must not call these re-entrantly; in the browser they
//! all run on the main thread between animation frames.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{ClickOutcome, GameState, click, key_pressed, tick};

/// Stream offset so cosmetic randomness never mirrors the spawn sequence
const COSMETIC_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct GameLoop {
    state: GameState,
    settings: Settings,
    /// Splash colors only
    cosmetic_rng: Pcg32,
    frames: u64,
}

impl GameLoop {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!(
            "New game: seed {}, {} balls",
            seed,
            settings.ball_count
        );
        Self {
            state: GameState::new(seed, settings.ball_count),
            cosmetic_rng: Pcg32::seed_from_u64(seed ^ COSMETIC_SEED_SALT),
            settings,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Frames advanced since creation
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Advance one frame and return what to draw
    pub fn frame(&mut self) -> Frame {
        tick(&mut self.state);
        self.frames += 1;
        let frame = build_frame(&self.state, &self.settings, &mut self.cosmetic_rng);
        // Banner fades only after it has been shown at its current alpha
        self.state.losing_aura.fade();
        frame
    }

    /// Pointer press in canvas coordinates
    pub fn on_click(&mut self, x: f32, y: f32) -> ClickOutcome {
        let outcome = click(&mut self.state, Vec2::new(x, y));
        log::debug!(
            "Click at ({:.1}, {:.1}): {:?}, score {}",
            x,
            y,
            outcome,
            self.state.score
        );
        outcome
    }

    /// Key press; returns true if the game restarted
    pub fn on_key(&mut self, key: &str) -> bool {
        key_pressed(&mut self.state, key, &self.settings.restart_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_frame_advances_state() {
        let mut game = GameLoop::new(Settings::default(), 11);
        let before: Vec<(Vec2, Vec2)> = game.state().balls.iter().map(|b| (b.pos, b.vel)).collect();
        let frame = game.frame();

        assert_eq!(game.frame_count(), 1);
        assert!(frame.has_text("Score: 1000"));
        for (ball, (pos, vel)) in game.state().balls.iter().zip(before) {
            assert_eq!(ball.pos, pos + vel);
        }
    }

    #[test]
    fn test_losing_banner_starts_opaque_and_lasts_51_frames() {
        let mut game = GameLoop::new(Settings::default(), 31);
        assert_eq!(game.on_click(-5.0, -5.0), ClickOutcome::Miss);

        let banner = "You are losing aura! D:";
        let first = game.frame();
        let alpha = first
            .texts()
            .find(|t| t.text == banner)
            .map(|t| t.color[3]);
        assert_eq!(alpha, Some(1.0));

        let mut shown = 1;
        while game.frame().has_text(banner) {
            shown += 1;
            assert!(shown <= 51);
        }
        assert_eq!(shown, 51);
        assert!(!game.state().losing_aura.active);
    }

    #[test]
    fn test_full_round_and_restart() {
        let mut game = GameLoop::new(Settings::default(), 2024);
        game.frame();

        assert_eq!(game.on_click(-5.0, 600.0), ClickOutcome::Miss);
        assert_eq!(game.state().score, 975);

        while let Some(ball) = game.state().balls.last() {
            let pos = ball.pos;
            assert!(matches!(game.on_click(pos.x, pos.y), ClickOutcome::Hit { .. }));
            game.frame();
        }
        assert_eq!(game.state().phase, GamePhase::Won);
        assert!(game.frame().has_text("Final Score: 975"));

        assert!(!game.on_key(" "));
        assert!(game.on_key("Enter"));
        let state = game.state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1000);
        assert_eq!(state.balls.len(), 4);
        assert!(state.splashes.is_empty());
    }

    #[test]
    fn test_custom_ball_count_survives_restart() {
        let settings = Settings {
            ball_count: 2,
            ..Settings::default()
        };
        let mut game = GameLoop::new(settings, 8);
        while let Some(ball) = game.state().balls.last() {
            let pos = ball.pos;
            game.on_click(pos.x, pos.y);
        }
        assert!(game.on_key("Enter"));
        assert_eq!(game.state().balls.len(), 2);
    }
}
