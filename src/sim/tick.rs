//! Per-frame simulation step
//!
//! Advances balls and splashes by one display frame. There is no fixed
//! timestep: every speed and fade constant is expressed per frame.

use super::state::GameState;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    for ball in &mut state.balls {
        ball.step();
    }

    for splash in &mut state.splashes {
        splash.step();
    }
    state.splashes.retain(|s| !s.is_done());
}
