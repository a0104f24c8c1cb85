//! Pointer and keyboard handling
//!
//! Both entry points mutate the state consumed by the next frame. They are
//! never called while a tick is in progress.

use glam::Vec2;

use super::state::{GamePhase, GameState, Splash, SplashKind};
use crate::consts::*;

/// Result of a single click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Game already won; click dropped
    Ignored,
    /// Popped the ball that was at this index
    Hit { index: usize },
    /// Nothing under the pointer; score penalized
    Miss,
}

/// Index of the topmost ball under `point` (most recently spawned wins)
pub fn hit_test(state: &GameState, point: Vec2) -> Option<usize> {
    state.balls.iter().rposition(|ball| ball.contains(point))
}

/// Handle a pointer press at `point` (canvas space)
pub fn click(state: &mut GameState, point: Vec2) -> ClickOutcome {
    if state.is_won() {
        return ClickOutcome::Ignored;
    }

    let outcome = match hit_test(state, point) {
        Some(index) => {
            state.balls.remove(index);
            state.splashes.push(Splash::new(point, SplashKind::Hit));
            ClickOutcome::Hit { index }
        }
        None => {
            state.splashes.push(Splash::new(point, SplashKind::Miss));
            state.score -= MISS_PENALTY;
            state.losing_aura.trigger();
            ClickOutcome::Miss
        }
    };

    if state.balls.is_empty() {
        state.phase = GamePhase::Won;
        log::info!("All balls popped, final score {}", state.score);
    }

    outcome
}

/// Handle a key press. Returns true if it restarted the game.
pub fn key_pressed(state: &mut GameState, key: &str, restart_key: &str) -> bool {
    if state.is_won() && key == restart_key {
        restart(state);
        true
    } else {
        false
    }
}

/// Start a fresh round on the same state
pub fn restart(state: &mut GameState) {
    state.splashes.clear();
    state.spawn_balls();
    state.score = STARTING_SCORE;
    state.phase = GamePhase::Playing;
    log::info!(
        "Restarted with {} balls (run seed {})",
        state.balls.len(),
        state.seed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;
    use crate::sim::tick;
    use proptest::prelude::*;

    fn four_balls() -> GameState {
        GameState::with_balls(
            5,
            vec![
                Ball::new(Vec2::new(50.0, 50.0), Vec2::new(2.0, 2.0)),
                Ball::new(Vec2::new(150.0, 150.0), Vec2::new(3.0, 2.0)),
                Ball::new(Vec2::new(300.0, 100.0), Vec2::new(4.0, 3.0)),
                Ball::new(Vec2::new(400.0, 400.0), Vec2::new(2.0, 4.0)),
            ],
        )
    }

    #[test]
    fn test_single_miss() {
        let mut state = four_balls();
        let outcome = click(&mut state, Vec2::new(250.0, 250.0));

        assert_eq!(outcome, ClickOutcome::Miss);
        assert_eq!(state.score, 975);
        assert_eq!(state.balls.len(), 4);
        assert!(state.losing_aura.active);
        assert_eq!(state.losing_aura.alpha, 255.0);
        assert_eq!(state.splashes.len(), 1);
        assert_eq!(state.splashes[0].message(), "Gotcha!");
        assert_eq!(state.splashes[0].pos, Vec2::new(250.0, 250.0));
    }

    #[test]
    fn test_multiple_misses() {
        let mut state = four_balls();
        click(&mut state, Vec2::new(250.0, 250.0));
        click(&mut state, Vec2::new(10.0, 490.0));
        assert_eq!(state.score, 950);
        click(&mut state, Vec2::new(499.0, 0.0));
        assert_eq!(state.score, 925);
        assert_eq!(state.splashes.len(), 3);
    }

    #[test]
    fn test_click_outside_canvas_is_miss() {
        let mut state = four_balls();
        assert_eq!(click(&mut state, Vec2::new(-40.0, 900.0)), ClickOutcome::Miss);
        assert_eq!(state.score, 975);
    }

    #[test]
    fn test_hit_within_radius() {
        let mut state = four_balls();
        let outcome = click(&mut state, Vec2::new(160.0, 150.0));

        assert_eq!(outcome, ClickOutcome::Hit { index: 1 });
        assert_eq!(state.balls.len(), 3);
        assert!(state.balls.iter().all(|b| b.pos != Vec2::new(150.0, 150.0)));
        assert_eq!(state.splashes.len(), 1);
        assert_eq!(state.splashes[0].message(), "Good job!");
        assert_eq!(state.score, 1000);
        assert!(!state.losing_aura.active);
    }

    #[test]
    fn test_overlap_prefers_topmost() {
        let mut state = GameState::with_balls(
            1,
            vec![
                Ball::new(Vec2::new(100.0, 100.0), Vec2::ONE),
                Ball::new(Vec2::new(110.0, 100.0), Vec2::ONE),
            ],
        );
        assert_eq!(hit_test(&state, Vec2::new(105.0, 100.0)), Some(1));
        click(&mut state, Vec2::new(105.0, 100.0));
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_clear_all_balls_wins() {
        let mut state = four_balls();
        let centers: Vec<Vec2> = state.balls.iter().map(|b| b.pos).collect();

        for (i, center) in centers.iter().enumerate() {
            assert_eq!(state.phase, GamePhase::Playing);
            assert!(matches!(click(&mut state, *center), ClickOutcome::Hit { .. }));
            assert_eq!(state.balls.len(), 3 - i);
        }

        assert!(state.balls.is_empty());
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.score, 1000);
        assert_eq!(state.splashes.len(), 4);
    }

    #[test]
    fn test_clicks_ignored_after_win() {
        let mut state = GameState::with_balls(
            1,
            vec![Ball::new(Vec2::new(20.0, 20.0), Vec2::ONE)],
        );
        click(&mut state, Vec2::new(20.0, 20.0));
        assert!(state.is_won());

        assert_eq!(click(&mut state, Vec2::new(300.0, 300.0)), ClickOutcome::Ignored);
        assert_eq!(state.score, 1000);
        assert_eq!(state.splashes.len(), 1);
    }

    #[test]
    fn test_restart_after_win() {
        let mut state = GameState::new(77, DEFAULT_BALL_COUNT);
        click(&mut state, Vec2::new(-10.0, -10.0));
        let centers: Vec<Vec2> = state.balls.iter().map(|b| b.pos).collect();
        for center in centers.iter().rev() {
            click(&mut state, *center);
        }
        assert!(state.is_won());
        assert_eq!(state.score, 975);

        // Wrong key does nothing
        assert!(!key_pressed(&mut state, "Escape", "Enter"));
        assert!(state.is_won());

        assert!(key_pressed(&mut state, "Enter", "Enter"));
        assert_eq!(state.score, 1000);
        assert_eq!(state.balls.len(), 4);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.splashes.is_empty());
        // Banner from the earlier miss keeps fading on its own
        assert!(state.losing_aura.active);
    }

    #[test]
    fn test_restart_key_ignored_while_playing() {
        let mut state = four_balls();
        let before = state.balls.clone();
        assert!(!key_pressed(&mut state, "Enter", "Enter"));
        assert_eq!(state.balls, before);
    }

    proptest! {
        #[test]
        fn score_never_increases(
            seed in any::<u64>(),
            clicks in prop::collection::vec((-50.0f32..550.0, -50.0f32..550.0, 0usize..5), 0..60),
        ) {
            let mut state = GameState::new(seed, DEFAULT_BALL_COUNT);
            let mut last = state.score;
            for (x, y, frames) in clicks {
                for _ in 0..frames {
                    tick(&mut state);
                    prop_assert!(state.score <= last);
                }
                let balls_before = state.balls.len();
                let splashes_before = state.splashes.len();
                match click(&mut state, Vec2::new(x, y)) {
                    ClickOutcome::Miss => {
                        prop_assert_eq!(state.score, last - MISS_PENALTY);
                        prop_assert_eq!(state.balls.len(), balls_before);
                    }
                    ClickOutcome::Hit { .. } => {
                        prop_assert_eq!(state.score, last);
                        prop_assert_eq!(state.balls.len(), balls_before - 1);
                    }
                    ClickOutcome::Ignored => prop_assert_eq!(state.score, last),
                }
                if state.is_won() {
                    prop_assert!(state.balls.is_empty());
                } else {
                    prop_assert_eq!(state.splashes.len(), splashes_before + 1);
                }
                last = state.score;
            }
        }
    }
}
