//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Balls are bouncing, clicks count
    Playing,
    /// Every ball has been popped; waiting for the restart key
    Won,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub diameter: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            diameter: BALL_DIAMETER,
        }
    }

    /// Spawn at a random spot with a random down-right velocity
    pub fn random(rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..CANVAS_WIDTH),
            rng.random_range(0.0..CANVAS_HEIGHT),
        );
        let vel = Vec2::new(
            rng.random_range(BALL_MIN_SPEED..BALL_MAX_SPEED),
            rng.random_range(BALL_MIN_SPEED..BALL_MAX_SPEED),
        );
        Self::new(pos, vel)
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Strictly inside the ball's circle
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius()
    }

    /// Advance one frame, flipping any velocity component whose axis left the canvas
    pub fn step(&mut self) {
        self.pos += self.vel;

        if self.pos.x < 0.0 || self.pos.x > CANVAS_WIDTH {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > CANVAS_HEIGHT {
            self.vel.y = -self.vel.y;
        }
    }
}

/// What a splash is celebrating (or mocking)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashKind {
    Hit,
    Miss,
}

impl SplashKind {
    pub fn message(&self) -> &'static str {
        match self {
            SplashKind::Hit => "Good job!",
            SplashKind::Miss => "Gotcha!",
        }
    }
}

/// Click feedback: a growing, fading blob with a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Splash {
    pub pos: Vec2,
    pub kind: SplashKind,
    /// Current diameter
    pub size: f32,
    pub max_size: f32,
    /// 0-255
    pub alpha: f32,
}

impl Splash {
    pub fn new(pos: Vec2, kind: SplashKind) -> Self {
        Self {
            pos,
            kind,
            size: 0.0,
            max_size: SPLASH_MAX_SIZE,
            alpha: FULL_ALPHA,
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    pub fn step(&mut self) {
        self.size += SPLASH_GROWTH;
        self.alpha -= SPLASH_FADE;
    }

    pub fn is_done(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Message is only legible once the blob is past half size
    pub fn shows_message(&self) -> bool {
        self.size > self.max_size / 2.0
    }
}

/// "You are losing aura!" banner shown after a miss
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LosingAura {
    pub active: bool,
    pub alpha: f32,
}

impl Default for LosingAura {
    fn default() -> Self {
        Self {
            active: false,
            alpha: FULL_ALPHA,
        }
    }
}

impl LosingAura {
    pub fn trigger(&mut self) {
        self.active = true;
        self.alpha = FULL_ALPHA;
    }

    pub fn fade(&mut self) {
        if !self.active {
            return;
        }
        self.alpha -= AURA_FADE;
        if self.alpha <= 0.0 {
            self.active = false;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the run started from
    pub seed: u64,
    /// Balls still in play, in spawn order (last is topmost)
    pub balls: Vec<Ball>,
    /// Active splashes, in click order
    pub splashes: Vec<Splash>,
    pub score: i64,
    pub phase: GamePhase,
    pub losing_aura: LosingAura,
    /// Balls spawned at start and on every restart
    pub ball_count: usize,
    /// Drives ball spawns only; cosmetic randomness lives elsewhere
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with `ball_count` randomly placed balls
    pub fn new(seed: u64, ball_count: usize) -> Self {
        let mut state = Self {
            seed,
            balls: Vec::with_capacity(ball_count),
            splashes: Vec::new(),
            score: STARTING_SCORE,
            phase: GamePhase::Playing,
            losing_aura: LosingAura::default(),
            ball_count,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_balls();
        state
    }

    /// Build a state from explicit balls (scenarios and tests)
    pub fn with_balls(seed: u64, balls: Vec<Ball>) -> Self {
        let mut state = Self::new(seed, balls.len());
        state.balls = balls;
        state
    }

    /// Replace the ball set with `ball_count` fresh random balls
    pub fn spawn_balls(&mut self) {
        self.balls.clear();
        for _ in 0..self.ball_count {
            let ball = Ball::random(&mut self.rng);
            self.balls.push(ball);
        }
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }
}
