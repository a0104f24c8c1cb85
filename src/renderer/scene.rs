//! Frame draw list
//!
//! Turns a `GameState` into an ordered list of draw commands. This is the
//! only place that knows what the screen looks like; the GPU and text
//! backends just replay the list.

use glam::Vec2;
use rand::Rng;

use super::vertex::{Color, colors, rgba};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameState;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// A single line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    /// Font size in pixels
    pub size: f32,
    pub bold: bool,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: Color,
}

/// One draw operation, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle {
        center: Vec2,
        diameter: f32,
        color: Color,
    },
    Text(TextItem),
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Background color (last clear wins)
    pub fn clear_color(&self) -> Color {
        self.commands
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCommand::Clear(color) => Some(*color),
                _ => None,
            })
            .unwrap_or(colors::BACKGROUND)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(item) => Some(item),
            _ => None,
        })
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|t| t.text == text)
    }

    #[allow(clippy::too_many_arguments)]
    fn text(
        &mut self,
        text: impl Into<String>,
        pos: Vec2,
        size: f32,
        bold: bool,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Text(TextItem {
            text: text.into(),
            pos,
            size,
            bold,
            align,
            baseline,
            color,
        }));
    }
}

/// Random opaque-ish splash color with the splash's current alpha
fn splash_color(rng: &mut impl Rng, alpha: f32) -> Color {
    rgba(
        rng.random_range(0.0..255.0),
        rng.random_range(0.0..255.0),
        rng.random_range(0.0..255.0),
        alpha,
    )
}

/// Build the draw list for the current state.
///
/// `rng` only affects splash colors, which change every frame.
pub fn build_frame(state: &GameState, settings: &Settings, rng: &mut impl Rng) -> Frame {
    let mut frame = Frame::default();
    let center = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);

    frame.commands.push(DrawCommand::Clear(colors::BACKGROUND));

    // Spawn order, so the last ball (first hit-tested) is on top
    for ball in &state.balls {
        frame.commands.push(DrawCommand::Circle {
            center: ball.pos,
            diameter: ball.diameter,
            color: colors::BALL,
        });
    }

    for splash in &state.splashes {
        frame.commands.push(DrawCommand::Circle {
            center: splash.pos,
            diameter: splash.size,
            color: splash_color(rng, splash.alpha),
        });

        if splash.shows_message() {
            frame.text(
                splash.message(),
                splash.pos,
                32.0,
                true,
                TextAlign::Center,
                TextBaseline::Middle,
                rgba(0.0, 0.0, 0.0, splash.alpha),
            );
        }
    }

    if state.is_won() {
        let black = colors::TEXT;
        frame.text(
            "Wow! You are the winner!",
            center,
            32.0,
            true,
            TextAlign::Center,
            TextBaseline::Middle,
            black,
        );
        frame.text(
            format!("Final Score: {}", state.score),
            center + Vec2::new(0.0, 40.0),
            32.0,
            true,
            TextAlign::Center,
            TextBaseline::Middle,
            black,
        );
        frame.text(
            format!("Press {} to Restart", settings.restart_key),
            center + Vec2::new(0.0, 80.0),
            20.0,
            true,
            TextAlign::Center,
            TextBaseline::Middle,
            black,
        );
    }

    frame.text(
        format!("Score: {}", state.score),
        Vec2::new(10.0, 10.0),
        20.0,
        false,
        TextAlign::Left,
        TextBaseline::Top,
        colors::TEXT,
    );

    if state.losing_aura.active {
        frame.text(
            "You are losing aura! D:",
            center,
            32.0,
            true,
            TextAlign::Center,
            TextBaseline::Middle,
            rgba(255.0, 0.0, 0.0, state.losing_aura.alpha),
        );
    }

    if settings.show_credit {
        frame.text(
            "created by demi",
            Vec2::new(center.x, CANVAS_HEIGHT - 10.0),
            16.0,
            false,
            TextAlign::Center,
            TextBaseline::Bottom,
            colors::TEXT,
        );
    }

    frame
}
