//! Text layer on a 2D overlay canvas
//!
//! WebGPU draws the shapes; every text item in the frame goes through the
//! browser's canvas text rendering on a transparent canvas stacked on top.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{Frame, TextAlign, TextBaseline, TextItem};
use super::vertex::Color;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::error::AppError;

pub struct TextPainter {
    ctx: CanvasRenderingContext2d,
    /// Device pixels per canvas unit
    scale: f64,
}

/// CSS `rgba()` string for a 0-1 color
fn css_color(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        color[3]
    )
}

impl TextPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, AppError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(AppError::MissingElement("2d context on #overlay"))?;
        let scale = canvas.width() as f64 / CANVAS_WIDTH as f64;
        Ok(Self { ctx, scale })
    }

    fn draw(&self, item: &TextItem) {
        let weight = if item.bold { "bold" } else { "normal" };
        self.ctx
            .set_font(&format!("{} {}px sans-serif", weight, item.size));
        self.ctx.set_text_align(match item.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline(match item.baseline {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        });
        self.ctx.set_fill_style_str(&css_color(item.color));
        let _ = self
            .ctx
            .fill_text(&item.text, item.pos.x as f64, item.pos.y as f64);
    }

    /// Clear the overlay and draw every text item in the frame
    pub fn paint(&self, frame: &Frame) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            CANVAS_WIDTH as f64 * self.scale,
            CANVAS_HEIGHT as f64 * self.scale,
        );
        let _ = self.ctx.scale(self.scale, self.scale);

        for item in frame.texts() {
            if item.color[3] > 0.0 {
                self.draw(item);
            }
        }
    }
}
