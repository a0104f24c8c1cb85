//! Rendering module
//!
//! `scene` decides what a frame looks like; `pipeline` (WebGPU) draws its
//! shapes and `text` (2D canvas, browser only) draws its text.

pub mod pipeline;
pub mod scene;
pub mod shapes;
#[cfg(target_arch = "wasm32")]
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawCommand, Frame, TextAlign, TextBaseline, TextItem, build_frame};
#[cfg(target_arch = "wasm32")]
pub use text::TextPainter;
