//! Error types for setup and configuration
//!
//! Gameplay itself never fails; these cover host wiring and settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Settings JSON could not be parsed
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// Settings parsed but describe an unplayable game
    #[error("invalid settings: {0}")]
    InvalidSetting(&'static str),

    /// A required DOM element is missing or has the wrong type
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
