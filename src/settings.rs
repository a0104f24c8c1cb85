//! Game settings
//!
//! Read once at startup from the canvas `data-settings` attribute. Never
//! written back.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BALL_COUNT, MAX_BALL_COUNT};
use crate::error::AppError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Balls spawned at start and on every restart
    pub ball_count: usize,
    /// Key name (as reported by `KeyboardEvent.key`) that restarts after a win
    pub restart_key: String,
    /// Fixed run seed; wall clock when absent
    pub seed: Option<u64>,
    /// Draw the credit line at the bottom
    pub show_credit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: DEFAULT_BALL_COUNT,
            restart_key: "Enter".to_string(),
            seed: None,
            show_credit: true,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.ball_count == 0 {
            return Err(AppError::InvalidSetting("ball_count must be at least 1"));
        }
        if self.ball_count > MAX_BALL_COUNT {
            return Err(AppError::InvalidSetting("ball_count must be at most 1000"));
        }
        if self.restart_key.is_empty() {
            return Err(AppError::InvalidSetting("restart_key must not be empty"));
        }
        Ok(())
    }

    /// Attribute on the game canvas holding settings JSON
    const SETTINGS_ATTRIBUTE: &'static str = "data-settings";

    /// Load settings from the canvas element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::Element) -> Result<Self, AppError> {
        match canvas.get_attribute(Self::SETTINGS_ATTRIBUTE) {
            Some(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", Self::SETTINGS_ATTRIBUTE);
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Native: settings JSON from the environment, if present
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, AppError> {
        match std::env::var("AURA_POP_SETTINGS") {
            Ok(json) => Self::from_json(&json),
            Err(_) => {
                log::debug!("No {} override, using defaults", Self::SETTINGS_ATTRIBUTE);
                Ok(Self::default())
            }
        }
    }
}
