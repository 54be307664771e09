use serde::{Deserialize, Serialize};
use yewdux::prelude::*;

use crate::error::ConfigError;

/// Id of the `<script type="application/json">` element in `index.html`
/// holding the deployment's overrides.
pub const OVERRIDE_ELEMENT_ID: &str = "devhub-config";

/// Viewport width, in logical pixels, below which the layout is considered mobile.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(f64);

impl Breakpoint {
    pub const DEFAULT: Breakpoint = Breakpoint(768.0);

    pub fn new(width: f64) -> Result<Self, ConfigError> {
        if width.is_finite() && width > 0.0 {
            Ok(Self(width))
        } else {
            Err(ConfigError::InvalidBreakpoint(width))
        }
    }

    pub fn width(self) -> f64 {
        self.0
    }

    pub fn is_mobile(self, viewport_width: f64) -> bool {
        viewport_width < self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Store)]
#[serde(default)]
pub struct UiConfig {
    pub mobile_breakpoint: Breakpoint,
    pub brand: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: Breakpoint::DEFAULT,
            brand: "DevHub Core".to_string(),
        }
    }
}

impl UiConfig {
    /// Parses an override document. Fields left out keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = serde_json::from_str(raw)?;
        Breakpoint::new(config.mobile_breakpoint.width())?;
        Ok(config)
    }

    /// Configuration to start with: the override when present and valid,
    /// defaults otherwise.
    pub fn with_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => Self::default(),
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("Ignoring UI configuration override: {}", e);
                Self::default()
            }),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn embedded_override() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(OVERRIDE_ELEMENT_ID)?
        .text_content()
}
