// ABOUTME: Widget configuration: raw host-supplied props resolved against the default record.
// ABOUTME: App-level TOML config with environment variable overrides for the CLI and preview server.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;
use crate::link;

/// Default logo asset, as shipped with the storefront theme.
pub const DEFAULT_LOGO: &str = "mi-logo.png";

/// Default contact number the button points at.
pub const DEFAULT_PHONE: &str = "3228984861";

/// Default pre-filled greeting.
pub const DEFAULT_MESSAGE: &str =
    "Estás comunicándote con VTEX University, por favor ingresa tu duda.";

/// Default rendered image width in pixels.
pub const DEFAULT_WIDTH: u32 = 80;

/// Default rendered image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 80;

/// Raw widget properties as supplied by a host page-composition system,
/// a config file, or the environment.
///
/// Every field is optional at this stage; [`ButtonProps::resolve`]
/// applies the required-field rules and fills the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ButtonProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ButtonProps {
    /// True when no field has been supplied at all.
    pub fn is_empty(&self) -> bool {
        self.logo.is_none()
            && self.phone.is_none()
            && self.message.is_none()
            && self.width.is_none()
            && self.height.is_none()
    }

    /// Resolve host-supplied props into a concrete configuration.
    ///
    /// `logo` and `phone` must be present and non-empty; `message`,
    /// `width` and `height` fall back to the documented defaults.
    pub fn resolve(self) -> Result<ButtonConfig, Error> {
        let logo = require(self.logo, "logo")?;
        let phone = require(self.phone, "phone")?;
        Ok(ButtonConfig {
            logo,
            phone,
            message: self.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            height: self.height.unwrap_or(DEFAULT_HEIGHT),
        })
    }

    /// Resolve, treating an entirely empty props record as "no
    /// overrides": the default configuration renders as-is. A partially
    /// populated record still has to carry the required fields.
    pub fn resolve_or_default(self) -> Result<ButtonConfig, Error> {
        if self.is_empty() {
            Ok(ButtonConfig::default())
        } else {
            self.resolve()
        }
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingRequiredField { field }),
    }
}

/// Resolved widget configuration, immutable for the duration of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub logo: String,
    pub phone: String,
    pub message: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            logo: DEFAULT_LOGO.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ButtonConfig {
    /// Build a configuration with explicit logo and phone, both required
    /// and non-empty. The remaining fields start at the defaults.
    pub fn new(logo: impl Into<String>, phone: impl Into<String>) -> Result<Self, Error> {
        let logo = logo.into();
        let phone = phone.into();
        if logo.trim().is_empty() {
            return Err(Error::MissingRequiredField { field: "logo" });
        }
        if phone.trim().is_empty() {
            return Err(Error::MissingRequiredField { field: "phone" });
        }
        Ok(Self {
            logo,
            phone,
            ..Self::default()
        })
    }

    /// Replace the pre-filled message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the rendered image dimensions in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The deep link this button navigates to when clicked.
    pub fn deep_link(&self) -> String {
        link::deep_link(&self.phone, &self.message)
    }
}

/// Application configuration for the CLI and preview server.
///
/// The `[button]` section carries raw widget props; `[preview]` the
/// bind address of the local preview server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub button: ButtonProps,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_host")]
    pub host: String,
    #[serde(default = "default_preview_port")]
    pub port: u16,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            host: default_preview_host(),
            port: default_preview_port(),
        }
    }
}

fn default_preview_host() -> String {
    "127.0.0.1".to_string()
}

fn default_preview_port() -> u16 {
    4180
}

impl AppConfig {
    /// Load configuration from a TOML file with environment variable
    /// overrides.
    ///
    /// A missing file is not an error: the widget then runs on its
    /// documented defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new("button.toml"));
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str::<AppConfig>(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            AppConfig::default()
        };

        // Override with environment variables if present
        if let Ok(val) = std::env::var("BUTTON_LOGO") {
            config.button.logo = Some(val);
        }
        if let Ok(val) = std::env::var("BUTTON_PHONE") {
            config.button.phone = Some(val);
        }
        if let Ok(val) = std::env::var("BUTTON_MESSAGE") {
            config.button.message = Some(val);
        }
        if let Ok(val) = std::env::var("BUTTON_WIDTH") {
            let width = val
                .parse()
                .with_context(|| format!("BUTTON_WIDTH must be a pixel size, got: {}", val))?;
            config.button.width = Some(width);
        }
        if let Ok(val) = std::env::var("BUTTON_HEIGHT") {
            let height = val
                .parse()
                .with_context(|| format!("BUTTON_HEIGHT must be a pixel size, got: {}", val))?;
            config.button.height = Some(height);
        }
        if let Ok(val) = std::env::var("PREVIEW_HOST") {
            config.preview.host = val;
        }
        if let Ok(val) = std::env::var("PREVIEW_PORT") {
            config.preview.port = val
                .parse()
                .with_context(|| format!("PREVIEW_PORT must be a valid port number, got: {}", val))?;
        }

        Ok(config)
    }
}
