// ABOUTME: Root library module exposing all public modules
// ABOUTME: Provides access to config, link, schema, template, and server modules

pub mod config;
pub mod error;
pub mod link;
pub mod schema;
pub mod server;
pub mod templates;

pub use config::{AppConfig, ButtonConfig, ButtonProps, PreviewConfig};
pub use error::Error;
pub use link::deep_link;
pub use schema::admin_schema;
pub use templates::render_button;
