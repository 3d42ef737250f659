//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `input` - collect coordinates and write the persisted state
//! - `render` - render the stored triangle to SVG or PNG
//! - `angles` - print the summary panel (text or JSON)

pub mod angles;
pub mod common;
pub mod input;
pub mod render;

pub use angles::cmd_angles;
pub use input::cmd_input;
pub use render::cmd_render;
