//! Output formats for finished scales

pub mod json;
pub mod text;

pub use text::{render, render_notes, render_scale};
