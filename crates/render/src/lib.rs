//! Renderer-agnostic rendering interface.
//!
//! A renderer reads one render context and produces output. It never
//! mutates the scene; scene truth belongs to the section controllers.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "folio-render v0.1.0"
}
