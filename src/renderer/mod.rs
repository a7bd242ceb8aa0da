//! Canvas rendering module
//!
//! Draws `FrameReport`s onto an HTML canvas with the 2D context.

pub mod canvas;

pub use canvas::CanvasRenderer;
