//! wgpu rendering module
//!
//! A small 2D pipeline: solid-color triangle lists for the net, ball and
//! paddles, plus alpha-blended textured quads for the cached score glyphs.

pub mod pipeline;
pub mod score;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use score::{ScoreDisplay, load_font};
