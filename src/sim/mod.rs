//! Entity simulation module
//!
//! Position and kinematics only:
//! - No rendering or platform dependencies
//! - Entities expose screen-space rectangles for the renderer to draw

pub mod state;

pub use state::{Ball, Paddle, Rect};
