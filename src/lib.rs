//! Duo Pong - a classic two-player paddle game
//!
//! Core modules:
//! - `sim`: entity state and kinematics (ball, paddles)
//! - `input`: logical button table and paddle velocity derivation
//! - `renderer`: wgpu rendering pipeline (shapes + score glyphs)
//! - `app`: window, event loop and frame driver

pub mod app;
pub mod input;
pub mod renderer;
pub mod sim;

pub use app::run;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions in pixels
    pub const SCREEN_WIDTH: u32 = 1020;
    pub const SCREEN_HEIGHT: u32 = 480;

    /// Ball dimensions
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Paddle speed in pixels per millisecond of frame time
    pub const PADDLE_SPEED: f32 = 1.0;

    /// Horizontal paddle offset from each screen edge
    pub const PADDLE_INSET: f32 = 50.0;

    /// Center net dot spacing: rows where `y % NET_GAP == 0` stay blank
    pub const NET_GAP: u32 = 5;

    /// Score font asset, resolved relative to the working directory
    pub const FONT_PATH: &str = "assets/DejaVuSansMono.ttf";
    /// Score glyph size in pixels
    pub const FONT_SIZE: f32 = 40.0;
}

/// Immutable game configuration, handed to entity constructors.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ball_size: Vec2,
    pub paddle_size: Vec2,
    /// Pixels per millisecond of frame time
    pub paddle_speed: f32,
    pub paddle_inset: f32,
}

impl Default for Config {
    fn default() -> Self {
        use consts::*;
        Self {
            screen_width: SCREEN_WIDTH as f32,
            screen_height: SCREEN_HEIGHT as f32,
            ball_size: Vec2::new(BALL_WIDTH, BALL_HEIGHT),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
        }
    }
}
