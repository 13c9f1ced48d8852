//! Entity state and kinematics
//!
//! Movable entities own their position; the frame driver owns velocity
//! decisions and timing. All distances are screen pixels, all times are
//! milliseconds.

use glam::Vec2;

use crate::Config;

/// Screen-space axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }
}

/// The ball
///
/// Holds a position and derives its bounding rectangle from it at draw
/// time. The ball has no velocity and nothing integrates its position;
/// ball motion, paddle collision and scoring are not implemented yet.
#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vec2,
    size: Vec2,
}

impl Ball {
    pub fn new(position: Vec2, config: &Config) -> Self {
        Self {
            position,
            size: config.ball_size,
        }
    }

    /// Ball at the center of the play field
    pub fn centered(config: &Config) -> Self {
        let screen = Vec2::new(config.screen_width, config.screen_height);
        Self::new((screen - config.ball_size) / 2.0, config)
    }

    /// Bounding rectangle derived from the current position, so external
    /// repositioning is picked up by the next draw.
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// A player paddle
///
/// Moves vertically under a velocity the frame driver overwrites every
/// frame from the input state; `update` integrates and clamps to the
/// play field.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub position: Vec2,
    pub velocity: Vec2,
    size: Vec2,
    /// Largest y the paddle origin may reach (screen height minus paddle height)
    y_max: f32,
}

impl Paddle {
    pub fn new(position: Vec2, velocity: Vec2, config: &Config) -> Self {
        Self {
            position,
            velocity,
            size: config.paddle_size,
            y_max: config.screen_height - config.paddle_size.y,
        }
    }

    /// Left player's paddle, inset from the left edge and vertically centered
    pub fn left(config: &Config) -> Self {
        let y = (config.screen_height - config.paddle_size.y) / 2.0;
        Self::new(Vec2::new(config.paddle_inset, y), Vec2::ZERO, config)
    }

    /// Right player's paddle
    pub fn right(config: &Config) -> Self {
        let y = (config.screen_height - config.paddle_size.y) / 2.0;
        Self::new(
            Vec2::new(config.screen_width - config.paddle_inset, y),
            Vec2::ZERO,
            config,
        )
    }

    /// Integrate velocity over `dt` milliseconds, then clamp to the play
    /// field. Only one bound can be overshot per frame, so a single
    /// either-or correction is enough.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;

        if self.position.y <= 0.0 {
            self.position.y = 0.0;
        } else if self.position.y > self.y_max {
            self.position.y = self.y_max;
        }
    }

    /// Bounding rectangle at the current position; x is fixed at
    /// construction, only y ever changes.
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PADDLE_HEIGHT, PADDLE_SPEED, SCREEN_HEIGHT};
    use proptest::prelude::*;

    fn paddle_at(y: f32, velocity: Vec2) -> Paddle {
        Paddle::new(Vec2::new(50.0, y), velocity, &Config::default())
    }

    #[test]
    fn test_update_integrates_position() {
        let mut paddle = paddle_at(100.0, Vec2::new(0.0, PADDLE_SPEED));
        paddle.update(16.0);
        assert_eq!(paddle.position, Vec2::new(50.0, 116.0));
    }

    #[test]
    fn test_update_clamps_at_top() {
        // 50 - 1000 overshoots the top wall by a wide margin
        let mut paddle = paddle_at(50.0, Vec2::new(0.0, -PADDLE_SPEED));
        paddle.update(1000.0);
        assert_eq!(paddle.position.y, 0.0);
    }

    #[test]
    fn test_update_clamps_at_bottom() {
        let y_max = SCREEN_HEIGHT as f32 - PADDLE_HEIGHT;
        let mut paddle = paddle_at(y_max, Vec2::new(0.0, PADDLE_SPEED));
        paddle.update(50.0);
        assert_eq!(paddle.position.y, y_max);
    }

    #[test]
    fn test_zero_dt_keeps_position() {
        let mut paddle = paddle_at(123.0, Vec2::new(0.0, PADDLE_SPEED));
        paddle.update(0.0);
        assert_eq!(paddle.position.y, 123.0);
    }

    #[test]
    fn test_ball_rect_follows_position() {
        let config = Config::default();
        let mut ball = Ball::centered(&config);
        assert_eq!(ball.rect().min, Vec2::new(502.5, 232.5));

        ball.position = Vec2::new(10.0, 20.0);
        assert_eq!(ball.rect().min, Vec2::new(10.0, 20.0));
        assert_eq!(ball.rect().size, config.ball_size);
    }

    #[test]
    fn test_paddle_start_positions() {
        let config = Config::default();
        let left = Paddle::left(&config);
        let right = Paddle::right(&config);
        assert_eq!(left.position, Vec2::new(50.0, 190.0));
        assert_eq!(right.position, Vec2::new(970.0, 190.0));
        assert_eq!(left.velocity, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn update_keeps_paddle_on_screen(
            start_y in 0.0f32..=380.0,
            dir in prop_oneof![Just(-1.0f32), Just(0.0f32), Just(1.0f32)],
            dt in 0.0f32..=20_000.0,
        ) {
            let mut paddle = paddle_at(start_y, Vec2::new(0.0, dir * PADDLE_SPEED));
            paddle.update(dt);

            let y_max = SCREEN_HEIGHT as f32 - PADDLE_HEIGHT;
            prop_assert!(paddle.position.y >= 0.0);
            prop_assert!(paddle.position.y <= y_max);
        }
    }
}
