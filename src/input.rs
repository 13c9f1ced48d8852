//! Logical button state
//!
//! Key events from the windowing layer mutate a flat button table; the
//! frame driver reads the table once per frame to derive paddle
//! velocities. No callbacks, no persistence.

use glam::Vec2;
use winit::keyboard::KeyCode;

/// Logical buttons, one per paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    PaddleOneUp = 0,
    PaddleOneDown,
    PaddleTwoUp,
    PaddleTwoDown,
}

/// What the frame driver should do with one keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Stop the game loop
    Quit,
    /// A logical button changed to held (`true`) or released (`false`)
    Button(Button, bool),
    /// Key is not bound
    Ignore,
}

/// Map a physical key event to a frame driver action.
///
/// W/S drive the left paddle, the arrow keys the right one. Escape
/// quits on press only.
pub fn classify_key(code: KeyCode, pressed: bool) -> KeyAction {
    match code {
        KeyCode::Escape if pressed => KeyAction::Quit,
        KeyCode::KeyW => KeyAction::Button(Button::PaddleOneUp, pressed),
        KeyCode::KeyS => KeyAction::Button(Button::PaddleOneDown, pressed),
        KeyCode::ArrowUp => KeyAction::Button(Button::PaddleTwoUp, pressed),
        KeyCode::ArrowDown => KeyAction::Button(Button::PaddleTwoDown, pressed),
        _ => KeyAction::Ignore,
    }
}

/// Held state for all logical buttons
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn set(&mut self, button: Button, held: bool) {
        self.held[button as usize] = held;
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held[button as usize]
    }

    /// Velocity for the left paddle given the current button state
    pub fn paddle_one_velocity(&self, speed: f32) -> Vec2 {
        derive_velocity(
            self.is_held(Button::PaddleOneUp),
            self.is_held(Button::PaddleOneDown),
            speed,
        )
    }

    /// Velocity for the right paddle
    pub fn paddle_two_velocity(&self, speed: f32) -> Vec2 {
        derive_velocity(
            self.is_held(Button::PaddleTwoUp),
            self.is_held(Button::PaddleTwoDown),
            speed,
        )
    }
}

/// Up is checked first and wins when both directions are held.
fn derive_velocity(up: bool, down: bool, speed: f32) -> Vec2 {
    if up {
        Vec2::new(0.0, -speed)
    } else if down {
        Vec2::new(0.0, speed)
    } else {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PADDLE_SPEED;

    #[test]
    fn test_press_and_release_round_trip() {
        let mut input = InputState::default();
        assert!(!input.is_held(Button::PaddleOneUp));

        input.set(Button::PaddleOneUp, true);
        assert!(input.is_held(Button::PaddleOneUp));
        assert!(!input.is_held(Button::PaddleTwoUp));

        input.set(Button::PaddleOneUp, false);
        assert!(!input.is_held(Button::PaddleOneUp));
    }

    #[test]
    fn test_up_velocity() {
        let mut input = InputState::default();
        input.set(Button::PaddleOneUp, true);
        assert_eq!(
            input.paddle_one_velocity(PADDLE_SPEED),
            Vec2::new(0.0, -PADDLE_SPEED)
        );
    }

    #[test]
    fn test_down_velocity() {
        let mut input = InputState::default();
        input.set(Button::PaddleTwoDown, true);
        assert_eq!(
            input.paddle_two_velocity(PADDLE_SPEED),
            Vec2::new(0.0, PADDLE_SPEED)
        );
    }

    #[test]
    fn test_up_wins_when_both_held() {
        let mut input = InputState::default();
        input.set(Button::PaddleOneUp, true);
        input.set(Button::PaddleOneDown, true);
        assert_eq!(
            input.paddle_one_velocity(PADDLE_SPEED),
            Vec2::new(0.0, -PADDLE_SPEED)
        );
    }

    #[test]
    fn test_neither_held_is_zero() {
        let input = InputState::default();
        assert_eq!(input.paddle_one_velocity(PADDLE_SPEED), Vec2::ZERO);
        assert_eq!(input.paddle_two_velocity(PADDLE_SPEED), Vec2::ZERO);
    }

    #[test]
    fn test_paddles_are_independent() {
        let mut input = InputState::default();
        input.set(Button::PaddleOneUp, true);
        assert_eq!(input.paddle_two_velocity(PADDLE_SPEED), Vec2::ZERO);
    }

    #[test]
    fn test_classify_escape_quits_on_press_only() {
        assert_eq!(classify_key(KeyCode::Escape, true), KeyAction::Quit);
        assert_eq!(classify_key(KeyCode::Escape, false), KeyAction::Ignore);
    }

    #[test]
    fn test_classify_paddle_keys() {
        assert_eq!(
            classify_key(KeyCode::KeyW, true),
            KeyAction::Button(Button::PaddleOneUp, true)
        );
        assert_eq!(
            classify_key(KeyCode::KeyS, false),
            KeyAction::Button(Button::PaddleOneDown, false)
        );
        assert_eq!(
            classify_key(KeyCode::ArrowUp, true),
            KeyAction::Button(Button::PaddleTwoUp, true)
        );
        assert_eq!(
            classify_key(KeyCode::ArrowDown, true),
            KeyAction::Button(Button::PaddleTwoDown, true)
        );
    }

    #[test]
    fn test_classify_unbound_key() {
        assert_eq!(classify_key(KeyCode::Space, true), KeyAction::Ignore);
    }
}
