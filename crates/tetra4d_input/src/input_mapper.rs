//! Input mapping from raw key events to semantic actions
//!
//! Controls:
//! - Arrows: orbit the camera while playing, move the menu pointer otherwise
//! - Z/X/C/V: rotate the falling piece in XY/XZ/YZ/YW
//! - Enter: hard drop while playing, confirm otherwise
//! - Escape: exit

use tetra4d_core::{Command, RotationPlane};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// A command for the game engine
    Game(Command),
    /// Orbit the camera by one step in each direction (-1, 0 or +1)
    OrbitCamera { pitch: i8, yaw: i8 },
    /// Move the menu pointer up
    MenuUp,
    /// Move the menu pointer down
    MenuDown,
    /// Activate the selected menu entry, dismiss help or leave the game-over screen
    Confirm,
    /// Quit the application
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// `playing` selects between the in-game and the menu meaning of the
    /// arrow and Enter keys. Returns `None` for releases and unbound keys.
    pub fn map_keyboard(key: KeyCode, state: ElementState, playing: bool) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        let action = match key {
            KeyCode::KeyZ => InputAction::Game(Command::Rotate(RotationPlane::XY)),
            KeyCode::KeyX => InputAction::Game(Command::Rotate(RotationPlane::XZ)),
            KeyCode::KeyC => InputAction::Game(Command::Rotate(RotationPlane::YZ)),
            KeyCode::KeyV => InputAction::Game(Command::Rotate(RotationPlane::YW)),
            KeyCode::Escape => InputAction::Exit,
            _ if playing => Self::map_playing(key)?,
            _ => Self::map_menu(key)?,
        };
        Some(action)
    }

    fn map_playing(key: KeyCode) -> Option<InputAction> {
        match key {
            KeyCode::ArrowRight => Some(InputAction::OrbitCamera { pitch: 0, yaw: -1 }),
            KeyCode::ArrowLeft => Some(InputAction::OrbitCamera { pitch: 0, yaw: 1 }),
            KeyCode::ArrowUp => Some(InputAction::OrbitCamera { pitch: -1, yaw: 0 }),
            KeyCode::ArrowDown => Some(InputAction::OrbitCamera { pitch: 1, yaw: 0 }),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(InputAction::Game(Command::HardDrop)),
            _ => None,
        }
    }

    fn map_menu(key: KeyCode) -> Option<InputAction> {
        match key {
            KeyCode::ArrowUp => Some(InputAction::MenuUp),
            KeyCode::ArrowDown => Some(InputAction::MenuDown),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(InputAction::Confirm),
            _ => None,
        }
    }
}
