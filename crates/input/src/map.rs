//! Key mapping from terminal events to scene actions.

use crate::types::SceneAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to scene actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SceneAction> {
    match key.code {
        // Sprite movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(SceneAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(SceneAction::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(SceneAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(SceneAction::MoveDown),

        // Viewport panning
        KeyCode::Char('a') | KeyCode::Char('A') => Some(SceneAction::PanLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(SceneAction::PanRight),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(SceneAction::PanUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(SceneAction::PanDown),

        // Z-order and visibility
        KeyCode::Char('+') | KeyCode::Char('=') => Some(SceneAction::Raise),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(SceneAction::Lower),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(SceneAction::ToggleVisible),

        _ => None,
    }
}

/// Check if key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(SceneAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(SceneAction::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(SceneAction::MoveUp)
        );
    }

    #[test]
    fn test_pan_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(SceneAction::PanLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(SceneAction::PanDown)
        );
    }

    #[test]
    fn test_layer_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(SceneAction::Raise)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(SceneAction::Lower)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('v'))),
            Some(SceneAction::ToggleVisible)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
