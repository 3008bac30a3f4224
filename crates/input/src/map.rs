//! Key and mouse mapping from terminal events to game input.

use crate::types::{GameAction, PointerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to session actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::ToggleClock),
        _ => None,
    }
}

/// Map mouse input to pointer events.
///
/// Movement (with or without a held button) drives hover; releasing the left
/// button is the click that drives selection.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerEvent> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Some(PointerEvent::moved(mouse.column, mouse.row))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            Some(PointerEvent::released(mouse.column, mouse.row))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
