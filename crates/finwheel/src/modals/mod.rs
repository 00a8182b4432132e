mod confirm;
mod message;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::state::{AppState, ModalAction, ModalState};

pub use confirm::render_confirm_modal;
pub use message::render_message_modal;

/// Result of handling a modal key event
#[derive(Debug, PartialEq, Eq)]
pub enum ModalResult {
    /// Modal confirmed with its action
    Confirmed(ModalAction),
    /// Modal was cancelled or dismissed
    Cancelled,
    /// Key was handled, modal still active
    Continue,
}

/// Render the active modal as an overlay
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    match &state.modal {
        ModalState::None => {}
        ModalState::Message(modal) => render_message_modal(frame, modal),
        ModalState::Confirm(modal) => render_confirm_modal(frame, modal),
    }
}

/// Handle key events for the active modal
pub fn handle_modal_key(key: KeyEvent, state: &mut AppState) -> ModalResult {
    match &state.modal {
        ModalState::None => ModalResult::Continue,
        ModalState::Message(_) => message::handle_message_key(key),
        ModalState::Confirm(modal) => confirm::handle_confirm_key(key, modal),
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 10, area), Rect::new(20, 15, 60, 10));
        assert_eq!(centered_rect(200, 50, area), Rect::new(0, 0, 100, 40));
    }
}
