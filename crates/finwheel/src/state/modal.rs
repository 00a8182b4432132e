//! Modal overlays: confirmations and messages.

use finwheel_core::OperationId;

/// What a confirmed modal should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    DeleteOperation,
}

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    None,
    Message(MessageModal),
    Confirm(ConfirmModal),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::None)
    }
}

// ========== MessageModal ==========

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}

// ========== ConfirmModal ==========

#[derive(Debug)]
pub struct ConfirmModal {
    pub title: String,
    pub message: String,
    pub action: ModalAction,
    /// Operation the action applies to
    pub target: Option<OperationId>,
}

impl ConfirmModal {
    pub fn new(title: &str, message: &str, action: ModalAction) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action,
            target: None,
        }
    }

    pub fn with_target(mut self, id: OperationId) -> Self {
        self.target = Some(id);
        self
    }
}
