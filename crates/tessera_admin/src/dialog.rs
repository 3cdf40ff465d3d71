//! Delete confirmation dialog.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
enum DialogState {
    Closed,
    Open { target: u32, label: String },
    Deleting { target: u32, label: String },
}

/// User input on the dialog.
///
/// Backdrop clicks and the close icon behave exactly like Cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogAction {
    /// Confirm button
    Confirm,
    /// Cancel button
    Cancel,
    /// Click outside the dialog
    Backdrop,
    /// The corner close icon
    CloseIcon,
}

/// What the dialog shows while open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    /// Header text
    pub title: String,
    /// Body text naming the record
    pub message: String,
    /// Confirm button caption
    pub confirm_label: &'static str,
    /// Whether the confirm button accepts clicks
    pub confirm_enabled: bool,
    /// Whether the cancel button (and backdrop/close icon) accepts clicks
    pub cancel_enabled: bool,
    /// Spinner shown
    pub loading: bool,
}

/// Confirmation step in front of a destructive action.
///
/// Closed → open on request, open → deleting on confirm, deleting → closed
/// when the action finishes. While deleting, both buttons are disabled and
/// input is ignored.
///
/// # Examples
///
/// ```
/// use tessera_admin::{DeleteDialog, DialogAction};
///
/// let mut dialog = DeleteDialog::new("article");
/// assert!(dialog.render().is_none());
///
/// dialog.open(3, "Tax-Loss Harvesting, Explained");
/// assert_eq!(dialog.handle(DialogAction::Confirm), Some(3));
///
/// let view = dialog.render().unwrap();
/// assert!(!view.confirm_enabled && !view.cancel_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDialog {
    kind: &'static str,
    state: DialogState,
}

impl DeleteDialog {
    /// Closed dialog for records of `kind`.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            state: DialogState::Closed,
        }
    }

    /// Whether the dialog is visible.
    pub fn is_open(&self) -> bool {
        !matches!(self.state, DialogState::Closed)
    }

    /// Whether the confirmed action is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, DialogState::Deleting { .. })
    }

    /// Record the dialog is asking about.
    pub fn target(&self) -> Option<u32> {
        match &self.state {
            DialogState::Closed => None,
            DialogState::Open { target, .. } | DialogState::Deleting { target, .. } => {
                Some(*target)
            }
        }
    }

    /// Ask about `target`. Ignored while a delete is in flight.
    pub fn open(&mut self, target: u32, label: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.state = DialogState::Open {
            target,
            label: label.into(),
        };
        true
    }

    /// Apply a click. Returns the target id when the click confirmed.
    pub fn handle(&mut self, action: DialogAction) -> Option<u32> {
        match action {
            DialogAction::Confirm => self.begin_confirm(),
            DialogAction::Cancel | DialogAction::Backdrop | DialogAction::CloseIcon => {
                self.cancel();
                None
            }
        }
    }

    /// Close without acting. Returns false if nothing was closed.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            DialogState::Open { .. } => {
                self.state = DialogState::Closed;
                true
            }
            DialogState::Closed | DialogState::Deleting { .. } => false,
        }
    }

    /// Move from open to deleting and hand back the target.
    pub fn begin_confirm(&mut self) -> Option<u32> {
        let state = std::mem::replace(&mut self.state, DialogState::Closed);
        match state {
            DialogState::Open { target, label } => {
                self.state = DialogState::Deleting { target, label };
                Some(target)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// The confirmed action completed; close.
    pub fn finish(&mut self) {
        if self.is_loading() {
            self.state = DialogState::Closed;
        }
    }

    /// Contents to draw, or `None` when closed.
    pub fn render(&self) -> Option<DialogView> {
        let (label, loading) = match &self.state {
            DialogState::Closed => return None,
            DialogState::Open { label, .. } => (label, false),
            DialogState::Deleting { label, .. } => (label, true),
        };
        Some(DialogView {
            title: format!("Delete {}", self.kind),
            message: format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                label
            ),
            confirm_label: if loading { "Deleting..." } else { "Delete" },
            confirm_enabled: !loading,
            cancel_enabled: !loading,
            loading,
        })
    }
}
