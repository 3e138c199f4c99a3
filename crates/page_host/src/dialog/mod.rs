//! Modal dialog contracts, the single-shot session state machine, and the dialog service.
//!
//! A session runs closed → open → awaiting-input → settled → closed. The first armed trigger to
//! fire decides the result; the session then detaches every listener it registered and hides the
//! dialog, exactly once, whichever path got it there.

mod console;
mod memory;
mod service;
mod session;
mod surface;

use thiserror::Error;

use crate::lookup::LookupError;

pub use console::{ConsoleEntry, ConsoleError, LogLevel};
pub use memory::{MemoryDialogSet, MemoryDialogState, MemoryDialogSurface};
pub use service::{DialogService, DialogSurfaces, LOADER_TITLE};
pub use session::ModalSession;
pub use surface::{DialogFuture, DialogSurface, ListenerHandle, TriggerSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The five singleton dialogs a page provides.
pub enum DialogKind {
    /// Message with a single dismiss path.
    Alert,
    /// Accept/decline question.
    Confirm,
    /// Text question.
    Prompt,
    /// Busy indicator wrapped around pending work.
    Loader,
    /// Non-modal log view.
    Console,
}

impl DialogKind {
    /// Every kind, in page order.
    pub const ALL: [Self; 5] = [
        Self::Alert,
        Self::Confirm,
        Self::Prompt,
        Self::Loader,
        Self::Console,
    ];

    /// Stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Confirm => "confirm",
            Self::Prompt => "prompt",
            Self::Loader => "loader",
            Self::Console => "console",
        }
    }

    /// DOM id of the dialog element rendered for this kind.
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Alert => "alert-dialog",
            Self::Confirm => "confirm-dialog",
            Self::Prompt => "prompt-dialog",
            Self::Loader => "loader-dialog",
            Self::Console => "console-dialog",
        }
    }

    /// Triggers a session of this kind listens for.
    pub const fn triggers(self) -> &'static [DialogTrigger] {
        match self {
            Self::Alert => &[DialogTrigger::Close],
            Self::Confirm | Self::Prompt => &[
                DialogTrigger::Close,
                DialogTrigger::Accept,
                DialogTrigger::Decline,
            ],
            Self::Loader | Self::Console => &[],
        }
    }
}

impl std::fmt::Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual classification applied to a dialog header.
pub enum DialogTone {
    /// Failure styling.
    Error,
    /// Caution styling.
    Warning,
    /// Default emphasis.
    Highlight,
}

impl DialogTone {
    /// Every tone.
    pub const ALL: [Self; 3] = [Self::Error, Self::Warning, Self::Highlight];

    /// Derives the tone from a dialog title.
    pub fn from_title(title: &str) -> Self {
        match title {
            "Error" => Self::Error,
            "Warning" => Self::Warning,
            _ => Self::Highlight,
        }
    }

    /// CSS class token.
    pub const fn class_token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Highlight => "highlight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A completion source racing to settle a session.
pub enum DialogTrigger {
    /// The dialog closed natively (escape, backdrop, form submit).
    Close,
    /// The accept control fired (for prompts, this includes submitting the input).
    Accept,
    /// The decline control fired.
    Decline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction of a loader fade animation.
pub enum FadeDirection {
    /// Opacity 0 → 1.
    In,
    /// Opacity 1 → 0.
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Visible content of one dialog session.
pub struct DialogContent {
    /// Header text.
    pub title: String,
    /// Header tone, derived from the title.
    pub tone: DialogTone,
    /// Body text.
    pub body: String,
    /// Initial input text for prompts.
    pub input: Option<String>,
}

impl DialogContent {
    /// Content whose tone follows the title.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            tone: DialogTone::from_title(&title),
            title,
            body: body.into(),
            input: None,
        }
    }

    /// Sets the initial prompt input.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure to drive a dialog surface.
pub enum DialogError {
    /// Binding the dialog element or one of its parts failed.
    #[error("{kind} dialog unavailable: {source}")]
    Lookup {
        /// Dialog being bound.
        kind: DialogKind,
        /// Underlying lookup failure.
        #[source]
        source: LookupError,
    },
    /// The host refused to show the dialog.
    #[error("failed to show {kind} dialog: {reason}")]
    Present {
        /// Dialog being shown.
        kind: DialogKind,
        /// Host-provided failure text.
        reason: String,
    },
    /// Attaching listeners failed.
    #[error("failed to arm {kind} dialog listeners: {reason}")]
    Arm {
        /// Dialog being armed.
        kind: DialogKind,
        /// Host-provided failure text.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_follows_title() {
        assert_eq!(DialogTone::from_title("Error"), DialogTone::Error);
        assert_eq!(DialogTone::from_title("Warning"), DialogTone::Warning);
        assert_eq!(DialogTone::from_title("error"), DialogTone::Highlight);
        assert_eq!(DialogTone::from_title("Saved"), DialogTone::Highlight);
        assert_eq!(DialogContent::new("Error", "boom").tone, DialogTone::Error);
    }

    #[test]
    fn triggers_per_kind() {
        assert_eq!(DialogKind::Alert.triggers(), &[DialogTrigger::Close]);
        assert!(DialogKind::Confirm
            .triggers()
            .contains(&DialogTrigger::Decline));
        assert!(DialogKind::Loader.triggers().is_empty());
    }
}
