//! Response status state machine.
//!
//! ```text
//!            write_status(code)            write_status(code)
//!   Unset ───────────────────────▶ Set ◀──────────────────────┐
//!     │                             │ ─────────────────────────┘
//!     │ first body write            │ body write: no change
//!     └────────────▶ Set(200) ──────┘
//! ```
//!
//! There is no transition back to `Unset`.

/// Status assumed when a handler writes a body without setting one (200 OK).
pub const IMPLICIT_STATUS: u16 = 200;

/// Whether the response status has been established, and to what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusState {
    /// No write and no explicit status yet.
    #[default]
    Unset,
    /// Status established, explicitly or by a body write.
    Set(u16),
}

impl StatusState {
    /// Transition for a body write: `Unset` becomes `Set(200)`, `Set` is kept.
    pub fn on_body_write(&mut self) {
        if *self == StatusState::Unset {
            *self = StatusState::Set(IMPLICIT_STATUS);
        }
    }

    /// Transition for an explicit status: always `Set(status)`.
    pub fn on_explicit(&mut self, status: u16) {
        *self = StatusState::Set(status);
    }

    /// The established status, if any.
    pub fn code(&self) -> Option<u16> {
        match self {
            StatusState::Unset => None,
            StatusState::Set(code) => Some(*code),
        }
    }

    /// True once a status has been established.
    pub fn is_set(&self) -> bool {
        matches!(self, StatusState::Set(_))
    }
}
