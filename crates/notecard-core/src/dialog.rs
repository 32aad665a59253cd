//! Modal layer capability.
//!
//! A card only needs to know whether its detail layer is showing and how to
//! ask for it to open or go away. The close button and the modal layer's own
//! dismissal (backdrop click or escape key) arrive as one transition.

/// Why a dialog was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The card's close affordance
    CloseButton,
    /// The modal layer closed itself, on a backdrop click or the escape key
    Modal,
}

/// A layered surface that renders above the page and can be dismissed.
pub trait Dialog {
    /// Whether the surface is currently showing
    fn is_open(&self) -> bool;

    /// Show the surface. Returns `true` if it was closed before.
    fn open(&mut self) -> bool;

    /// Hide the surface. Returns `true` if it was open before.
    fn dismiss(&mut self, reason: DismissReason) -> bool;
}

/// Plain open/closed flag, the default modal layer for a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl Dialog for ModalState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    fn dismiss(&mut self, reason: DismissReason) -> bool {
        let was_open = std::mem::replace(&mut self.open, false);
        if was_open {
            tracing::debug!("Dialog dismissed via {:?}", reason);
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_reports_transition_once() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());
        assert!(modal.open());
        assert!(!modal.open());
        assert!(modal.is_open());
    }

    #[test]
    fn every_reason_closes() {
        for reason in [DismissReason::CloseButton, DismissReason::Modal] {
            let mut modal = ModalState::default();
            modal.open();
            assert!(modal.dismiss(reason));
            assert!(!modal.is_open());
            assert!(!modal.dismiss(reason));
        }
    }
}
