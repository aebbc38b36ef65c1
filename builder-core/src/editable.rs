//! Inline editable label/URL fields used inside settings panels and text
//! blocks.

use serde::{Deserialize, Serialize};

/// The committed values emitted by a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    /// Edited display text.
    pub label: String,
    /// Edited target URL.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum FieldState {
    Viewing,
    Editing { label: String, href: String },
}

/// A two-state machine toggling one label/URL pair between display and
/// edit mode.
///
/// Draft values live only in the `Editing` state and never leak into what
/// the `Viewing` state displays; only a successful [`EditableField::save`]
/// updates the committed pair. Deleting the entry is the owning list's
/// affordance and is independent of edit state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableField {
    label: String,
    href: String,
    state: FieldState,
}

impl EditableField {
    /// Create a field in viewing mode with the given committed values.
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            state: FieldState::Viewing,
        }
    }

    /// Whether the field is in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.state, FieldState::Editing { .. })
    }

    /// The committed label shown in viewing mode.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The committed URL shown in viewing mode.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The draft values while editing, if any.
    #[must_use]
    pub fn draft(&self) -> Option<(&str, &str)> {
        match &self.state {
            FieldState::Viewing => None,
            FieldState::Editing { label, href } => Some((label, href)),
        }
    }

    /// Enter edit mode, seeding the drafts from the committed values.
    /// Re-activating while already editing keeps the current drafts.
    pub fn activate(&mut self) {
        if !self.is_editing() {
            self.state = FieldState::Editing {
                label: self.label.clone(),
                href: self.href.clone(),
            };
        }
    }

    /// Change the draft label. Ignored in viewing mode.
    pub fn set_label(&mut self, value: impl Into<String>) {
        if let FieldState::Editing { label, .. } = &mut self.state {
            *label = value.into();
        }
    }

    /// Change the draft URL. Ignored in viewing mode.
    pub fn set_href(&mut self, value: impl Into<String>) {
        if let FieldState::Editing { href, .. } = &mut self.state {
            *href = value.into();
        }
    }

    /// Commit the drafts: return to viewing mode displaying them, and
    /// emit the pair for the owner to forward upward. Returns `None` in
    /// viewing mode.
    pub fn save(&mut self) -> Option<FieldUpdate> {
        match std::mem::replace(&mut self.state, FieldState::Viewing) {
            FieldState::Viewing => None,
            FieldState::Editing { label, href } => {
                self.label.clone_from(&label);
                self.href.clone_from(&href);
                Some(FieldUpdate { label, href })
            }
        }
    }

    /// Discard the drafts and return to viewing mode; the committed
    /// values are left exactly as they were. No update is emitted.
    pub fn cancel(&mut self) {
        self.state = FieldState::Viewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_restores_original_display() {
        let mut field = EditableField::new("Home", "#home");

        field.activate();
        field.set_label("Homepage");
        field.set_href("/home");
        field.cancel();

        assert!(!field.is_editing());
        assert_eq!(field.label(), "Home");
        assert_eq!(field.href(), "#home");
    }

    #[test]
    fn test_save_emits_drafts_and_returns_to_viewing() {
        let mut field = EditableField::new("Home", "#home");

        field.activate();
        field.set_label("Homepage");
        field.set_href("/home");
        let update = field.save().expect("editing field should save");

        assert_eq!(update.label, "Homepage");
        assert_eq!(update.href, "/home");
        assert!(!field.is_editing());
        assert_eq!(field.label(), "Homepage");
        assert_eq!(field.href(), "/home");
    }

    #[test]
    fn test_drafts_never_leak_while_editing() {
        let mut field = EditableField::new("Home", "#home");

        field.activate();
        field.set_label("Homepage");

        // Committed display values are untouched until save.
        assert_eq!(field.label(), "Home");
        assert_eq!(field.draft(), Some(("Homepage", "#home")));
    }

    #[test]
    fn test_edits_in_viewing_mode_are_ignored() {
        let mut field = EditableField::new("Home", "#home");

        field.set_label("ignored");
        assert_eq!(field.label(), "Home");
        assert!(field.save().is_none());
    }
}
