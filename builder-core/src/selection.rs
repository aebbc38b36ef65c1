//! Selection and text-edit state for the editing surfaces.

use serde::{Deserialize, Serialize};

use crate::{BlockId, BuilderError, BuilderResult};

/// Which block is selected and which, if any, is in inline text-edit mode.
///
/// Invariant: a block must be selected to be in text-edit mode, so
/// `editing`, when set, always equals `selected`. The transition methods
/// enforce this; changing or clearing selection drops edit mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Option<BlockId>,
    editing: Option<BlockId>,
}

impl SelectionState {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected block, if any.
    #[must_use]
    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// The block in text-edit mode, if any.
    #[must_use]
    pub fn editing(&self) -> Option<BlockId> {
        self.editing
    }

    /// Whether the given block is selected.
    #[must_use]
    pub fn is_selected(&self, id: BlockId) -> bool {
        self.selected == Some(id)
    }

    /// Whether the given block is in text-edit mode.
    #[must_use]
    pub fn is_editing(&self, id: BlockId) -> bool {
        self.editing == Some(id)
    }

    /// Select a block, or clear selection with `None`. Leaving the
    /// current selection also leaves text-edit mode.
    pub fn select(&mut self, id: Option<BlockId>) {
        if self.selected != id {
            self.editing = None;
        }
        self.selected = id;
    }

    /// Put the selected block into text-edit mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not the current selection.
    pub fn begin_editing(&mut self, id: BlockId) -> BuilderResult<()> {
        if self.selected != Some(id) {
            return Err(BuilderError::EditWithoutSelection(id.to_string()));
        }
        self.editing = Some(id);
        Ok(())
    }

    /// Leave text-edit mode, keeping the selection.
    pub fn end_editing(&mut self) {
        self.editing = None;
    }
}
