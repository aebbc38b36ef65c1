//! The owning editor session.
//!
//! The session is the parent that the editing surfaces are controlled
//! views of: it holds the canonical page and selection, applies the
//! intents the surfaces emit, and feeds the updated state back down.

use tracing::debug;

use crate::intent::MoveDirection;
use crate::{Block, BlockId, EditorIntent, Page, Properties, SelectionState};

/// Owner of the canonical page and selection state.
#[derive(Debug, Clone)]
pub struct EditorSession {
    page: Page,
    selection: SelectionState,
}

impl EditorSession {
    /// Create a session owning the given page.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            selection: SelectionState::new(),
        }
    }

    /// The canonical page.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The selection state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Mutable selection state, for the inline text-edit transitions.
    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    /// Apply an intent emitted by an editing surface.
    pub fn apply(&mut self, intent: EditorIntent) {
        match intent {
            EditorIntent::SelectBlock { id } => self.select_block(id),
            EditorIntent::UpdateBlock { id, properties } => self.update_block(id, properties),
            EditorIntent::DeleteBlock { id } => self.delete_block(id),
            EditorIntent::MoveBlock { id, direction } => self.move_block(id, direction),
            EditorIntent::DuplicateBlock { id } => {
                self.duplicate_block(id);
            }
            EditorIntent::ReorderBlocks { blocks } => self.page.replace_sequence(blocks),
        }
    }

    /// Change or clear the selection.
    pub fn select_block(&mut self, id: Option<BlockId>) {
        self.selection.select(id);
    }

    /// Replace a block's properties with the merged map from a settings
    /// surface. A stale id is a logged no-op.
    pub fn update_block(&mut self, id: BlockId, properties: Properties) {
        if !self.page.replace_properties(id, properties) {
            debug!("dropping property update for missing block {id}");
        }
    }

    /// Remove a block, clearing the selection if it pointed at it.
    pub fn delete_block(&mut self, id: BlockId) {
        if self.page.remove_block(id).is_ok() {
            if self.selection.selected() == Some(id) {
                self.selection.select(None);
            }
        } else {
            debug!("dropping delete for missing block {id}");
        }
    }

    /// Move a block one position. Out-of-bounds requests, including ones
    /// forced past the UI guards, are no-ops.
    pub fn move_block(&mut self, id: BlockId, direction: MoveDirection) {
        self.page.move_block(id, direction);
    }

    /// Duplicate a block; the copy lands immediately after the source and
    /// the selection is left untouched. Returns the new id.
    pub fn duplicate_block(&mut self, id: BlockId) -> Option<BlockId> {
        self.page.duplicate_block(id)
    }

    /// Replace the block sequence with the order handed back by the
    /// canvas.
    pub fn reorder_blocks(&mut self, blocks: Vec<Block>) {
        self.page.replace_sequence(blocks);
    }
}
