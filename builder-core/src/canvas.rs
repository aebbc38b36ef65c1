//! Reorderable canvas: the editable block list with drag reordering.
//!
//! The canvas keeps a local mirror of the page's block order so a drag in
//! progress renders smoothly while reorder intents round-trip through the
//! owner. Reordering is continuous during the drag: every hover over a new
//! position splices the dragged block there and emits the full new
//! sequence. The mirror reconciles against [`Page::revision`] whenever the
//! owner supplies fresh state, and is authoritative for rendered order in
//! between.

use tracing::{debug, warn};

use crate::{Block, BlockId, BlockType, EditorIntent, Page, SelectionState};

/// View model for one rendered canvas item.
///
/// Clicking the item body selects the block; the drag handle and the
/// action cluster are separate surfaces whose events must not reach the
/// select handler. Hosts wire each action to its own intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasItem {
    /// The block's id.
    pub id: BlockId,
    /// The block's type, for preview dispatch.
    pub block_type: BlockType,
    /// Position in the rendered order.
    pub index: usize,
    /// Whether the block is the current selection. Selected items show
    /// the action cluster.
    pub is_selected: bool,
    /// Whether the block is the current drag source.
    pub is_dragging: bool,
    /// Move-up guard: false at the first position, and the action must
    /// stay un-invocable when false.
    pub can_move_up: bool,
    /// Move-down guard: false at the last position.
    pub can_move_down: bool,
    /// Whether the duplicate action is offered.
    pub can_duplicate: bool,
}

/// Local order mirror with drag state.
#[derive(Debug, Clone, Default)]
pub struct CanvasView {
    order: Vec<Block>,
    synced_revision: Option<u64>,
    dragging: Option<BlockId>,
}

impl CanvasView {
    /// Create an empty canvas view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the mirror with owner-held state.
    ///
    /// The mirror is replaced only when the page revision differs from
    /// the last synced one; identity of the sequence version, not a deep
    /// diff, decides.
    pub fn sync(&mut self, page: &Page) {
        if self.synced_revision != Some(page.revision()) {
            self.order = page.blocks().to_vec();
            self.synced_revision = Some(page.revision());
            if let Some(id) = self.dragging {
                // A drag can outlive a sequence replacement (the reorder
                // round-trip itself); drop it only if the block is gone.
                if !self.order.iter().any(|block| block.id == id) {
                    debug!("drag source {id} disappeared during sync");
                    self.dragging = None;
                }
            }
        }
    }

    /// The rendered block order. Between syncs this mirror is
    /// authoritative, not the owner's sequence.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.order
    }

    /// Start dragging the block at `index`.
    pub fn begin_drag(&mut self, index: usize) {
        self.dragging = self.order.get(index).map(|block| block.id);
    }

    /// The current drag source, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<BlockId> {
        self.dragging
    }

    /// Hover the dragged block over `hover_index`.
    ///
    /// Splices the dragged block out of its current position and back in
    /// at `hover_index`, then emits the full new sequence. Hovering the
    /// drag's own position is an idempotent no-op, as is a hover with no
    /// drag in progress or out of range.
    pub fn hover(&mut self, hover_index: usize) -> Option<EditorIntent> {
        let drag_id = self.dragging?;
        let drag_index = self.order.iter().position(|block| block.id == drag_id)?;
        if drag_index == hover_index || hover_index >= self.order.len() {
            return None;
        }

        let dragged = self.order.remove(drag_index);
        self.order.insert(hover_index, dragged);
        debug!("drag moved block {drag_id} from {drag_index} to {hover_index}");
        Some(EditorIntent::ReorderBlocks {
            blocks: self.order.clone(),
        })
    }

    /// Finish the drag.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Move-up guard for the item at `index`.
    #[must_use]
    pub fn can_move_up(&self, index: usize) -> bool {
        index > 0 && index < self.order.len()
    }

    /// Move-down guard for the item at `index`.
    #[must_use]
    pub fn can_move_down(&self, index: usize) -> bool {
        index + 1 < self.order.len()
    }

    /// Build the per-item view models for rendering.
    ///
    /// `allow_duplicate` reflects whether the owner provided the
    /// duplicate capability. Unknown block types still get an item - the
    /// preview side degrades them to a placeholder so one bad block never
    /// hides its siblings.
    #[must_use]
    pub fn items(&self, selection: &SelectionState, allow_duplicate: bool) -> Vec<CanvasItem> {
        self.order
            .iter()
            .enumerate()
            .map(|(index, block)| {
                if block.block_type == BlockType::Unknown {
                    warn!("rendering placeholder for unknown block type at {index}");
                }
                CanvasItem {
                    id: block.id,
                    block_type: block.block_type,
                    index,
                    is_selected: selection.is_selected(block.id),
                    is_dragging: self.dragging == Some(block.id),
                    can_move_up: self.can_move_up(index),
                    can_move_down: self.can_move_down(index),
                    can_duplicate: allow_duplicate,
                }
            })
            .collect()
    }
}
