//! Editor intents - the callback boundary between editing surfaces and
//! the owning session, expressed as data.

use serde::{Deserialize, Serialize};

use crate::{Block, BlockId, Properties};

/// Direction of a discrete one-position move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Toward the start of the sequence.
    Up,
    /// Toward the end of the sequence.
    Down,
}

/// An editing intent emitted by a surface for the session to apply.
///
/// Surfaces never mutate the canonical page themselves; they mirror it,
/// edit local drafts, and hand one of these back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum EditorIntent {
    /// Change (or clear) the selected block.
    SelectBlock {
        /// The block to select, or `None` to clear selection.
        id: Option<BlockId>,
    },

    /// Replace a block's properties with a full merged map.
    UpdateBlock {
        /// The block to update.
        id: BlockId,
        /// The complete merged property map, not a delta.
        properties: Properties,
    },

    /// Remove a block.
    DeleteBlock {
        /// The block to remove.
        id: BlockId,
    },

    /// Move a block one position up or down.
    MoveBlock {
        /// The block to move.
        id: BlockId,
        /// Which way to move it.
        direction: MoveDirection,
    },

    /// Clone a block; placement is the session's decision.
    DuplicateBlock {
        /// The block to clone.
        id: BlockId,
    },

    /// Replace the whole block sequence with a new order.
    ReorderBlocks {
        /// The full new sequence, not a delta.
        blocks: Vec<Block>,
    },
}
