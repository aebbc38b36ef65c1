//! Pages - ordered collections of blocks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intent::MoveDirection;
use crate::{Block, BlockId, BuilderError, BuilderResult, Properties};

/// Unique identifier for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    /// Create a new unique page ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered collection of blocks representing one email or landing page.
///
/// Sequence order is the rendering and export order. Block ids within the
/// sequence are unique. Every mutation bumps [`Page::revision`], which is
/// the identity editing surfaces reconcile their local mirrors against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page identifier.
    pub id: PageId,
    /// Page title.
    pub title: String,
    /// Ordered block sequence.
    blocks: Vec<Block>,
    /// Mutation counter, bumped on every change to the sequence or to any
    /// block within it.
    #[serde(default)]
    revision: u64,
}

impl Page {
    /// Create a new empty page.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: PageId::new(),
            title: title.into(),
            blocks: Vec::new(),
            revision: 0,
        }
    }

    /// Set the block sequence.
    #[must_use]
    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// The ordered block sequence.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The current mutation revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of blocks on the page.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the page has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get a block by ID.
    #[must_use]
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Position of a block in the sequence.
    #[must_use]
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    /// Append a block to the end of the sequence.
    pub fn push_block(&mut self, block: Block) -> BlockId {
        let id = block.id;
        self.blocks.push(block);
        self.revision += 1;
        id
    }

    /// Remove a block from the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not found.
    pub fn remove_block(&mut self, id: BlockId) -> BuilderResult<Block> {
        let index = self
            .index_of(id)
            .ok_or_else(|| BuilderError::BlockNotFound(id.to_string()))?;
        let block = self.blocks.remove(index);
        self.revision += 1;
        Ok(block)
    }

    /// Replace a block's properties wholesale with the merged map handed
    /// back by a settings surface. Returns `false` when the id is gone
    /// (stale intent), which callers treat as a no-op.
    pub fn replace_properties(&mut self, id: BlockId, properties: Properties) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|block| block.id == id) else {
            return false;
        };
        block.properties = properties;
        self.revision += 1;
        true
    }

    /// Move a block one position up or down. Out-of-bounds moves are
    /// no-ops even when forced past the UI guards; returns whether the
    /// sequence changed.
    pub fn move_block(&mut self, id: BlockId, direction: MoveDirection) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up => {
                if index == 0 {
                    return false;
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= self.blocks.len() {
                    return false;
                }
                index + 1
            }
        };
        self.blocks.swap(index, target);
        self.revision += 1;
        true
    }

    /// Clone a block under a fresh id and insert the copy immediately
    /// after the source. Returns the new id, or `None` when the source is
    /// gone.
    pub fn duplicate_block(&mut self, id: BlockId) -> Option<BlockId> {
        let index = self.index_of(id)?;
        let mut copy = self.blocks.get(index)?.clone();
        copy.id = BlockId::new();
        let new_id = copy.id;
        self.blocks.insert(index + 1, copy);
        self.revision += 1;
        Some(new_id)
    }

    /// Replace the whole sequence, e.g. with the order handed back by a
    /// drag reorder. The new sequence is trusted to be a permutation of
    /// the old one.
    pub fn replace_sequence(&mut self, blocks: Vec<Block>) {
        debug_assert_eq!(
            blocks.len(),
            self.blocks.len(),
            "reorder must not add or drop blocks"
        );
        self.blocks = blocks;
        self.revision += 1;
    }

    /// Serialize the page to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> BuilderResult<String> {
        serde_json::to_string(self).map_err(BuilderError::Serialization)
    }

    /// Deserialize a page from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> BuilderResult<Self> {
        serde_json::from_str(json).map_err(BuilderError::Serialization)
    }
}
