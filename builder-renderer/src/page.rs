//! Page-level render assembly.

use builder_core::{Block, BlockType, Page, PreviewDevice};
use tracing::warn;

use crate::node::{NodeStyle, PreviewNode};
use crate::registry::resolve;

/// Render an ordered block sequence into preview nodes.
///
/// Every block goes through the registry; unknown types degrade to the
/// placeholder (logged as non-fatal) so one bad block never prevents its
/// siblings from rendering.
#[must_use]
pub fn render_blocks(blocks: &[Block]) -> Vec<PreviewNode> {
    blocks
        .iter()
        .map(|block| {
            if block.block_type == BlockType::Unknown {
                warn!("block {} has an unknown type, rendering placeholder", block.id);
            }
            resolve(block.block_type).render(block)
        })
        .collect()
}

/// Assemble the read-only preview document for a page under a simulated
/// device width.
///
/// The device is purely a container rendering parameter; block data is
/// untouched and the output carries no editing affordances.
#[must_use]
pub fn render_preview(page: &Page, device: PreviewDevice) -> PreviewNode {
    PreviewNode::styled_section(
        render_blocks(page.blocks()),
        NodeStyle {
            width: Some(device.css_width()),
            background: Some("#ffffff".to_string()),
            ..NodeStyle::default()
        },
    )
}
