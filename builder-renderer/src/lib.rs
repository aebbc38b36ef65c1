//! # Builder Renderer
//!
//! Preview rendering for builder pages. Blocks are rendered into a
//! declarative [`PreviewNode`] tree - the output vocabulary a host shell
//! or an HTML exporter consumes - through a registry that dispatches on
//! block type and degrades unknown types to an explicit placeholder.
//!
//! ```
//! use builder_core::{Block, BlockType, Page, PreviewDevice};
//! use builder_renderer::render_preview;
//! use serde_json::json;
//!
//! let page = Page::new("Landing").with_blocks(vec![
//!     Block::new(BlockType::Hero).with_property("headline", json!("Hello")),
//! ]);
//! let document = render_preview(&page, PreviewDevice::Mobile);
//! let html = builder_renderer::to_html(&document);
//! assert!(html.contains("Hello"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod blocks;
pub mod html;
pub mod node;
pub mod page;
pub mod registry;

pub use blocks::BlockPreview;
pub use html::{render_document, to_html};
pub use node::{NodeStyle, PreviewNode};
pub use page::{render_blocks, render_preview};
pub use registry::resolve;

/// Builder renderer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
