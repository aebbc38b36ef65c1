//! Preview node tree - the declarative output vocabulary.
//!
//! Block preview builders produce this tree; a host shell walks it to
//! draw widgets and the HTML exporter serializes it. The shape follows
//! the usual component-tree conventions: containers with a layout string
//! and children, leaves for text-like content, and an explicit
//! placeholder node so degraded blocks stay visible.

use serde::{Deserialize, Serialize};

/// Style properties for preview nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeStyle {
    /// Background color as hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Text/foreground color as hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Padding in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Container width as a CSS length, e.g. `375px` or `100%`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Minimum height as a CSS length, e.g. `500px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    /// Grid column count for grid-layout sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u64>,
}

/// A node of the preview tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum PreviewNode {
    /// A layout container for grouping children.
    Section {
        /// Child nodes.
        children: Vec<PreviewNode>,
        /// Layout direction: "horizontal", "vertical", or "grid".
        #[serde(default = "default_layout")]
        layout: String,
        /// Optional styling.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<NodeStyle>,
    },

    /// A heading.
    Heading {
        /// Heading level, 1 through 6.
        level: u8,
        /// Heading text.
        text: String,
        /// Optional styling.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<NodeStyle>,
    },

    /// A text paragraph.
    Text {
        /// Text content.
        text: String,
        /// Optional styling.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<NodeStyle>,
    },

    /// A hyperlink.
    Link {
        /// Link display text.
        label: String,
        /// Link target URL.
        href: String,
    },

    /// A call-to-action button.
    Button {
        /// Button label text.
        label: String,
        /// Button target URL.
        href: String,
        /// Optional styling.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<NodeStyle>,
    },

    /// Vertical whitespace.
    Spacer {
        /// Height in pixels.
        height_px: u64,
    },

    /// Explicit stand-in for content that could not be rendered.
    Placeholder {
        /// Message shown in place of the content.
        message: String,
    },
}

pub(crate) fn default_layout() -> String {
    "vertical".to_string()
}

impl PreviewNode {
    /// Shorthand for a vertical section with no style.
    #[must_use]
    pub fn section(children: Vec<PreviewNode>) -> Self {
        Self::Section {
            children,
            layout: default_layout(),
            style: None,
        }
    }

    /// Shorthand for a styled vertical section.
    #[must_use]
    pub fn styled_section(children: Vec<PreviewNode>, style: NodeStyle) -> Self {
        Self::Section {
            children,
            layout: default_layout(),
            style: Some(style),
        }
    }

    /// Shorthand for an unstyled text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: None,
        }
    }
}
