//! Per-block-type preview builders.
//!
//! Each builder reads its block's properties through the typed accessors
//! and falls back to the documented defaults when a property is missing,
//! so a half-configured block still renders something sensible. The
//! output is pure data; selection highlighting and edit affordances are
//! the host's layer on top.

use builder_core::{Block, LinkEntry};

use crate::node::{NodeStyle, PreviewNode};

/// Message rendered in place of a block whose type is not recognized.
pub const UNKNOWN_BLOCK_MESSAGE: &str = "Unknown block type";

/// A preview builder for one block type.
pub trait BlockPreview: Sync {
    /// Render the block into a preview node.
    fn render(&self, block: &Block) -> PreviewNode;
}

fn link_nodes(links: &[LinkEntry]) -> Vec<PreviewNode> {
    links
        .iter()
        .map(|link| PreviewNode::Link {
            label: link.label.clone(),
            href: link.href.clone(),
        })
        .collect()
}

/// Top navigation bar: logo text, nav links, CTA button.
pub struct HeaderPreview;

impl HeaderPreview {
    fn default_links() -> Vec<LinkEntry> {
        vec![
            LinkEntry::new("Home", "#home"),
            LinkEntry::new("Features", "#features"),
            LinkEntry::new("About", "#about"),
            LinkEntry::new("Contact", "#contact"),
        ]
    }
}

impl BlockPreview for HeaderPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        let mut links = block.links("navigationLinks");
        if links.is_empty() {
            links = Self::default_links();
        }

        let mut children = vec![PreviewNode::Heading {
            level: 2,
            text: block.prop_str_or("logoText", "Logo").to_string(),
            style: None,
        }];
        children.extend(link_nodes(&links));
        if let Some(cta) = block.prop_str("ctaButtonText") {
            children.push(PreviewNode::Button {
                label: cta.to_string(),
                href: block.prop_str_or("ctaButtonLink", "#").to_string(),
                style: None,
            });
        }

        PreviewNode::Section {
            children,
            layout: "horizontal".to_string(),
            style: None,
        }
    }
}

/// Hero banner: headline, subheading, CTA, background.
pub struct HeroPreview;

impl BlockPreview for HeroPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        let children = vec![
            PreviewNode::Heading {
                level: 1,
                text: block.prop_str_or("headline", "Your headline here").to_string(),
                style: None,
            },
            PreviewNode::text(block.prop_str_or("subheading", "")),
            PreviewNode::Button {
                label: block.prop_str_or("ctaButtonText", "Get Started").to_string(),
                href: block.prop_str_or("ctaButtonLink", "#").to_string(),
                style: Some(NodeStyle {
                    background: Some(block.prop_str_or("ctaButtonColor", "#FF6A00").to_string()),
                    ..NodeStyle::default()
                }),
            },
        ];
        PreviewNode::styled_section(
            children,
            NodeStyle {
                background: Some(block.prop_str_or("backgroundColor", "#f3f4f6").to_string()),
                min_height: Some(block.prop_str_or("minHeight", "500px").to_string()),
                ..NodeStyle::default()
            },
        )
    }
}

/// Feature grid with a configurable column count.
pub struct FeaturesPreview;

impl BlockPreview for FeaturesPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        let columns = block.prop_u64_or("columns", 4).clamp(1, 6);
        PreviewNode::Section {
            children: vec![
                PreviewNode::Heading {
                    level: 2,
                    text: block.prop_str_or("heading", "Features").to_string(),
                    style: None,
                },
                PreviewNode::text(block.prop_str_or("description", "")),
            ],
            layout: "grid".to_string(),
            style: Some(NodeStyle {
                background: Some(block.prop_str_or("backgroundColor", "#ffffff").to_string()),
                columns: Some(columns),
                ..NodeStyle::default()
            }),
        }
    }
}

/// Customer testimonials section.
pub struct TestimonialsPreview;

impl BlockPreview for TestimonialsPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        PreviewNode::section(vec![
            PreviewNode::Heading {
                level: 2,
                text: block
                    .prop_str_or("heading", "What our customers say")
                    .to_string(),
                style: None,
            },
            PreviewNode::text(block.prop_str_or("description", "")),
        ])
    }
}

/// About-the-company section.
pub struct AboutPreview;

impl BlockPreview for AboutPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        PreviewNode::section(vec![
            PreviewNode::Heading {
                level: 2,
                text: block.prop_str_or("heading", "About Us").to_string(),
                style: None,
            },
            PreviewNode::text(block.prop_str_or("body", "")),
        ])
    }
}

/// Contact form section. The form itself is host chrome; the preview
/// shows heading and submit label.
pub struct ContactFormPreview;

impl BlockPreview for ContactFormPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        PreviewNode::section(vec![
            PreviewNode::Heading {
                level: 2,
                text: block.prop_str_or("heading", "Contact Us").to_string(),
                style: None,
            },
            PreviewNode::Button {
                label: block.prop_str_or("submitLabel", "Send Message").to_string(),
                href: "#".to_string(),
                style: None,
            },
        ])
    }
}

/// Page footer: company info, contact details, quick links.
pub struct FooterPreview;

impl BlockPreview for FooterPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        let mut children = vec![
            PreviewNode::Heading {
                level: 3,
                text: block.prop_str_or("companyName", "Company").to_string(),
                style: None,
            },
            PreviewNode::text(block.prop_str_or("companyDescription", "")),
        ];
        if let Some(email) = block.nested_str("contactInfo", "email") {
            children.push(PreviewNode::text(email));
        }
        if let Some(phone) = block.nested_str("contactInfo", "phone") {
            children.push(PreviewNode::text(phone));
        }
        children.extend(link_nodes(&block.links("quickLinks")));

        PreviewNode::styled_section(
            children,
            NodeStyle {
                background: Some(block.prop_str_or("backgroundColor", "#1f2937").to_string()),
                color: Some(block.prop_str_or("textColor", "#ffffff").to_string()),
                ..NodeStyle::default()
            },
        )
    }
}

/// Vertical whitespace between sections.
pub struct SpacerPreview;

impl BlockPreview for SpacerPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        PreviewNode::Spacer {
            height_px: block.prop_u64_or("height", 40),
        }
    }
}

/// Pricing table section.
pub struct PricingPreview;

impl BlockPreview for PricingPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        PreviewNode::section(vec![
            PreviewNode::Heading {
                level: 2,
                text: block.prop_str_or("heading", "Pricing").to_string(),
                style: None,
            },
            PreviewNode::text(block.prop_str_or("description", "")),
        ])
    }
}

/// Frequently-asked-questions section.
pub struct FaqPreview;

impl BlockPreview for FaqPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        PreviewNode::section(vec![PreviewNode::Heading {
            level: 2,
            text: block
                .prop_str_or("heading", "Frequently Asked Questions")
                .to_string(),
            style: None,
        }])
    }
}

/// Signup call-to-action section.
pub struct SignupPreview;

impl BlockPreview for SignupPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        PreviewNode::section(vec![
            PreviewNode::Heading {
                level: 2,
                text: block.prop_str_or("headline", "Sign up").to_string(),
                style: None,
            },
            PreviewNode::Button {
                label: block.prop_str_or("ctaButtonText", "Get Started").to_string(),
                href: block.prop_str_or("ctaButtonLink", "#").to_string(),
                style: Some(NodeStyle {
                    background: Some(block.prop_str_or("ctaButtonColor", "#FF6A00").to_string()),
                    ..NodeStyle::default()
                }),
            },
        ])
    }
}

/// Compact footer variant for pricing pages.
pub struct PricingFooterPreview;

impl BlockPreview for PricingFooterPreview {
    fn render(&self, block: &Block) -> PreviewNode {
        let mut children = vec![PreviewNode::text(block.prop_str_or("text", ""))];
        children.extend(link_nodes(&block.links("quickLinks")));
        PreviewNode::styled_section(
            children,
            NodeStyle {
                background: Some(block.prop_str_or("backgroundColor", "#1f2937").to_string()),
                color: Some(block.prop_str_or("textColor", "#ffffff").to_string()),
                ..NodeStyle::default()
            },
        )
    }
}

/// Stand-in for unrecognized block types. Rendering degrades to this
/// placeholder instead of failing, so one bad block never hides its
/// siblings.
pub struct PlaceholderPreview;

impl BlockPreview for PlaceholderPreview {
    fn render(&self, _block: &Block) -> PreviewNode {
        PreviewNode::Placeholder {
            message: UNKNOWN_BLOCK_MESSAGE.to_string(),
        }
    }
}
