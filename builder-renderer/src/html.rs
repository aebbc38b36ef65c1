//! HTML export of preview trees.
//!
//! Emails and landing pages ship as HTML, so the exporter walks a
//! [`PreviewNode`] tree and emits markup with inline styles. Text and
//! attribute values are escaped; style values come from the builders'
//! fixed fallbacks or the user's own properties and are emitted as-is
//! inside the quoted attribute after escaping.

use std::fmt::Write;

use crate::node::{NodeStyle, PreviewNode};

/// Serialize one preview node (and its subtree) to an HTML fragment.
#[must_use]
pub fn to_html(node: &PreviewNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Serialize a full standalone HTML document around the given tree.
#[must_use]
pub fn render_document(title: &str, root: &PreviewNode) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        to_html(root)
    )
}

fn write_node(out: &mut String, node: &PreviewNode) {
    match node {
        PreviewNode::Section {
            children,
            layout,
            style,
        } => {
            let mut css = style_css(style.as_ref());
            match layout.as_str() {
                "horizontal" => css.push_str("display:flex;"),
                "grid" => {
                    let columns = style
                        .as_ref()
                        .and_then(|style| style.columns)
                        .unwrap_or(1);
                    let _ = write!(css, "display:grid;grid-template-columns:repeat({columns},1fr);");
                }
                _ => {}
            }
            open_tag(out, "div", &css);
            for child in children {
                write_node(out, child);
            }
            out.push_str("</div>");
        }
        PreviewNode::Heading { level, text, style } => {
            let level = (*level).clamp(1, 6);
            let tag = format!("h{level}");
            open_tag(out, &tag, &style_css(style.as_ref()));
            out.push_str(&escape(text));
            let _ = write!(out, "</{tag}>");
        }
        PreviewNode::Text { text, style } => {
            open_tag(out, "p", &style_css(style.as_ref()));
            out.push_str(&escape(text));
            out.push_str("</p>");
        }
        PreviewNode::Link { label, href } => {
            let _ = write!(out, "<a href=\"{}\">{}</a>", escape(href), escape(label));
        }
        PreviewNode::Button { label, href, style } => {
            let _ = write!(
                out,
                "<a class=\"button\" href=\"{}\"{}>{}</a>",
                escape(href),
                style_attr(&style_css(style.as_ref())),
                escape(label)
            );
        }
        PreviewNode::Spacer { height_px } => {
            let _ = write!(out, "<div style=\"height:{height_px}px\"></div>");
        }
        PreviewNode::Placeholder { message } => {
            let _ = write!(out, "<div class=\"placeholder\">{}</div>", escape(message));
        }
    }
}

fn open_tag(out: &mut String, tag: &str, css: &str) {
    let _ = write!(out, "<{tag}{}>", style_attr(css));
}

fn style_attr(css: &str) -> String {
    if css.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", escape(css))
    }
}

fn style_css(style: Option<&NodeStyle>) -> String {
    let Some(style) = style else {
        return String::new();
    };
    let mut css = String::new();
    if let Some(background) = &style.background {
        let _ = write!(css, "background-color:{background};");
    }
    if let Some(color) = &style.color {
        let _ = write!(css, "color:{color};");
    }
    if let Some(font_size) = style.font_size {
        let _ = write!(css, "font-size:{font_size}px;");
    }
    if let Some(padding) = style.padding {
        let _ = write!(css, "padding:{padding}px;");
    }
    if let Some(width) = &style.width {
        let _ = write!(css, "width:{width};");
    }
    if let Some(min_height) = &style.min_height {
        let _ = write!(css, "min-height:{min_height};");
    }
    css
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_is_escaped() {
        let node = PreviewNode::text("<script>alert('x')</script>");
        let html = to_html(&node);
        assert_eq!(html, "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</p>");
    }

    #[test]
    fn test_link_attributes_are_escaped() {
        let node = PreviewNode::Link {
            label: "A & B".to_string(),
            href: "/q?a=1&b=\"2\"".to_string(),
        };
        let html = to_html(&node);
        assert_eq!(html, "<a href=\"/q?a=1&amp;b=&quot;2&quot;\">A &amp; B</a>");
    }

    #[test]
    fn test_grid_section_emits_column_template() {
        let node = PreviewNode::Section {
            children: vec![],
            layout: "grid".to_string(),
            style: Some(NodeStyle {
                columns: Some(3),
                ..NodeStyle::default()
            }),
        };
        let html = to_html(&node);
        assert!(html.contains("grid-template-columns:repeat(3,1fr)"));
    }

    #[test]
    fn test_document_wraps_tree() {
        let node = PreviewNode::Spacer { height_px: 40 };
        let html = render_document("My Page", &node);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Page</title>"));
        assert!(html.contains("height:40px"));
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let node = PreviewNode::Heading {
            level: 9,
            text: "Deep".to_string(),
            style: None,
        };
        assert_eq!(to_html(&node), "<h6>Deep</h6>");
    }
}
