//! Blocks - the positioned content units of a page.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Property bag for a block, keyed by property name.
///
/// The shape of the values depends on the block type; readers go through
/// the typed accessors on [`Block`] which supply documented fallbacks.
pub type Properties = serde_json::Map<String, Value>;

/// Unique identifier for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Create a new unique block ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of block type discriminants.
///
/// Foreign discriminants deserialize to [`BlockType::Unknown`] so that a
/// page containing a block this version does not know about still loads;
/// all dispatch sites carry a default arm for it. The wire format is the
/// kebab-case string produced by [`BlockType::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    /// Top navigation bar with logo and links.
    Header,
    /// Large banner with headline and call to action.
    Hero,
    /// Feature grid section.
    Features,
    /// Customer testimonial section.
    Testimonials,
    /// About-the-company section.
    About,
    /// Contact form section.
    ContactForm,
    /// Page footer with company info and quick links.
    Footer,
    /// Vertical whitespace between sections.
    SectionSpacer,
    /// Pricing table section.
    Pricing,
    /// Frequently-asked-questions section.
    Faq,
    /// Newsletter/account signup section.
    Signup,
    /// Compact footer variant for pricing pages.
    PricingFooter,
    /// Catch-all for discriminants this version does not know.
    Unknown,
}

impl From<String> for BlockType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BlockType> for String {
    fn from(value: BlockType) -> Self {
        value.as_str().to_owned()
    }
}

impl BlockType {
    /// Parse a discriminant string; anything unrecognized becomes
    /// [`BlockType::Unknown`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "header" => Self::Header,
            "hero" => Self::Hero,
            "features" => Self::Features,
            "testimonials" => Self::Testimonials,
            "about" => Self::About,
            "contact-form" => Self::ContactForm,
            "footer" => Self::Footer,
            "section-spacer" => Self::SectionSpacer,
            "pricing" => Self::Pricing,
            "faq" => Self::Faq,
            "signup" => Self::Signup,
            "pricing-footer" => Self::PricingFooter,
            _ => Self::Unknown,
        }
    }

    /// The wire-format discriminant string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Testimonials => "testimonials",
            Self::About => "about",
            Self::ContactForm => "contact-form",
            Self::Footer => "footer",
            Self::SectionSpacer => "section-spacer",
            Self::Pricing => "pricing",
            Self::Faq => "faq",
            Self::Signup => "signup",
            Self::PricingFooter => "pricing-footer",
            Self::Unknown => "unknown",
        }
    }

    /// Human-facing title: the discriminant with its first letter
    /// capitalized, e.g. `"contact-form"` becomes `"Contact-form"`.
    #[must_use]
    pub fn title(self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled hyperlink stored inside array-valued properties
/// (`navigationLinks`, `quickLinks`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Link display text.
    pub label: String,
    /// Link target URL.
    pub href: String,
}

impl LinkEntry {
    /// Create a link entry.
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// The entry appended by the "add link" affordance.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("New Link", "#")
    }
}

/// One positioned content unit within a page.
///
/// Blocks are owned by their page and have no identity outside it. The
/// editing surfaces never mutate a block in place; every change produces a
/// new properties map or a new ordered sequence handed back to the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier, stable across reorders and property updates.
    pub id: BlockId,
    /// Type discriminant selecting renderer and settings form.
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Named properties; shape depends on the block type.
    #[serde(default)]
    pub properties: Properties,
}

impl Block {
    /// Create a new block of the given type with empty properties.
    #[must_use]
    pub fn new(block_type: BlockType) -> Self {
        Self {
            id: BlockId::new(),
            block_type,
            properties: Properties::new(),
        }
    }

    /// Set the full property map.
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Set a single property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Read a string property.
    #[must_use]
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Read a string property, falling back to `fallback` when the
    /// property is missing or not a string.
    #[must_use]
    pub fn prop_str_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.prop_str(key).unwrap_or(fallback)
    }

    /// Read an integer property, falling back when missing or mistyped.
    #[must_use]
    pub fn prop_u64_or(&self, key: &str, fallback: u64) -> u64 {
        self.properties
            .get(key)
            .and_then(Value::as_u64)
            .unwrap_or(fallback)
    }

    /// Read a nested string property one level deep, e.g.
    /// `contactInfo.email`.
    #[must_use]
    pub fn nested_str(&self, parent: &str, child: &str) -> Option<&str> {
        self.properties
            .get(parent)
            .and_then(Value::as_object)
            .and_then(|nested| nested.get(child))
            .and_then(Value::as_str)
    }

    /// Read an array-valued link property. Missing properties and
    /// malformed entries yield an empty list rather than an error.
    #[must_use]
    pub fn links(&self, key: &str) -> Vec<LinkEntry> {
        links_from(&self.properties, key)
    }
}

/// Read the link entries stored under `key` in a property map.
#[must_use]
pub(crate) fn links_from(properties: &Properties, key: &str) -> Vec<LinkEntry> {
    properties
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
