//! Settings-form registry: total lookup from block type to the property
//! form the settings panel renders.

use crate::BlockType;

/// Message shown when a block type has no settings form.
pub const UNAVAILABLE_MESSAGE: &str =
    "Editing is not yet available for this block type. Select a different block to continue.";

/// The settings form a block type resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsForm {
    /// Logo, navigation links, CTA button.
    Header,
    /// Headline, subheading, colors, CTA button.
    Hero,
    /// Heading, description, column count, background.
    Features,
    /// Company info, contact details, colors, quick links.
    Footer,
    /// No form; the panel renders [`UNAVAILABLE_MESSAGE`].
    Unavailable,
}

/// Resolve the settings form for a block type.
///
/// Total over the discriminant set: types without a dedicated form,
/// including [`BlockType::Unknown`], resolve to
/// [`SettingsForm::Unavailable`] rather than failing.
#[must_use]
pub const fn settings_form(block_type: BlockType) -> SettingsForm {
    match block_type {
        BlockType::Header => SettingsForm::Header,
        BlockType::Hero => SettingsForm::Hero,
        BlockType::Features => SettingsForm::Features,
        BlockType::Footer => SettingsForm::Footer,
        BlockType::Testimonials
        | BlockType::About
        | BlockType::ContactForm
        | BlockType::SectionSpacer
        | BlockType::Pricing
        | BlockType::Faq
        | BlockType::Signup
        | BlockType::PricingFooter
        | BlockType::Unknown => SettingsForm::Unavailable,
    }
}

/// The input control a form field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    /// Free text input.
    Text {
        /// Placeholder shown when empty.
        placeholder: &'static str,
    },
    /// Color picker paired with a hex text input.
    Color {
        /// Hex value displayed when the property is missing.
        fallback: &'static str,
    },
    /// Bounded integer input.
    Number {
        /// Minimum accepted value.
        min: u64,
        /// Maximum accepted value.
        max: u64,
        /// Value displayed when the property is missing.
        fallback: u64,
    },
    /// Editable list of label/URL entries.
    LinkList,
    /// Text input writing one level deep into an object-valued property.
    NestedText {
        /// The object-valued parent property.
        parent: &'static str,
        /// Placeholder shown when empty.
        placeholder: &'static str,
    },
}

/// One field of a settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Property key the field reads and writes. For
    /// [`FormControl::NestedText`] this is the child key.
    pub key: &'static str,
    /// Field label.
    pub label: &'static str,
    /// The control rendered for the field.
    pub control: FormControl,
}

const fn text(key: &'static str, label: &'static str, placeholder: &'static str) -> FormField {
    FormField {
        key,
        label,
        control: FormControl::Text { placeholder },
    }
}

const fn color(key: &'static str, label: &'static str, fallback: &'static str) -> FormField {
    FormField {
        key,
        label,
        control: FormControl::Color { fallback },
    }
}

const HEADER_FIELDS: &[FormField] = &[
    text("logoText", "Logo Text", "Logo text"),
    FormField {
        key: "navigationLinks",
        label: "Navigation Links",
        control: FormControl::LinkList,
    },
    text("ctaButtonText", "CTA Button Text", "Button text"),
    text("ctaButtonLink", "CTA Button Link", "Button URL"),
];

const HERO_FIELDS: &[FormField] = &[
    text("headline", "Headline", "Headline text"),
    text("subheading", "Subheading", "Subheading text"),
    color("backgroundColor", "Background Color", "#f3f4f6"),
    text("minHeight", "Min Height", "500px"),
    text("ctaButtonText", "CTA Button Text", "Button text"),
    color("ctaButtonColor", "CTA Button Color", "#FF6A00"),
];

const FEATURES_FIELDS: &[FormField] = &[
    text("heading", "Heading", "Section heading"),
    text("description", "Description", "Section description"),
    FormField {
        key: "columns",
        label: "Columns",
        control: FormControl::Number {
            min: 1,
            max: 6,
            fallback: 4,
        },
    },
    color("backgroundColor", "Background Color", "#ffffff"),
];

const FOOTER_FIELDS: &[FormField] = &[
    text("companyName", "Company Name", "Company name"),
    text("companyDescription", "Description", "Company description"),
    FormField {
        key: "email",
        label: "Email",
        control: FormControl::NestedText {
            parent: "contactInfo",
            placeholder: "Email address",
        },
    },
    FormField {
        key: "phone",
        label: "Phone",
        control: FormControl::NestedText {
            parent: "contactInfo",
            placeholder: "Phone number",
        },
    },
    color("backgroundColor", "Background Color", "#1f2937"),
    color("textColor", "Text Color", "#ffffff"),
    FormField {
        key: "quickLinks",
        label: "Quick Links",
        control: FormControl::LinkList,
    },
];

impl SettingsForm {
    /// The fields the form renders, in display order. Empty for
    /// [`SettingsForm::Unavailable`].
    #[must_use]
    pub const fn fields(self) -> &'static [FormField] {
        match self {
            Self::Header => HEADER_FIELDS,
            Self::Hero => HERO_FIELDS,
            Self::Features => FEATURES_FIELDS,
            Self::Footer => FOOTER_FIELDS,
            Self::Unavailable => &[],
        }
    }
}
