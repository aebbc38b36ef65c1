//! Preview registry: total lookup from block type to its preview builder.

use builder_core::BlockType;

use crate::blocks::{
    AboutPreview, BlockPreview, ContactFormPreview, FaqPreview, FeaturesPreview, FooterPreview,
    HeaderPreview, HeroPreview, PlaceholderPreview, PricingFooterPreview, PricingPreview,
    SignupPreview, SpacerPreview, TestimonialsPreview,
};

static HEADER: HeaderPreview = HeaderPreview;
static HERO: HeroPreview = HeroPreview;
static FEATURES: FeaturesPreview = FeaturesPreview;
static TESTIMONIALS: TestimonialsPreview = TestimonialsPreview;
static ABOUT: AboutPreview = AboutPreview;
static CONTACT_FORM: ContactFormPreview = ContactFormPreview;
static FOOTER: FooterPreview = FooterPreview;
static SPACER: SpacerPreview = SpacerPreview;
static PRICING: PricingPreview = PricingPreview;
static FAQ: FaqPreview = FaqPreview;
static SIGNUP: SignupPreview = SignupPreview;
static PRICING_FOOTER: PricingFooterPreview = PricingFooterPreview;
static PLACEHOLDER: PlaceholderPreview = PlaceholderPreview;

/// Resolve the preview builder for a block type.
///
/// Total over the discriminant set with no side effects; unrecognized
/// types resolve to the placeholder builder rather than failing.
#[must_use]
pub fn resolve(block_type: BlockType) -> &'static dyn BlockPreview {
    match block_type {
        BlockType::Header => &HEADER,
        BlockType::Hero => &HERO,
        BlockType::Features => &FEATURES,
        BlockType::Testimonials => &TESTIMONIALS,
        BlockType::About => &ABOUT,
        BlockType::ContactForm => &CONTACT_FORM,
        BlockType::Footer => &FOOTER,
        BlockType::SectionSpacer => &SPACER,
        BlockType::Pricing => &PRICING,
        BlockType::Faq => &FAQ,
        BlockType::Signup => &SIGNUP,
        BlockType::PricingFooter => &PRICING_FOOTER,
        BlockType::Unknown => &PLACEHOLDER,
    }
}
