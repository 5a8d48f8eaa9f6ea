//! Site copy, prices and contact details.
//!
//! The document lives in `content.json` next to `Cargo.toml` and is
//! compiled into the binary. Missing fields fall back to empty values;
//! the contact links fall back to the real ones so the dispatch table
//! keeps working even with a broken document.

use log::error;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub pricing: PricingContent,
    pub contact: ContactContent,
    pub links: ContactLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub title_lead: String,
    pub title_accent: String,
    pub subtitle: String,
    pub social_proof: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub scroll_hint: String,
    pub background_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub heading: String,
    pub heading_accent: String,
    pub paragraphs: Vec<String>,
    pub offer_heading: String,
    pub offers: Vec<String>,
    pub cta: String,
    pub video_url: String,
    pub video_title: String,
    pub video_caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingContent {
    pub heading: String,
    pub heading_accent: String,
    pub intro: String,
    pub how_it_works: String,
    pub steps: Vec<PricingStep>,
    pub tiers: Vec<PricingTier>,
    pub book_label: String,
    pub unavailable_label: String,
    pub location_note: String,
    pub footnote: String,
    pub package_notice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingStep {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingTier {
    /// Action key sent to the booking dispatch.
    pub key: String,
    pub name: String,
    pub sessions: String,
    pub price: String,
    pub unit_price: String,
    pub features: Vec<String>,
    pub badge: Option<String>,
    pub featured: bool,
    /// Only bookable tiers get an active button.
    pub bookable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub heading: String,
    pub heading_accent: String,
    pub intro: String,
    pub phone_label: String,
    pub phone_display: String,
    pub email_label: String,
    pub email_display: String,
    pub whatsapp_label: String,
    pub whatsapp_hint: String,
    pub cta: String,
    pub copyright_holder: String,
}

/// Outbound URIs of the contact actions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactLinks {
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
    pub booking: String,
    pub fallback_notice: String,
}

impl Default for ContactLinks {
    fn default() -> Self {
        ContactLinks {
            phone: "tel:+33776191353".to_string(),
            email: "mailto:unpianoamarseille@gmail.com".to_string(),
            whatsapp: "https://wa.me/33776191353".to_string(),
            booking: "https://cal.com/unpianoamarseille/cours-individuel-d-une-heure".to_string(),
            fallback_notice: "Booking form would open here in a real application!".to_string(),
        }
    }
}

impl SiteContent {
    pub fn parse(document: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(document)?)
    }
}

static CONTENT: Lazy<SiteContent> = Lazy::new(|| {
    SiteContent::parse(config::CONTENT_DOCUMENT).unwrap_or_else(|e| {
        error!("{}", e);
        SiteContent::default()
    })
});

pub fn site() -> &'static SiteContent {
    &CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_document_parses() {
        let content = SiteContent::parse(config::CONTENT_DOCUMENT).expect("content.json");
        assert_eq!(content.hero.title_accent, "Marseille");
        assert_eq!(content.links, ContactLinks::default());
        assert_eq!(content.pricing.tiers.len(), 3);
        assert_eq!(content.about.offers.len(), 4);
    }

    #[test]
    fn test_only_trial_is_bookable() {
        let tiers = &site().pricing.tiers;
        let bookable: Vec<&str> = tiers
            .iter()
            .filter(|tier| tier.bookable)
            .map(|tier| tier.key.as_str())
            .collect();
        assert_eq!(bookable, vec!["trial"]);
        assert_eq!(tiers[1].badge.as_deref(), Some("Populaire"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let content = SiteContent::parse(r#"{ "hero": { "title_lead": "Bonjour" } }"#).expect("partial");
        assert_eq!(content.hero.title_lead, "Bonjour");
        assert!(content.pricing.tiers.is_empty());
        assert_eq!(content.links.phone, "tel:+33776191353");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = SiteContent::parse("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("site content is malformed"));
    }
}
