//! Copy deck: all page text as data.
//!
//! The renderers never invent copy; every string on the page comes from a
//! [`Deck`]. The built-in default deck is the stock site, and a sparse
//! `copy.toml` can override any part of it — the file only needs the keys it
//! changes, like the config layer.
//!
//! The deck is opaque to the motion core: reveal gates, the ticker, and the
//! emblem never inspect it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The full copy deck for the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Deck {
    pub site: SiteCopy,
    pub nav: Vec<NavLink>,
    pub hero: HeroCopy,
    /// Label repeated through the ticker band.
    pub marquee_label: String,
    pub context: ContextCopy,
    pub services: ServicesCopy,
    pub approach: ApproachCopy,
    pub footer: FooterCopy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteCopy {
    /// Wordmark in the fixed nav, also the document title.
    pub title: String,
    pub lang: String,
    pub studio: String,
    pub locations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    /// Section anchor without the leading `#`.
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroCopy {
    pub badge: String,
    pub heading: String,
    /// Second heading line, set in the accent style.
    pub heading_accent: String,
    pub lede: String,
    /// Anchor the scroll cue points at.
    pub cue_anchor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextCopy {
    pub anchor: String,
    pub heading: String,
    pub heading_accent: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub panel_caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServicesCopy {
    pub anchor: String,
    pub heading: String,
    pub hint: String,
    pub cards: Vec<ServiceCard>,
    pub closing: ClosingCard,
}

/// Accent variant for a service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardAccent {
    #[default]
    Plain,
    Royal,
    Acid,
}

impl CardAccent {
    pub fn class(self) -> &'static str {
        match self {
            CardAccent::Plain => "card-plain",
            CardAccent::Royal => "card-royal",
            CardAccent::Acid => "card-acid",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceCard {
    pub title: String,
    pub blurb: String,
    pub bullets: Vec<String>,
    pub accent: CardAccent,
}

/// The open-ended card at the end of the carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClosingCard {
    pub title: String,
    pub blurb: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApproachCopy {
    pub anchor: String,
    pub badge: String,
    pub heading: String,
    pub lede: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterCopy {
    pub anchor: String,
    pub heading: String,
    pub heading_accent: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub tagline: String,
}

// =============================================================================
// Stock deck
// =============================================================================

impl Default for Deck {
    fn default() -> Self {
        Self {
            site: SiteCopy::default(),
            nav: vec![
                NavLink {
                    label: "Context".to_string(),
                    anchor: "context".to_string(),
                },
                NavLink {
                    label: "Services".to_string(),
                    anchor: "services".to_string(),
                },
                NavLink {
                    label: "Approach".to_string(),
                    anchor: "approach".to_string(),
                },
            ],
            hero: HeroCopy::default(),
            marquee_label: "Design for Recycling • Minimization • Traceability • Reusability •"
                .to_string(),
            context: ContextCopy::default(),
            services: ServicesCopy::default(),
            approach: ApproachCopy::default(),
            footer: FooterCopy::default(),
        }
    }
}

impl Default for SiteCopy {
    fn default() -> Self {
        Self {
            title: "humelt".to_string(),
            lang: "en".to_string(),
            studio: "Humelt Design".to_string(),
            locations: "Gdansk — Berlin — Paris".to_string(),
        }
    }
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            badge: "EU PPWR Readiness".to_string(),
            heading: "Future Proof".to_string(),
            heading_accent: "Your Packaging".to_string(),
            lede: "A specialized design consultancy helping FMCG brands navigate the new \
                   circular economy regulations without losing their soul."
                .to_string(),
            cue_anchor: "context".to_string(),
        }
    }
}

impl Default for ContextCopy {
    fn default() -> Self {
        Self {
            anchor: "context".to_string(),
            heading: "The shift is".to_string(),
            heading_accent: "non-negotiable.".to_string(),
            paragraphs: vec![
                "The EU's Packaging and Packaging Waste Regulation (PPWR) isn't just a policy \
                 update; it's a fundamental reset of how we design, produce, and dispose of goods."
                    .to_string(),
                "By 2030, all packaging must be recyclable by design. Grades D and E will be \
                 banned. The era of \"wish-cycling\" is over — now, data defines market access."
                    .to_string(),
            ],
            stats: vec![
                Stat {
                    value: "2030".to_string(),
                    label: "Compliance Deadline".to_string(),
                },
                Stat {
                    value: "100%".to_string(),
                    label: "Recyclable Portfolio".to_string(),
                },
            ],
            panel_caption: "Material Audit".to_string(),
        }
    }
}

impl Default for ServicesCopy {
    fn default() -> Self {
        Self {
            anchor: "services".to_string(),
            heading: "Intervention".to_string(),
            hint: "Scroll to explore services".to_string(),
            cards: vec![
                ServiceCard {
                    title: "Portfolio Audit".to_string(),
                    blurb: "A complete SKU-by-SKU risk assessment against 2030 recyclability \
                            grades."
                        .to_string(),
                    bullets: vec![
                        "Risk Prioritization".to_string(),
                        "Timeline Strategy".to_string(),
                    ],
                    accent: CardAccent::Plain,
                },
                ServiceCard {
                    title: "Circular Redesign".to_string(),
                    blurb: "Structural and graphic redesign to migrate risky SKUs to compliant \
                            mono-materials."
                        .to_string(),
                    bullets: vec![
                        "Mono-material transition".to_string(),
                        "Weight Minimization".to_string(),
                    ],
                    accent: CardAccent::Royal,
                },
                ServiceCard {
                    title: "System Architecture".to_string(),
                    blurb: "Simplifying packaging lines to reduce complexity and supply chain \
                            vulnerability."
                        .to_string(),
                    bullets: vec![
                        "Complexity Reduction".to_string(),
                        "Supplier Briefs".to_string(),
                    ],
                    accent: CardAccent::Acid,
                },
            ],
            closing: ClosingCard::default(),
        }
    }
}

impl Default for ClosingCard {
    fn default() -> Self {
        Self {
            title: "Custom Scope?".to_string(),
            blurb: "Let's tailor an approach.".to_string(),
        }
    }
}

impl Default for ApproachCopy {
    fn default() -> Self {
        Self {
            anchor: "approach".to_string(),
            badge: "The Philosophy".to_string(),
            heading: "Constraint breeds Creativity.".to_string(),
            lede: "Regulation doesn't have to mean boring. It's an invitation to strip away the \
                   excess and design clearer, stronger, and more honest brands."
                .to_string(),
        }
    }
}

impl Default for FooterCopy {
    fn default() -> Self {
        Self {
            anchor: "contact".to_string(),
            heading: "Let's Talk".to_string(),
            heading_accent: "Future.".to_string(),
            primary_cta: "Portfolio Audit".to_string(),
            secondary_cta: "Download Checklist".to_string(),
            tagline: "Helping brands across Europe meet PPWR standards through design \
                      intelligence."
                .to_string(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load the copy deck from `copy.toml`, merged sparsely over the stock deck.
///
/// A missing file yields the stock deck; an invalid file is an error.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    if !path.exists() {
        return Ok(Deck::default());
    }
    let content = fs::read_to_string(path)?;
    let deck: Deck = toml::from_str(&content)?;
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stock_deck_has_three_nav_links() {
        let deck = Deck::default();
        assert_eq!(deck.nav.len(), 3);
        assert_eq!(deck.nav[0].anchor, "context");
    }

    #[test]
    fn stock_deck_has_three_service_cards() {
        let deck = Deck::default();
        assert_eq!(deck.services.cards.len(), 3);
        assert_eq!(deck.services.cards[1].accent, CardAccent::Royal);
    }

    #[test]
    fn stock_deck_marquee_label_is_nonempty() {
        assert!(!Deck::default().marquee_label.is_empty());
    }

    #[test]
    fn load_deck_missing_file_yields_stock() {
        let tmp = TempDir::new().unwrap();
        let deck = load_deck(&tmp.path().join("copy.toml")).unwrap();
        assert_eq!(deck.site.title, "humelt");
    }

    #[test]
    fn load_deck_sparse_override() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("copy.toml");
        fs::write(
            &path,
            r#"
marquee_label = "One • Two •"

[site]
title = "acme"
"#,
        )
        .unwrap();
        let deck = load_deck(&path).unwrap();
        assert_eq!(deck.site.title, "acme");
        assert_eq!(deck.marquee_label, "One • Two •");
        // Untouched sections keep stock copy
        assert_eq!(deck.hero.badge, "EU PPWR Readiness");
    }

    #[test]
    fn load_deck_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("copy.toml");
        fs::write(&path, "not toml [[[").unwrap();
        assert!(matches!(load_deck(&path), Err(DeckError::Toml(_))));
    }

    #[test]
    fn load_deck_unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("copy.toml");
        fs::write(&path, "[hero]\nbadg = \"typo\"\n").unwrap();
        assert!(load_deck(&path).is_err());
    }

    #[test]
    fn card_accent_classes() {
        assert_eq!(CardAccent::Plain.class(), "card-plain");
        assert_eq!(CardAccent::Royal.class(), "card-royal");
        assert_eq!(CardAccent::Acid.class(), "card-acid");
    }

    #[test]
    fn accent_parses_lowercase() {
        let card: ServiceCard = toml::from_str(
            r#"
title = "T"
accent = "acid"
"#,
        )
        .unwrap();
        assert_eq!(card.accent, CardAccent::Acid);
    }
}
