//! Landing page rendering.
//!
//! Takes the site config and copy deck and renders the whole page to a single
//! self-contained `index.html`: inline CSS (palette and motion variables
//! injected from config ahead of the static stylesheet) and, in scripted
//! mode, the embedded reveal shim.
//!
//! ## Reveal modes
//!
//! Every animated region goes through a [`RevealPlan`], which assigns it a
//! region id and a stagger delay and projects its initial presentation:
//!
//! - [`RevealMode::Scripted`] — regions start hidden and the emitted JS shim
//!   flips them as they cross the viewport threshold, mirroring
//!   [`VisibilityGate`](crate::reveal::VisibilityGate) semantics at runtime.
//! - [`RevealMode::Static`] — regions are gated through real
//!   [`VisibilityGate`]s constructed against [`AbsentHost`]: no primitive, so
//!   every gate fails open and the page renders fully shown with no script.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, SiteConfig};
use crate::content::{Deck, ServiceCard};
use crate::emblem::render_emblem;
use crate::reveal::{AbsentHost, Presentation, RegionId, RevealState, VisibilityGate, project};
use crate::ticker::{TickerBand, render_ticker};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const REVEAL_JS: &str = include_str!("../static/reveal.js");

/// How reveal regions are driven in the generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Regions start hidden; the embedded shim reveals them on scroll.
    Scripted,
    /// No script; every region is rendered through the fail-open gate path.
    Static,
}

/// Assigns region ids and projects each region's initial presentation for the
/// chosen mode.
pub struct RevealPlan {
    mode: RevealMode,
    threshold: f32,
    next_region: u32,
}

impl RevealPlan {
    pub fn new(mode: RevealMode, threshold: f32) -> Self {
        Self {
            mode,
            threshold,
            next_region: 0,
        }
    }

    /// Claim the next region and derive its initial presentation.
    pub fn region(&mut self, delay_ms: u32) -> Presentation {
        let region = RegionId(self.next_region);
        self.next_region += 1;
        match self.mode {
            RevealMode::Scripted => project(RevealState::hidden(delay_ms)),
            RevealMode::Static => {
                // Real gate, absent primitive: fails open by construction.
                let gate: VisibilityGate<_> =
                    VisibilityGate::new(&AbsentHost, region, delay_ms, self.threshold);
                project(gate.state())
            }
        }
    }

    /// Number of regions claimed so far.
    pub fn regions(&self) -> u32 {
        self.next_region
    }
}

/// Wrap a section fragment in a reveal region.
fn reveal_region(presentation: Presentation, inner: Markup) -> Markup {
    html! {
        div class=(presentation.class()) style=[presentation.style()] {
            (inner)
        }
    }
}

/// Summary of one build, consumed by the CLI output layer.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub mode: RevealMode,
    pub reveal_regions: u32,
    pub ticker_tokens_per_lane: usize,
    pub emblem_glyphs: u32,
    pub bytes_written: usize,
}

/// Render the page into a string plus its report.
fn assemble(config: &SiteConfig, deck: &Deck, mode: RevealMode) -> (String, BuildReport) {
    let mut plan = RevealPlan::new(mode, config.motion.reveal_threshold);
    let band = TickerBand::new(&deck.marquee_label, crate::ticker::MIN_COPIES);
    let html = render_page(config, deck, mode, &mut plan, &band).into_string();
    let report = BuildReport {
        mode,
        reveal_regions: plan.regions(),
        ticker_tokens_per_lane: band.lane_a().len(),
        emblem_glyphs: config.emblem.glyph_count,
        bytes_written: html.len(),
    };
    (html, report)
}

/// Render the page and write `index.html` into `output_dir`.
pub fn build(
    config: &SiteConfig,
    deck: &Deck,
    mode: RevealMode,
    output_dir: &Path,
) -> Result<BuildReport, BuildError> {
    let (html, report) = assemble(config, deck, mode);
    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("index.html"), &html)?;
    Ok(report)
}

/// Render without writing anything. Used by the `check` command to validate
/// the full config + deck + render path.
pub fn dry_run(config: &SiteConfig, deck: &Deck, mode: RevealMode) -> BuildReport {
    assemble(config, deck, mode).1
}

/// Render the full document. Exposed for tests; [`build`] is the I/O wrapper.
pub fn render_page(
    config: &SiteConfig,
    deck: &Deck,
    mode: RevealMode,
    plan: &mut RevealPlan,
    band: &TickerBand,
) -> Markup {
    let color_css = config::generate_color_css(&config.colors);
    let motion_css = config::generate_motion_css(&config.motion);
    let css = format!("{color_css}\n\n{motion_css}\n\n{CSS_STATIC}");

    let step = config.motion.stagger_step_ms;

    let content = html! {
        div.noise-overlay {}
        (site_nav(config, deck))
        (hero(deck, plan, step))
        (render_ticker(band))
        (context_section(deck, plan, step))
        (services_section(deck, plan, step))
        (approach_section(deck, plan))
        (site_footer(deck, plan))
    };

    base_document(&deck.site.title, &deck.site.lang, &css, content, mode, config)
}

/// Base HTML document structure.
fn base_document(
    title: &str,
    lang: &str,
    css: &str,
    content: Markup,
    mode: RevealMode,
    config: &SiteConfig,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css.to_string())) }
            }
            body {
                main {
                    (content)
                }
                @if mode == RevealMode::Scripted {
                    script data-reveal-threshold=(config.motion.reveal_threshold) {
                        (PreEscaped(REVEAL_JS))
                    }
                }
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

fn site_nav(config: &SiteConfig, deck: &Deck) -> Markup {
    html! {
        nav.site-nav {
            a.wordmark href="#" { (deck.site.title) }
            div.nav-links {
                @for link in &deck.nav {
                    a href={ "#" (link.anchor) } { (link.label) }
                }
            }
            (render_emblem(&config.emblem))
        }
    }
}

fn hero(deck: &Deck, plan: &mut RevealPlan, step: u32) -> Markup {
    let cue_href = format!("#{}", deck.hero.cue_anchor);
    html! {
        header.hero {
            (reveal_region(plan.region(0), html! {
                div.hero-badge {
                    span.badge-dot {}
                    span { (deck.hero.badge) }
                }
            }))
            (reveal_region(plan.region(step), html! {
                h1.hero-heading {
                    (deck.hero.heading)
                    br;
                    span.accent-gradient { (deck.hero.heading_accent) }
                }
            }))
            (reveal_region(plan.region(2 * step), html! {
                p.hero-lede { (deck.hero.lede) }
            }))
            (reveal_region(plan.region(3 * step), html! {
                a.scroll-cue href=(cue_href) aria-label="Scroll to next section" {
                    span.scroll-cue-arrow { "↓" }
                }
            }))
        }
    }
}

fn context_section(deck: &Deck, plan: &mut RevealPlan, step: u32) -> Markup {
    let ctx = &deck.context;
    html! {
        section.context id=(ctx.anchor) {
            div.context-grid {
                (reveal_region(plan.region(0), html! {
                    div.context-copy {
                        h2 {
                            (ctx.heading)
                            br;
                            span.accent-royal { (ctx.heading_accent) }
                        }
                        @for para in &ctx.paragraphs {
                            p { (para) }
                        }
                        div.stats {
                            @for stat in &ctx.stats {
                                div.stat {
                                    div.stat-value { (stat.value) }
                                    div.stat-label { (stat.label) }
                                }
                            }
                        }
                    }
                }))
                (reveal_region(plan.region(2 * step), html! {
                    figure.context-panel {
                        figcaption.panel-caption { (ctx.panel_caption) }
                    }
                }))
            }
        }
    }
}

fn service_card(card: &ServiceCard) -> Markup {
    html! {
        div class={ "service-card " (card.accent.class()) } {
            div.card-visual {}
            h3 { (card.title) }
            p { (card.blurb) }
            ul.card-bullets {
                @for bullet in &card.bullets {
                    li {
                        span.bullet-dot {}
                        (bullet)
                    }
                }
            }
        }
    }
}

fn services_section(deck: &Deck, plan: &mut RevealPlan, step: u32) -> Markup {
    let services = &deck.services;
    html! {
        section.services id=(services.anchor) {
            div.services-header {
                (reveal_region(plan.region(0), html! {
                    h2 { (services.heading) }
                }))
                (reveal_region(plan.region(step), html! {
                    p.services-hint { (services.hint) }
                }))
            }
            div.carousel {
                @for card in &services.cards {
                    (service_card(card))
                }
                div.service-card.card-closing {
                    h3 { (services.closing.title) }
                    p { (services.closing.blurb) }
                    a.closing-cta href={ "#" (deck.footer.anchor) } { "→" }
                }
            }
        }
    }
}

fn approach_section(deck: &Deck, plan: &mut RevealPlan) -> Markup {
    let approach = &deck.approach;
    html! {
        section.approach id=(approach.anchor) {
            div.mesh-background {
                div.blob.blob-lilac {}
                div.blob.blob-brown-a {}
                div.blob.blob-rust {}
                div.blob.blob-brown-b {}
                div.grain {}
                div.vignette {}
            }
            (reveal_region(plan.region(0), html! {
                div.approach-copy {
                    div.approach-badge { span { (approach.badge) } }
                    h2 { (approach.heading) }
                    p { (approach.lede) }
                }
            }))
        }
    }
}

fn site_footer(deck: &Deck, plan: &mut RevealPlan) -> Markup {
    let footer = &deck.footer;
    html! {
        footer.site-footer id=(footer.anchor) {
            (reveal_region(plan.region(0), html! {
                h2.footer-heading {
                    (footer.heading) " "
                    span.accent-gradient { (footer.heading_accent) }
                }
                div.footer-ctas {
                    a.cta.cta-primary href="#" { (footer.primary_cta) }
                    a.cta.cta-secondary href="#" { (footer.secondary_cta) }
                }
            }))
            p.footer-tagline { (footer.tagline) }
            div.footer-legal {
                span { "© " (deck.site.studio) }
                span { (deck.site.locations) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(mode: RevealMode) -> String {
        let config = SiteConfig::default();
        let deck = Deck::default();
        let mut plan = RevealPlan::new(mode, config.motion.reveal_threshold);
        let band = TickerBand::new(&deck.marquee_label, 4);
        render_page(&config, &deck, mode, &mut plan, &band).into_string()
    }

    #[test]
    fn scripted_page_starts_hidden() {
        let html = render(RevealMode::Scripted);
        assert!(html.contains(r#"class="reveal""#));
        // The selector lives in the stylesheet, but no region starts shown.
        assert!(!html.contains(r#"class="reveal is-shown""#));
    }

    #[test]
    fn scripted_page_embeds_shim_with_threshold() {
        let html = render(RevealMode::Scripted);
        assert!(html.contains("data-reveal-threshold=\"0.1\""));
        assert!(html.contains("IntersectionObserver"));
    }

    #[test]
    fn static_page_is_fully_shown_without_script() {
        let html = render(RevealMode::Static);
        assert!(html.contains(r#"class="reveal is-shown""#));
        assert!(!html.contains(r#"class="reveal""#));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn stagger_delays_are_emitted_verbatim() {
        let html = render(RevealMode::Scripted);
        assert!(html.contains("transition-delay: 100ms"));
        assert!(html.contains("transition-delay: 200ms"));
        assert!(html.contains("transition-delay: 300ms"));
    }

    #[test]
    fn zero_delay_regions_have_no_style_attribute() {
        let p = RevealPlan::new(RevealMode::Scripted, 0.1).region(0);
        assert_eq!(p.style(), None);
    }

    #[test]
    fn plan_counts_regions() {
        let mut plan = RevealPlan::new(RevealMode::Scripted, 0.1);
        plan.region(0);
        plan.region(100);
        assert_eq!(plan.regions(), 2);
    }

    #[test]
    fn page_contains_all_section_anchors() {
        let html = render(RevealMode::Scripted);
        for anchor in ["context", "services", "approach", "contact"] {
            assert!(
                html.contains(&format!(r#"id="{anchor}""#)),
                "missing anchor {anchor}"
            );
        }
    }

    #[test]
    fn nav_links_point_at_anchors() {
        let html = render(RevealMode::Scripted);
        assert!(html.contains(r##"href="#context""##));
        assert!(html.contains(r##"href="#services""##));
        assert!(html.contains(r##"href="#approach""##));
    }

    #[test]
    fn page_embeds_palette_and_motion_variables() {
        let html = render(RevealMode::Scripted);
        assert!(html.contains("--color-cream: #f5f1e8"));
        assert!(html.contains("--reveal-duration: 1000ms"));
        assert!(html.contains("--marquee-period: 20s"));
    }

    #[test]
    fn page_has_two_identical_ticker_lanes() {
        let html = render(RevealMode::Scripted);
        assert_eq!(html.matches(r#"<div class="ticker-lane">"#).count(), 2);
        // Both lanes carry the same tokens: label occurrences split evenly.
        let label_count = html.matches("Design for Recycling").count();
        assert_eq!(label_count % 2, 0);
    }

    #[test]
    fn page_renders_emblem_glyphs() {
        let html = render(RevealMode::Scripted);
        assert_eq!(html.matches("<polygon").count(), 12);
    }

    #[test]
    fn service_cards_carry_accent_classes() {
        let html = render(RevealMode::Scripted);
        assert!(html.contains("card-plain"));
        assert!(html.contains("card-royal"));
        assert!(html.contains("card-acid"));
        assert!(html.contains("card-closing"));
    }

    #[test]
    fn build_writes_index_html_and_reports() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let deck = Deck::default();
        let report = build(&config, &deck, RevealMode::Scripted, tmp.path()).unwrap();

        let written = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert_eq!(report.bytes_written, written.len());
        assert_eq!(report.emblem_glyphs, 12);
        assert_eq!(report.ticker_tokens_per_lane, 4);
        assert!(report.reveal_regions >= 9);
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn build_creates_missing_output_dir() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested").join("dist");
        let report = build(
            &SiteConfig::default(),
            &Deck::default(),
            RevealMode::Static,
            &out,
        )
        .unwrap();
        assert!(out.join("index.html").exists());
        assert_eq!(report.mode, RevealMode::Static);
    }

    #[test]
    fn copy_is_escaped() {
        let mut deck = Deck::default();
        deck.hero.badge = "<b>bold</b>".to_string();
        let config = SiteConfig::default();
        let mut plan = RevealPlan::new(RevealMode::Scripted, 0.1);
        let band = TickerBand::new("x", 4);
        let html = render_page(&config, &deck, RevealMode::Scripted, &mut plan, &band).into_string();
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
