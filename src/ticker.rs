//! Infinite horizontal ticker band.
//!
//! The band is a static layout trick, not a runtime state machine. Two
//! identical lanes of repeated label tokens sit side by side and share one
//! constant-velocity `0% → -100%` translation keyframe: the moment lane A's
//! translation completes, lane B occupies exactly the position lane A started
//! in, so the loop has no seam. Seamlessness is enforced by construction —
//! lane B is a clone of lane A — rather than by any runtime synchronization.
//!
//! The outer edges are masked with gradients matching the page background so
//! tokens dissolve instead of clipping.

use maud::{Markup, html};

/// Lanes shorter than this could leave a gap at wide viewports, so
/// [`TickerBand::new`] clamps the copy count up to it.
pub const MIN_COPIES: usize = 4;

/// One label occurrence in a ticker lane. Immutable after construction; the
/// marker glyph separating tokens is supplied by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerToken {
    pub label: String,
}

/// The two tandem lanes of the ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerBand {
    lane_a: Vec<TickerToken>,
    lane_b: Vec<TickerToken>,
}

impl TickerBand {
    /// Build a band of `copies` repetitions of `label` (clamped to at least
    /// [`MIN_COPIES`]). Lane B is byte-identical to lane A.
    pub fn new(label: &str, copies: usize) -> Self {
        let lane_a: Vec<TickerToken> = (0..copies.max(MIN_COPIES))
            .map(|_| TickerToken {
                label: label.to_string(),
            })
            .collect();
        let lane_b = lane_a.clone();
        Self { lane_a, lane_b }
    }

    pub fn lane_a(&self) -> &[TickerToken] {
        &self.lane_a
    }

    pub fn lane_b(&self) -> &[TickerToken] {
        &self.lane_b
    }
}

fn lane(tokens: &[TickerToken]) -> Markup {
    html! {
        div.ticker-lane {
            @for token in tokens {
                span.ticker-token {
                    (token.label)
                    span.ticker-marker {}
                }
            }
        }
    }
}

/// Render the band: two animated lanes plus the edge-fade overlays. The
/// translation period and fade width come from CSS custom properties emitted
/// by the config layer, so re-rendering the same band is idempotent markup.
pub fn render_ticker(band: &TickerBand) -> Markup {
    html! {
        div.ticker aria-hidden="true" {
            (lane(band.lane_a()))
            (lane(band.lane_b()))
            div.ticker-fade.ticker-fade-left {}
            div.ticker-fade.ticker-fade-right {}
        }
    }
}
