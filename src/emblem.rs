//! Radial emblem layout and rendering.
//!
//! The emblem is a ring of star glyphs placed on a circle — the nav badge in
//! the generated page. Placement is a pure function: given a glyph count and a
//! ring radius, [`radial_layout`] returns evenly spaced points starting at
//! 12 o'clock and proceeding clockwise. Rendering maps each point to an SVG
//! `<polygon>` with a fixed star shape, translated and scaled into place.
//!
//! Both halves are deterministic: same inputs, same output, no state.

use crate::config::EmblemConfig;
use maud::{Markup, html};

/// Unit star polygon, wound clockwise from the top vertex. Scaled per glyph
/// at render time.
const STAR_POINTS: &str = "0,-1 0.2245,-0.309 0.951,-0.309 0.363,0.118 0.588,0.809 0,0.382 -0.588,0.809 -0.363,0.118 -0.951,-0.309 -0.2245,-0.309";

/// Side length of the square emblem viewBox. Points are laid out around its
/// center, so `radius` in [`radial_layout`] is in these units.
pub const VIEWBOX: f64 = 100.0;

/// One glyph position on the emblem ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialPoint {
    /// Angle in radians, measured from the positive x-axis. Point 0 sits at
    /// -90° (12 o'clock); successive points advance clockwise.
    pub angle: f64,
    /// Cartesian position inside the viewBox.
    pub x: f64,
    pub y: f64,
    /// Uniform scale applied to the unit glyph shape.
    pub scale: f64,
}

/// Compute `count` evenly spaced points on a circle of `radius` around
/// `(cx, cy)`.
///
/// Spacing is exactly `360/count` degrees. Point 0 is anchored at 12 o'clock
/// (-90°) and points proceed clockwise, matching screen-space y-down SVG
/// coordinates. A count of zero yields an empty vec.
pub fn radial_layout(count: u32, radius: f64, cx: f64, cy: f64, scale: f64) -> Vec<RadialPoint> {
    (0..count)
        .map(|i| {
            let angle = (f64::from(i) * 360.0 / f64::from(count) - 90.0).to_radians();
            RadialPoint {
                angle,
                x: cx + radius * angle.cos(),
                y: cy + radius * angle.sin(),
                scale,
            }
        })
        .collect()
}

/// Render one star glyph at a layout point.
fn glyph(point: &RadialPoint, fill: &str) -> Markup {
    let transform = format!(
        "translate({x}, {y}) scale({s})",
        x = point.x,
        y = point.y,
        s = point.scale
    );
    html! {
        polygon points=(STAR_POINTS) transform=(transform) fill=(fill) {}
    }
}

/// Render the full emblem: a colored square tile holding the glyph ring.
pub fn render_emblem(config: &EmblemConfig) -> Markup {
    let center = VIEWBOX / 2.0;
    let points = radial_layout(
        config.glyph_count,
        config.ring_radius,
        center,
        center,
        config.glyph_scale,
    );
    let viewbox = format!("0 0 {VIEWBOX} {VIEWBOX}");
    let field = format!("background: {}", config.field_color);

    html! {
        div.emblem aria-label=(config.label) style=(field) {
            svg viewBox=(viewbox) {
                @for point in &points {
                    (glyph(point, &config.glyph_color))
                }
            }
        }
    }
}
