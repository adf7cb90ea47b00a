//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional user config file; unknown keys are rejected to
//! catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [colors]
//! cream = "#f5f1e8"          # Page background
//! charcoal = "#2b2b28"       # Primary text / footer background
//! stone = "#e7e2d6"          # Secondary surface (ticker band, cards)
//! royal = "#3d2b8c"          # Primary accent
//! acid = "#c6f432"           # Highlight accent (badges, markers)
//! rust = "#ae640d"           # Warm accent
//! lilac = "#a888e5"          # Gradient blob tint
//! brown = "#4a3427"          # Gradient blob tint
//!
//! [motion]
//! reveal_duration_ms = 1000  # Hidden → shown transition duration
//! reveal_easing = "ease-out" # Decelerating curve for the transition
//! reveal_offset = "3rem"     # Vertical offset of the hidden state
//! reveal_threshold = 0.1     # Intersection ratio that triggers a reveal
//! stagger_step_ms = 100      # Delay step between sibling reveals
//! marquee_period_s = 20      # One full ticker loop
//! edge_fade = "8rem"         # Width of the ticker's gradient masks
//!
//! [emblem]
//! glyph_count = 12
//! ring_radius = 33.0         # In emblem viewBox units (0-100)
//! glyph_scale = 4.5
//! glyph_color = "#ffcc00"
//! field_color = "#003399"
//! label = "Compliance ready"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand palette tokens, emitted as CSS custom properties.
    pub colors: ColorConfig,
    /// Reveal and ticker motion settings.
    pub motion: MotionConfig,
    /// Radial emblem geometry and colors.
    pub emblem: EmblemConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.motion.reveal_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ConfigError::Validation(
                "motion.reveal_threshold must be in (0, 1]".into(),
            ));
        }
        if self.motion.reveal_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "motion.reveal_duration_ms must be non-zero".into(),
            ));
        }
        if self.motion.marquee_period_s == 0 {
            return Err(ConfigError::Validation(
                "motion.marquee_period_s must be non-zero".into(),
            ));
        }
        if !(self.emblem.ring_radius > 0.0 && self.emblem.ring_radius < 50.0) {
            return Err(ConfigError::Validation(
                "emblem.ring_radius must be in (0, 50) viewBox units".into(),
            ));
        }
        Ok(())
    }
}

/// Brand palette. Token names follow the design system, not CSS roles: the
/// same token is reused across sections (charcoal is body text and the footer
/// surface).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub cream: String,
    pub charcoal: String,
    pub stone: String,
    pub royal: String,
    pub acid: String,
    pub rust: String,
    pub lilac: String,
    pub brown: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            cream: "#f5f1e8".to_string(),
            charcoal: "#2b2b28".to_string(),
            stone: "#e7e2d6".to_string(),
            royal: "#3d2b8c".to_string(),
            acid: "#c6f432".to_string(),
            rust: "#ae640d".to_string(),
            lilac: "#a888e5".to_string(),
            brown: "#4a3427".to_string(),
        }
    }
}

/// Reveal and ticker motion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Duration of the hidden → shown transition.
    pub reveal_duration_ms: u32,
    /// CSS easing for the transition; decelerates toward the end.
    pub reveal_easing: String,
    /// Vertical offset of the hidden state (CSS length).
    pub reveal_offset: String,
    /// Intersection ratio at which a region counts as visible.
    pub reveal_threshold: f32,
    /// Delay step between staggered sibling reveals.
    pub stagger_step_ms: u32,
    /// Seconds for one full marquee loop (0% → -100% translation).
    pub marquee_period_s: u32,
    /// Width of the gradient masks on the ticker's edges (CSS length).
    pub edge_fade: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_duration_ms: 1000,
            reveal_easing: "ease-out".to_string(),
            reveal_offset: "3rem".to_string(),
            reveal_threshold: crate::reveal::DEFAULT_THRESHOLD,
            stagger_step_ms: 100,
            marquee_period_s: 20,
            edge_fade: "8rem".to_string(),
        }
    }
}

/// Radial emblem geometry and colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmblemConfig {
    /// Number of glyphs on the ring.
    pub glyph_count: u32,
    /// Ring radius in viewBox units (viewBox is 100×100).
    pub ring_radius: f64,
    /// Uniform scale applied to each unit glyph.
    pub glyph_scale: f64,
    pub glyph_color: String,
    pub field_color: String,
    /// Accessible label for the emblem tile.
    pub label: String,
}

impl Default for EmblemConfig {
    fn default() -> Self {
        Self {
            glyph_count: 12,
            ring_radius: 33.0,
            glyph_scale: 4.5,
            glyph_color: "#ffcc00".to_string(),
            field_color: "#003399".to_string(),
            label: "Compliance ready".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given path.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# onepager Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Brand palette
# ---------------------------------------------------------------------------
# Token names follow the design system; each is emitted as --color-<token>.
[colors]
cream = "#f5f1e8"      # Page background
charcoal = "#2b2b28"   # Primary text, footer background
stone = "#e7e2d6"      # Secondary surface (ticker band, cards)
royal = "#3d2b8c"      # Primary accent
acid = "#c6f432"       # Highlight accent (badges, markers)
rust = "#ae640d"       # Warm accent
lilac = "#a888e5"      # Gradient blob tint
brown = "#4a3427"      # Gradient blob tint

# ---------------------------------------------------------------------------
# Motion
# ---------------------------------------------------------------------------
[motion]
# Duration of the hidden -> shown reveal transition, in milliseconds.
reveal_duration_ms = 1000

# CSS easing for the reveal; should decelerate toward the end.
reveal_easing = "ease-out"

# Vertical offset of the hidden state (any CSS length).
reveal_offset = "3rem"

# Intersection ratio (0-1] at which a region counts as visible.
reveal_threshold = 0.1

# Delay step between staggered sibling reveals, in milliseconds.
stagger_step_ms = 100

# Seconds for one full ticker loop.
marquee_period_s = 20

# Width of the gradient masks on the ticker's edges (any CSS length).
edge_fade = "8rem"

# ---------------------------------------------------------------------------
# Emblem
# ---------------------------------------------------------------------------
[emblem]
# Number of glyphs evenly spaced on the ring.
glyph_count = 12

# Ring radius in viewBox units; the viewBox is 100x100.
ring_radius = 33.0

# Uniform scale applied to each unit glyph shape.
glyph_scale = 4.5

glyph_color = "#ffcc00"
field_color = "#003399"

# Accessible label for the emblem tile.
label = "Compliance ready"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-cream: {cream};
    --color-charcoal: {charcoal};
    --color-stone: {stone};
    --color-royal: {royal};
    --color-acid: {acid};
    --color-rust: {rust};
    --color-lilac: {lilac};
    --color-brown: {brown};
}}"#,
        cream = colors.cream,
        charcoal = colors.charcoal,
        stone = colors.stone,
        royal = colors.royal,
        acid = colors.acid,
        rust = colors.rust,
        lilac = colors.lilac,
        brown = colors.brown,
    )
}

/// Generate CSS custom properties from motion config.
pub fn generate_motion_css(motion: &MotionConfig) -> String {
    format!(
        r#":root {{
    --reveal-duration: {duration}ms;
    --reveal-easing: {easing};
    --reveal-offset: {offset};
    --marquee-period: {period}s;
    --edge-fade: {fade};
}}"#,
        duration = motion.reveal_duration_ms,
        easing = motion.reveal_easing,
        offset = motion.reveal_offset,
        period = motion.marquee_period_s,
        fade = motion.edge_fade,
    )
}
