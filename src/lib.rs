//! # onepager
//!
//! A minimal single-page site generator with scroll-reveal motion. One config
//! file, one copy deck, one self-contained `index.html` out — inline CSS and
//! ~30 lines of vanilla JavaScript, nothing else to deploy.
//!
//! # Architecture
//!
//! The page itself is mostly static markup. The engineering lives in three
//! small motion cores, each a pure or near-pure component that the renderer
//! composes:
//!
//! ```text
//! config.toml ──┐
//!               ├── page::build ──→ dist/index.html
//! copy.toml  ───┘        │
//!                        ├── reveal   (visibility gates + presentation projection)
//!                        ├── ticker   (dual-lane seamless marquee)
//!                        └── emblem   (radial glyph layout → SVG)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`reveal`] | One-shot viewport-triggered reveal gates over a host trait, plus the pure state → presentation projection |
//! | [`ticker`] | Seamless infinite marquee: two byte-identical token lanes sharing one translation loop |
//! | [`emblem`] | Radial point layout and the star-glyph SVG emblem |
//! | [`page`] | Maud renderers for every section; composes the three cores into the final document |
//! | [`content`] | Typed copy deck with stock defaults and sparse TOML overrides |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS variable generation |
//! | [`output`] | CLI output formatting for build and check |
//!
//! # Design Decisions
//!
//! ## Reveal Semantics Live in Rust
//!
//! The reveal gate — observe once, flip once, release immediately, fail open
//! when the platform has no visibility primitive — is modeled as a real state
//! machine in [`reveal`], with the observation binding held as an owned
//! resource released on both the trigger path and teardown. The embedded JS
//! shim is a line-for-line mirror of that contract, and the static rendering
//! mode drives the actual Rust gates through their fail-open path.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system: malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Single Output File
//!
//! Palette and motion CSS variables are generated from config and inlined
//! ahead of the static stylesheet; the reveal shim is embedded at the end of
//! `<body>`. The generated page can be dropped on any file server — no
//! assets directory, no runtime dependencies. If a browser can render HTML,
//! it can show the page; if it can't run the shim, every region fails open
//! and the content is simply visible.

pub mod config;
pub mod content;
pub mod emblem;
pub mod output;
pub mod page;
pub mod reveal;
pub mod ticker;
