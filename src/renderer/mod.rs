//! Browser rendering
//!
//! Sprites are SVG `<image>` elements keyed by body id inside `#svgCanvas`.

pub mod svg;

pub use svg::SvgRenderer;
