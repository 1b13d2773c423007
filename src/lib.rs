//! crochet-renderer: parametric vector renderer for stacked-coil crochet figures
//!
//! A figure is a stack of yarn-textured coils topped by a curling swirl,
//! with a face and optional arms and legs. Every visual choice lives in a
//! [`Configuration`]; [`compose`] turns one into a self-contained SVG
//! [`Document`].
//!
//! # Example
//!
//! ```
//! use crochet_renderer::{compose, Configuration, EyeColor, FragmentKind, MouthStyle};
//!
//! let config = Configuration::new()
//!     .with_layers(4)
//!     .with_eyes(3)
//!     .with_eye_color(EyeColor::Green)
//!     .with_mouth(MouthStyle::Tongue)
//!     .with_legs(true);
//!
//! let document = compose(&config);
//! assert_eq!(document.count(FragmentKind::CoilLayer), 4);
//! assert_eq!(document.count(FragmentKind::Eye), 3);
//!
//! let svg = document.to_svg();
//! assert!(svg.contains("url(#yarn_pattern)"));
//! ```
//!
//! # Raster Export
//!
//! [`render_png`] draws a document with resvg and encodes it as PNG:
//!
//! ```
//! use crochet_renderer::{compose, render_png, Configuration, RasterOptions};
//!
//! let document = compose(&Configuration::default());
//! let png = render_png(&document, &RasterOptions::default()).unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```

mod color;
mod composer;
mod config;
mod error;
mod feature;
mod geometry;
mod raster;
mod svg;
mod texture;

#[cfg(feature = "wasm")]
mod wasm;

pub use color::{BodyColor, Color, EyeColor, Palette, resolve_body_palette, resolve_eye_color};
pub use composer::{DRAW_ORDER, RenderContext, RenderStep, VIEWPORT_WIDTH, compose};
pub use config::{Configuration, ExportFormat, MouthStyle};
pub use error::{Error, Result};
pub use feature::{
    MAX_EYES, MIN_EYES, Side, clamp_eyes, render_arms, render_blush, render_coil_layer,
    render_eye, render_eyes, render_legs, render_mouth, render_swirl_cap,
};
pub use geometry::{
    Anchors, BaseAnchor, Coil, FaceAnchor, LayerGeometry, LimbAnchor, MAX_LAYERS, MIN_LAYERS,
    SwirlAnchor, clamp_layers, compute_layers,
};
pub use raster::{RasterOptions, encode_png, rasterize, render_png};
pub use svg::{Document, Element, Fragment, FragmentKind, Num, PathData, Viewport};
pub use texture::{GRADIENT_ID, PATTERN_ID, Texture, build_texture};

#[cfg(feature = "wasm")]
pub use wasm::FigureRenderer;
