//! The yarn texture shared by every body-colored shape.

use crate::color::{Color, Palette};
use crate::svg::{Element, PathData};

/// ID of the tiled yarn pattern.
pub const PATTERN_ID: &str = "yarn_pattern";

/// ID of the horizontal sheen gradient.
pub const GRADIENT_ID: &str = "yarn_pattern_gradient";

/// Edge length of one pattern tile.
const TILE: f64 = 10.0;

/// Fill reference to the yarn pattern.
pub fn pattern_fill() -> String {
    format!("url(#{})", PATTERN_ID)
}

/// Fill reference to the sheen gradient.
pub fn gradient_fill() -> String {
    format!("url(#{})", GRADIENT_ID)
}

/// Texture resources for one palette, referenced by ID from fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub pattern_id: &'static str,
    pub pattern: Element,
    pub gradient_id: &'static str,
    pub gradient: Element,
}

impl Texture {
    /// The definitions to embed in a document's `<defs>`.
    pub fn into_defs(self) -> Vec<Element> {
        vec![self.pattern, self.gradient]
    }
}

/// Builds the yarn pattern and sheen gradient for a palette.
///
/// The tile is a `main`-colored square crossed by three wavy strands
/// (`light`, `dark`, `highlight`) and dotted with faint `highlight` stitches.
/// The gradient runs left to right from a translucent `shadow` through clear
/// `main` to a translucent `highlight`.
pub fn build_texture(palette: &Palette) -> Texture {
    let strand = |y: f64, color: Color, width: f64, opacity: f64| {
        Element::path(
            PathData::new()
                .move_to(0.0, y)
                .quad_to(TILE / 2.0, y - 2.0, TILE, y),
        )
        .attr("stroke", color)
        .num("stroke-width", width)
        .attr("fill", "none")
        .num("opacity", opacity)
    };
    let stitch = |cx: f64, cy: f64| {
        Element::circle(cx, cy, 0.8)
            .attr("fill", palette.highlight)
            .num("opacity", 0.3)
    };

    let pattern = Element::new("pattern")
        .attr("id", PATTERN_ID)
        .attr("patternUnits", "userSpaceOnUse")
        .num("width", TILE)
        .num("height", TILE)
        .child(
            Element::new("rect")
                .num("width", TILE)
                .num("height", TILE)
                .attr("fill", palette.main),
        )
        .child(strand(3.0, palette.light, 1.2, 0.7))
        .child(strand(6.0, palette.dark, 1.2, 0.6))
        .child(strand(9.0, palette.highlight, 0.8, 0.5))
        .child(stitch(2.0, 5.0))
        .child(stitch(7.0, 2.0))
        .child(stitch(7.0, 8.0));

    let stop = |offset: &'static str, color: Color, opacity: f64| {
        Element::new("stop")
            .attr("offset", offset)
            .attr("stop-color", color)
            .num("stop-opacity", opacity)
    };

    let gradient = Element::new("linearGradient")
        .attr("id", GRADIENT_ID)
        .attr("x1", "0%")
        .attr("y1", "0%")
        .attr("x2", "100%")
        .attr("y2", "0%")
        .child(stop("0%", palette.shadow, 0.4))
        .child(stop("30%", palette.main, 0.0))
        .child(stop("70%", palette.main, 0.0))
        .child(stop("100%", palette.highlight, 0.3));

    Texture {
        pattern_id: PATTERN_ID,
        pattern,
        gradient_id: GRADIENT_ID,
        gradient,
    }
}
