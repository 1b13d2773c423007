//! Coil layers and the swirl cap.

use crate::color::Palette;
use crate::geometry::{Coil, SwirlAnchor};
use crate::svg::{Element, Fragment, FragmentKind, PathData};
use crate::texture::{gradient_fill, pattern_fill};

/// Offset of the soft drop shadow behind each body shape.
const SHADOW_OFFSET: (f64, f64) = (3.0, 4.0);

/// Renders one coil: a drop shadow, the yarn-textured band, the sheen
/// overlay, and two rim strokes that read as stitched ridges.
pub fn render_coil_layer(index: usize, coil: &Coil, palette: &Palette) -> Fragment {
    let Coil {
        center_x: cx,
        center_y: cy,
        width: w,
        height: h,
    } = *coil;
    let (rx, ry) = (w / 2.0, h / 2.0);

    let upper_rim = PathData::new()
        .move_to(cx - rx + 10.0, cy - h / 4.0)
        .quad_to(cx, cy - ry - 5.0, cx + rx - 10.0, cy - h / 4.0);
    let lower_rim = PathData::new()
        .move_to(cx - rx + 15.0, cy + h / 4.0)
        .quad_to(cx, cy + ry + 3.0, cx + rx - 15.0, cy + h / 4.0);

    Fragment::new(FragmentKind::CoilLayer)
        .with_class(format!("coil-layer-{}", index))
        .push(
            Element::ellipse(cx + SHADOW_OFFSET.0, cy + SHADOW_OFFSET.1, rx, ry)
                .attr("fill", palette.shadow)
                .num("opacity", 0.3),
        )
        .push(
            Element::ellipse(cx, cy, rx, ry)
                .attr("fill", pattern_fill())
                .attr("stroke", palette.dark)
                .num("stroke-width", 2.0),
        )
        .push(
            Element::ellipse(cx, cy, rx, ry)
                .attr("fill", gradient_fill())
                .num("opacity", 0.5),
        )
        .push(
            Element::path(upper_rim)
                .attr("stroke", palette.highlight)
                .num("stroke-width", 2.0)
                .attr("fill", "none")
                .num("opacity", 0.4)
                .attr("stroke-linecap", "round"),
        )
        .push(
            Element::path(lower_rim)
                .attr("stroke", palette.shadow)
                .num("stroke-width", 2.0)
                .attr("fill", "none")
                .num("opacity", 0.3)
                .attr("stroke-linecap", "round"),
        )
}

/// Closed outline of the curling tip, starting and ending at the base of
/// the cap at height `cy`.
fn swirl_outline(cx: f64, cy: f64, w: f64) -> PathData {
    PathData::new()
        .move_to(cx - w / 3.0, cy)
        .cubic_to(cx - w / 4.0, cy - 18.0, cx + w / 6.0, cy - 28.0, cx + w / 6.0, cy - 38.0)
        .cubic_to(cx + w / 6.0, cy - 53.0, cx - w / 8.0, cy - 58.0, cx, cy - 48.0)
        .cubic_to(cx + w / 8.0, cy - 43.0, cx + w / 5.0, cy - 53.0, cx + w / 10.0, cy - 63.0)
        .cubic_to(cx, cy - 73.0, cx - w / 10.0, cy - 68.0, cx + w / 20.0, cy - 58.0)
        .line_to(cx, cy - 48.0)
        .cubic_to(cx + w / 12.0, cy - 43.0, cx + w / 10.0, cy - 33.0, cx, cy - 23.0)
        .cubic_to(cx - w / 8.0, cy - 13.0, cx - w / 5.0, cy - 3.0, cx + w / 3.0, cy)
        .close()
}

/// Renders the swirl cap: shadow, textured tip, a highlight stroke along
/// the inner curl and a highlight dot near the point.
pub fn render_swirl_cap(anchor: &SwirlAnchor, palette: &Palette) -> Fragment {
    let SwirlAnchor {
        x: cx,
        y: cy,
        width: w,
    } = *anchor;

    let curl = PathData::new().move_to(cx, cy - 48.0).cubic_to(
        cx + w / 12.0,
        cy - 53.0,
        cx + w / 8.0,
        cy - 58.0,
        cx + w / 12.0,
        cy - 63.0,
    );

    Fragment::new(FragmentKind::Swirl)
        .push(
            Element::path(swirl_outline(cx, cy + 3.0, w))
                .attr("transform", "translate(3, 3)")
                .attr("fill", palette.shadow)
                .num("opacity", 0.3),
        )
        .push(
            Element::path(swirl_outline(cx, cy, w))
                .attr("fill", pattern_fill())
                .attr("stroke", palette.dark)
                .num("stroke-width", 2.0),
        )
        .push(
            Element::path(curl)
                .attr("stroke", palette.highlight)
                .num("stroke-width", 2.5)
                .attr("fill", "none")
                .num("opacity", 0.5)
                .attr("stroke-linecap", "round"),
        )
        .push(
            Element::circle(cx + w / 20.0, cy - 68.0, 4.0)
                .attr("fill", palette.highlight)
                .num("opacity", 0.4),
        )
}
