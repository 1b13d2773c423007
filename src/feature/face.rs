//! Eyes, mouth and blush.
//!
//! All face features are placed relative to the [`FaceAnchor`] and sized by
//! its scale, so a narrow top coil gets a proportionally smaller face.

use super::{OUTLINE, Side};
use crate::color::Color;
use crate::config::MouthStyle;
use crate::geometry::FaceAnchor;
use crate::svg::{Element, Fragment, FragmentKind, PathData};

/// Minimum number of eyes.
pub const MIN_EYES: usize = 1;
/// Maximum number of eyes.
pub const MAX_EYES: usize = 6;

/// Eye offsets from the face anchor for each eye count, in reference
/// (160-wide) face units.
const EYE_LAYOUTS: [&[(f64, f64)]; MAX_EYES] = [
    &[(0.0, 0.0)],
    &[(-25.0, 0.0), (25.0, 0.0)],
    &[(-35.0, 5.0), (0.0, -5.0), (35.0, 5.0)],
    &[(-35.0, -5.0), (-12.0, 5.0), (12.0, 5.0), (35.0, -5.0)],
    &[(-40.0, 0.0), (-20.0, -10.0), (0.0, 0.0), (20.0, -10.0), (40.0, 0.0)],
    &[(-42.0, 5.0), (-22.0, -8.0), (-5.0, 5.0), (10.0, 5.0), (28.0, -8.0), (45.0, 5.0)],
];

/// Smallest eye radius regardless of face scale.
const MIN_EYE_RADIUS: f64 = 8.0;

/// Distance from the face anchor down to the mouth line.
const MOUTH_DROP: f64 = 25.0;

const PUPIL: &str = "#000000";
const SPECULAR: &str = "#ffffff";
const TONGUE: &str = "#ff6b6b";
const TONGUE_SHINE: &str = "#ff8585";
const CAVITY: &str = "#2a0a0a";
const TOOTH_EDGE: &str = "#dddddd";
const BLUSH: &str = "#ffb6c1";

/// Clamps a requested eye count into the supported range.
pub fn clamp_eyes(num_eyes: i32) -> usize {
    num_eyes.clamp(MIN_EYES as i32, MAX_EYES as i32) as usize
}

// ============================================================================
// Eyes
// ============================================================================

/// Renders a single button eye of the given radius.
pub fn render_eye(cx: f64, cy: f64, radius: f64, color: Color) -> Fragment {
    Fragment::new(FragmentKind::Eye)
        .push(
            Element::circle(cx, cy, radius)
                .attr("fill", color)
                .attr("stroke", OUTLINE)
                .num("stroke-width", 1.5),
        )
        .push(Element::circle(cx, cy, radius * 0.4).attr("fill", PUPIL))
        .push(
            Element::circle(cx - radius * 0.15, cy - radius * 0.15, radius * 0.15)
                .attr("fill", SPECULAR)
                .num("opacity", 0.9),
        )
        .push(
            Element::circle(cx + radius * 0.2, cy - radius * 0.3, radius * 0.1)
                .attr("fill", SPECULAR)
                .num("opacity", 0.6),
        )
}

/// Renders `count` eyes using the hand-tuned layout for that count.
///
/// Radii alternate between two sizes so neighbouring eyes differ.
pub fn render_eyes(count: usize, face: &FaceAnchor, color: Color) -> Vec<Fragment> {
    let scale = face.scale();
    let layout = EYE_LAYOUTS[count.clamp(MIN_EYES, MAX_EYES) - 1];

    layout
        .iter()
        .enumerate()
        .map(|(i, (dx, dy))| {
            let radius = ((9 + (i % 2) * 2) as f64 * scale).max(MIN_EYE_RADIUS);
            render_eye(face.x + dx * scale, face.y + dy * scale, radius, color)
        })
        .collect()
}

// ============================================================================
// Mouth
// ============================================================================

fn mouth_stroke(d: PathData) -> Element {
    Element::path(d)
        .attr("stroke", OUTLINE)
        .num("stroke-width", 3.0)
        .attr("fill", "none")
        .attr("stroke-linecap", "round")
}

fn smile_curve(cx: f64, y: f64, half_width: f64, s: f64) -> PathData {
    PathData::new()
        .move_to(cx - half_width, y)
        .quad_to(cx, y + 20.0 * s, cx + half_width, y)
}

/// Renders the mouth for a style. [`MouthStyle::None`] renders nothing.
pub fn render_mouth(style: MouthStyle, face: &FaceAnchor) -> Option<Fragment> {
    let s = face.scale();
    let cx = face.x;
    let y = face.y + MOUTH_DROP;
    let half_width = 30.0 * s;

    let fragment = Fragment::new(FragmentKind::Mouth).with_class(format!("mouth-{}", style.name()));

    let fragment = match style {
        MouthStyle::None => return None,
        MouthStyle::Smile => fragment.push(mouth_stroke(smile_curve(cx, y, half_width, s))),
        MouthStyle::Frown => fragment.push(mouth_stroke(
            PathData::new()
                .move_to(cx - half_width, y + 12.0 * s)
                .quad_to(cx, y - 8.0 * s, cx + half_width, y + 12.0 * s),
        )),
        MouthStyle::Tongue => fragment
            .push(mouth_stroke(smile_curve(cx, y, half_width, s)))
            .push(Element::ellipse(cx, y + 12.0 * s, 10.0 * s, 7.0 * s).attr("fill", TONGUE))
            .push(
                Element::ellipse(cx, y + 10.0 * s, 8.0 * s, 4.0 * s)
                    .attr("fill", TONGUE_SHINE)
                    .num("opacity", 0.6),
            ),
        MouthStyle::Shark => {
            let lip = y - 2.0 * s;
            let corner = half_width + 10.0 * s;
            let tooth = 6.0 * s;
            let cavity = PathData::new()
                .move_to(cx - corner, lip)
                .quad_to(cx, y + 25.0 * s, cx + corner, lip)
                .quad_to(cx, y + 12.0 * s, cx - corner, lip)
                .close();
            let teeth: [[(f64, f64); 3]; 4] = [
                [
                    (cx - half_width, lip),
                    (cx - half_width + tooth, y + 10.0 * s),
                    (cx - half_width + tooth * 2.0, lip),
                ],
                [
                    (cx - tooth * 1.5, lip),
                    (cx - tooth * 0.5, y + 12.0 * s),
                    (cx + tooth * 0.5, lip),
                ],
                [
                    (cx + tooth, lip),
                    (cx + tooth * 2.0, y + 10.0 * s),
                    (cx + half_width, lip),
                ],
                [
                    (cx - tooth, y + 18.0 * s),
                    (cx, y + 8.0 * s),
                    (cx + tooth, y + 18.0 * s),
                ],
            ];

            let fragment = fragment.push(
                Element::path(cavity)
                    .attr("fill", CAVITY)
                    .attr("stroke", OUTLINE)
                    .num("stroke-width", 2.0),
            );
            teeth.iter().fold(fragment, |fragment, points| {
                fragment.push(
                    Element::polygon(points)
                        .attr("fill", SPECULAR)
                        .attr("stroke", TOOTH_EDGE)
                        .num("stroke-width", 0.5),
                )
            })
        }
    };

    Some(fragment)
}

// ============================================================================
// Blush
// ============================================================================

/// Renders the two cheek blushes, left then right.
pub fn render_blush(face: &FaceAnchor) -> [Fragment; 2] {
    let s = face.scale();
    let y = face.y + 18.0 * s;

    Side::BOTH.map(|side| {
        Fragment::new(FragmentKind::Blush)
            .with_class(format!("blush-{}", side.name()))
            .push(
                Element::ellipse(face.x + side.sign() * 40.0 * s, y, 10.0 * s, 6.0 * s)
                    .attr("fill", BLUSH)
                    .num("opacity", 0.5),
            )
    })
}
