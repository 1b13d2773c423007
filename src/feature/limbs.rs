//! Arms and legs.
//!
//! Limbs are drawn in fixed units rather than scaled with the body; only
//! their attachment points follow the coil stack.

use super::Side;
use crate::color::Palette;
use crate::geometry::{BaseAnchor, LimbAnchor};
use crate::svg::{Element, Fragment, FragmentKind, PathData};
use crate::texture::pattern_fill;

/// How far inside the body edge an arm attaches.
const ARM_INSET: f64 = 5.0;
/// Horizontal distance from the body center to each leg.
const LEG_SPREAD: f64 = 30.0;

fn limb_fragment(kind: FragmentKind, side: Side, path: PathData, end: Element, palette: &Palette) -> Fragment {
    Fragment::new(kind)
        .with_class(format!("{}-{}", kind.class(), side.name()))
        .push(
            Element::path(path)
                .attr("fill", pattern_fill())
                .attr("stroke", palette.dark)
                .num("stroke-width", 2.0),
        )
        .push(
            end.attr("fill", palette.main)
                .attr("stroke", palette.dark)
                .num("stroke-width", 1.5),
        )
}

/// Renders the left and right arms, each a curled stub ending in a hand.
pub fn render_arms(anchor: &LimbAnchor, palette: &Palette) -> [Fragment; 2] {
    let y = anchor.y;

    Side::BOTH.map(|side| {
        let d = side.sign();
        let x = anchor.x + d * (anchor.width / 2.0 - ARM_INSET);
        let arm = PathData::new()
            .move_to(x, y)
            .cubic_to(x + 20.0 * d, y + 5.0, x + 35.0 * d, y + 15.0, x + 30.0 * d, y + 30.0)
            .cubic_to(x + 25.0 * d, y + 45.0, x + 10.0 * d, y + 40.0, x + 5.0 * d, y + 30.0);
        let hand = Element::ellipse(x + 28.0 * d, y + 33.0, 10.0, 8.0);

        limb_fragment(FragmentKind::Arm, side, arm, hand, palette)
    })
}

/// Renders the left and right legs hanging from the base, each ending in a
/// foot turned outward.
pub fn render_legs(anchor: &BaseAnchor, palette: &Palette) -> [Fragment; 2] {
    let y = anchor.y;

    Side::BOTH.map(|side| {
        let d = side.sign();
        let x = anchor.x + d * LEG_SPREAD;
        let leg = PathData::new()
            .move_to(x, y)
            .cubic_to(x + 5.0 * d, y + 15.0, x + 10.0 * d, y + 35.0, x + 5.0 * d, y + 50.0)
            .cubic_to(x, y + 60.0, x - 15.0 * d, y + 60.0, x - 20.0 * d, y + 50.0);
        let foot = Element::ellipse(x - 7.0 * d, y + 55.0, 15.0, 8.0);

        limb_fragment(FragmentKind::Leg, side, leg, foot, palette)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BodyColor;

    #[test]
    fn arms_attach_inside_the_body_edge() {
        let palette = BodyColor::Chocolate.palette();
        let anchor = LimbAnchor {
            x: 115.0,
            y: 150.0,
            width: 100.0,
        };
        let [left, right] = render_arms(&anchor, &palette);

        assert_eq!(left.class(), "arm arm-left");
        assert_eq!(right.class(), "arm arm-right");
        assert!(left.elements()[0].get_attr("d").unwrap().starts_with("M 70,150 C 50,155"));
        assert!(right.elements()[0].get_attr("d").unwrap().starts_with("M 160,150 C 180,155"));

        let hand = &right.elements()[1];
        assert_eq!(hand.name(), "ellipse");
        assert_eq!(hand.get_attr("cx"), Some("188"));
        assert_eq!(hand.get_attr("cy"), Some("183"));
        assert_eq!(hand.get_attr("fill"), Some("#5c3317"));
    }

    #[test]
    fn legs_hang_below_the_base() {
        let palette = BodyColor::Vanilla.palette();
        let anchor = BaseAnchor { x: 115.0, y: 202.5 };
        let [left, right] = render_legs(&anchor, &palette);

        assert_eq!(left.kind(), FragmentKind::Leg);
        assert_eq!(left.class(), "leg leg-left");
        assert!(left.elements()[0].get_attr("d").unwrap().starts_with("M 85,202.5"));
        assert!(right.elements()[0].get_attr("d").unwrap().starts_with("M 145,202.5"));

        let foot = &left.elements()[1];
        assert_eq!(foot.get_attr("cx"), Some("92"));
        assert_eq!(foot.get_attr("cy"), Some("257.5"));
        assert_eq!(foot.get_attr("rx"), Some("15"));
    }

    #[test]
    fn limbs_use_the_yarn_texture() {
        let palette = BodyColor::Blue.palette();
        let arms = render_arms(
            &LimbAnchor {
                x: 0.0,
                y: 0.0,
                width: 50.0,
            },
            &palette,
        );
        for arm in &arms {
            assert_eq!(arm.elements()[0].get_attr("fill"), Some("url(#yarn_pattern)"));
            assert_eq!(arm.elements()[0].get_attr("stroke"), Some("#27408b"));
        }
    }
}
