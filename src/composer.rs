//! Assembles a complete figure from a configuration.
//!
//! # Draw Order
//!
//! Fragments are appended step by step in [`DRAW_ORDER`]. A fragment
//! appended later paints over everything before it, so list position is the
//! z-order:
//!
//! ```text
//! ┌─────────────┐
//! │    Legs     │ ◄── only with `hasLegs`, hidden behind the body
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │    Arms     │ ◄── only with `hasArms`, hidden behind the body
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │    Body     │ ◄── coil layers, bottom coil first
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │    Swirl    │ ◄── always above every coil
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │ Eyes, Mouth │ ◄── face features, above the body
//! │   Blush     │
//! └─────────────┘
//! ```

use crate::color::{Color, Palette};
use crate::config::Configuration;
use crate::feature::{
    render_arms, render_blush, render_coil_layer, render_eyes, render_legs, render_mouth,
    render_swirl_cap,
};
use crate::geometry::{Anchors, LayerGeometry, compute_layers};
use crate::svg::{Document, Fragment, Viewport};
use crate::texture::build_texture;

/// Width of every document.
pub const VIEWPORT_WIDTH: u32 = 230;
/// Space below the base reserved for legs.
const LEG_MARGIN: f64 = 80.0;
/// Space below the base when there are no legs.
const BASE_MARGIN: f64 = 20.0;

// ============================================================================
// Render Context
// ============================================================================

/// Resolved inputs shared by every render step.
///
/// Built once per [`compose`] call from an immutable configuration; steps
/// only read from it.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub config: Configuration,
    pub palette: Palette,
    pub eye_color: Color,
    pub geometry: LayerGeometry,
    pub anchors: Anchors,
}

impl RenderContext {
    pub fn new(config: &Configuration) -> Self {
        let (geometry, anchors) = compute_layers(config.num_layers);
        Self {
            config: *config,
            palette: config.body_color.palette(),
            eye_color: config.eye_color.color(),
            geometry,
            anchors,
        }
    }

    /// Document size. Legs extend the figure below the base.
    pub fn viewport(&self) -> Viewport {
        let margin = if self.config.has_legs {
            LEG_MARGIN
        } else {
            BASE_MARGIN
        };
        Viewport {
            width: VIEWPORT_WIDTH,
            height: (self.anchors.base.y + margin).round() as u32,
        }
    }
}

// ============================================================================
// Render Steps
// ============================================================================

/// One stage of figure assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStep {
    Legs,
    Arms,
    Body,
    Swirl,
    Eyes,
    Mouth,
    Blush,
}

/// The order steps are applied in, back to front.
pub const DRAW_ORDER: [RenderStep; 7] = [
    RenderStep::Legs,
    RenderStep::Arms,
    RenderStep::Body,
    RenderStep::Swirl,
    RenderStep::Eyes,
    RenderStep::Mouth,
    RenderStep::Blush,
];

impl RenderStep {
    /// Produces this step's fragments. Disabled features produce none.
    pub fn render(&self, ctx: &RenderContext) -> Vec<Fragment> {
        let RenderContext {
            config,
            palette,
            anchors,
            ..
        } = ctx;

        match self {
            Self::Legs if config.has_legs => render_legs(&anchors.base, palette).to_vec(),
            Self::Arms if config.has_arms => render_arms(&anchors.limb, palette).to_vec(),
            Self::Legs | Self::Arms => Vec::new(),
            Self::Body => ctx
                .geometry
                .iter()
                .enumerate()
                .map(|(i, coil)| render_coil_layer(i, coil, palette))
                .collect(),
            Self::Swirl => vec![render_swirl_cap(&anchors.swirl, palette)],
            Self::Eyes => render_eyes(config.eye_count(), &anchors.face, ctx.eye_color),
            Self::Mouth => render_mouth(config.mouth_style, &anchors.face)
                .into_iter()
                .collect(),
            Self::Blush => render_blush(&anchors.face).to_vec(),
        }
    }
}

/// Builds the figure for a configuration.
///
/// Never fails: counts are clamped and names were already resolved when
/// the configuration was built.
pub fn compose(config: &Configuration) -> Document {
    let ctx = RenderContext::new(config);
    log::debug!(
        "composing {} figure: {} layers, {} {} eyes, mouth {}, arms {}, legs {}",
        config.body_color.name(),
        ctx.geometry.len(),
        config.eye_count(),
        config.eye_color.name(),
        config.mouth_style.name(),
        config.has_arms,
        config.has_legs,
    );

    let mut fragments = Vec::new();
    for step in DRAW_ORDER {
        let rendered = step.render(&ctx);
        log::trace!("{:?}: {} fragments", step, rendered.len());
        fragments.extend(rendered);
    }

    let defs = build_texture(&ctx.palette).into_defs();
    Document::new(ctx.viewport(), defs, fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MouthStyle;
    use crate::svg::FragmentKind;

    fn kinds(doc: &Document) -> Vec<FragmentKind> {
        doc.fragments().iter().map(Fragment::kind).collect()
    }

    #[test]
    fn default_figure() {
        let doc = compose(&Configuration::default());
        assert_eq!(
            kinds(&doc),
            [
                FragmentKind::CoilLayer,
                FragmentKind::CoilLayer,
                FragmentKind::CoilLayer,
                FragmentKind::Swirl,
                FragmentKind::Eye,
                FragmentKind::Eye,
                FragmentKind::Mouth,
                FragmentKind::Blush,
                FragmentKind::Blush,
            ]
        );
        assert_eq!(doc.viewport(), Viewport { width: 230, height: 223 });
        assert_eq!(doc.defs().len(), 2);
    }

    #[test]
    fn limbs_come_first() {
        let config = Configuration::new().with_arms(true).with_legs(true);
        let doc = compose(&config);
        let kinds = kinds(&doc);
        assert_eq!(
            &kinds[..5],
            [
                FragmentKind::Leg,
                FragmentKind::Leg,
                FragmentKind::Arm,
                FragmentKind::Arm,
                FragmentKind::CoilLayer,
            ]
        );
        assert_eq!(doc.viewport().height, 283);
    }

    #[test]
    fn coils_are_emitted_bottom_first() {
        let doc = compose(&Configuration::new().with_layers(4));
        let classes: Vec<_> = doc
            .fragments_of(FragmentKind::CoilLayer)
            .map(|f| f.class().to_string())
            .collect();
        assert_eq!(
            classes,
            [
                "coil-layer coil-layer-0",
                "coil-layer coil-layer-1",
                "coil-layer coil-layer-2",
                "coil-layer coil-layer-3",
            ]
        );
    }

    #[test]
    fn no_mouth_step_is_empty() {
        let ctx = RenderContext::new(&Configuration::new().with_mouth(MouthStyle::None));
        assert!(RenderStep::Mouth.render(&ctx).is_empty());
        assert!(RenderStep::Legs.render(&ctx).is_empty());
        assert!(RenderStep::Arms.render(&ctx).is_empty());
    }

    #[test]
    fn draw_order_places_face_above_body() {
        let position = |step: RenderStep| DRAW_ORDER.iter().position(|s| *s == step).unwrap();
        assert!(position(RenderStep::Legs) < position(RenderStep::Body));
        assert!(position(RenderStep::Arms) < position(RenderStep::Body));
        assert!(position(RenderStep::Body) < position(RenderStep::Swirl));
        assert!(position(RenderStep::Swirl) < position(RenderStep::Eyes));
        assert!(position(RenderStep::Mouth) < position(RenderStep::Blush));
    }

    #[test]
    fn context_resolves_colors() {
        let config = Configuration::new()
            .with_body_color(crate::color::BodyColor::Blue)
            .with_eye_color(crate::color::EyeColor::Purple);
        let ctx = RenderContext::new(&config);
        assert_eq!(ctx.palette.main.to_string(), "#4169e1");
        assert_eq!(ctx.eye_color.to_string(), "#9932cc");
    }
}
