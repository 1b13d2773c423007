//! Stacked-coil geometry and the anchors derived from it.
//!
//! Everything downstream is placed relative to the values computed here:
//! the face sits on the top coil, arms on the seam between the top two
//! coils, legs under the bottom coil and the swirl cap above everything.
//! The geometry depends on the layer count alone.

/// Minimum number of coil layers.
pub const MIN_LAYERS: usize = 2;
/// Maximum number of coil layers.
pub const MAX_LAYERS: usize = 5;

/// Width of the bottom coil before variation.
pub const BASE_WIDTH: f64 = 180.0;
/// Height of every coil.
pub const LAYER_HEIGHT: f64 = 45.0;
/// Width ratio between a coil and the one below it.
pub const TAPER_RATIO: f64 = 0.72;
/// Vertical distance between coil centers.
pub const VERTICAL_STEP: f64 = LAYER_HEIGHT * 0.7;
/// Horizontal center of the figure.
pub const CENTER_X: f64 = 115.0;
/// Vertical center of the bottom coil.
pub const BASE_Y: f64 = 180.0;

/// Per-index width jitter, cycled over the stack.
const WIDTH_VARIATION: [f64; 5] = [1.0, 0.96, 1.03, 0.97, 0.99];

/// How far above the top coil's center the face sits.
const FACE_LIFT: f64 = 10.0;
/// Swirl cap offset above the top coil, in layer heights.
const SWIRL_LIFT: f64 = 0.4;
/// Swirl cap width relative to the top coil.
const SWIRL_WIDTH_RATIO: f64 = 0.8;
/// Height of the swirl cap above its anchor.
const SWIRL_HEIGHT: f64 = 75.0;

/// Reference face width that feature sizes are designed for.
pub const REFERENCE_FACE_WIDTH: f64 = 160.0;

/// Clamps a requested layer count into the supported range.
pub fn clamp_layers(num_layers: i32) -> usize {
    num_layers.clamp(MIN_LAYERS as i32, MAX_LAYERS as i32) as usize
}

// ============================================================================
// Coil
// ============================================================================

/// One horizontal band of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coil {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Coil {
    /// Geometry of the coil at stack index `index` (0 is the bottom).
    pub fn at_index(index: usize) -> Self {
        let variation = WIDTH_VARIATION[index % WIDTH_VARIATION.len()];
        Self {
            center_x: CENTER_X,
            center_y: BASE_Y - index as f64 * VERTICAL_STEP,
            width: BASE_WIDTH * TAPER_RATIO.powi(index as i32) * variation,
            height: LAYER_HEIGHT,
        }
    }

    /// Y coordinate of the coil's lower edge.
    pub fn bottom(&self) -> f64 {
        self.center_y + self.height / 2.0
    }
}

/// The coil stack, bottom first.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGeometry {
    layers: Vec<Coil>,
}

impl LayerGeometry {
    pub fn layers(&self) -> &[Coil] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coil> {
        self.layers.iter()
    }
}

// ============================================================================
// Anchors
// ============================================================================

/// Where the face sits and how wide it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceAnchor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl FaceAnchor {
    /// Scale factor for face features, relative to a 160-unit face.
    pub fn scale(&self) -> f64 {
        self.width / REFERENCE_FACE_WIDTH
    }
}

/// Vertical seam and body width that arms attach to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbAnchor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl LimbAnchor {
    fn between(lower: &Coil, upper: &Coil) -> Self {
        Self {
            x: upper.center_x,
            y: (lower.center_y + upper.center_y) / 2.0,
            width: (lower.width + upper.width) / 2.0,
        }
    }

    fn on(coil: &Coil) -> Self {
        Self {
            x: coil.center_x,
            y: coil.center_y,
            width: coil.width,
        }
    }
}

/// The lower edge of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseAnchor {
    pub x: f64,
    pub y: f64,
}

/// Where the swirl cap starts and how wide it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwirlAnchor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Reference points derived from the coil stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub face: FaceAnchor,
    pub limb: LimbAnchor,
    pub base: BaseAnchor,
    pub swirl: SwirlAnchor,
    /// Highest point of the figure (tip of the swirl cap).
    pub top_y: f64,
}

impl Anchors {
    /// Derives anchors from the bottom coil, the coil under the top one (if
    /// any) and the top coil.
    ///
    /// With `below == None` the stack is a single coil and the limb anchor
    /// falls back onto it.
    pub fn derive(bottom: &Coil, below: Option<&Coil>, top: &Coil) -> Self {
        let face = FaceAnchor {
            x: top.center_x,
            y: top.center_y - FACE_LIFT,
            width: top.width,
        };
        let swirl = SwirlAnchor {
            x: top.center_x,
            y: top.center_y - LAYER_HEIGHT * SWIRL_LIFT,
            width: top.width * SWIRL_WIDTH_RATIO,
        };
        let limb = match below {
            Some(below) => LimbAnchor::between(below, top),
            None => LimbAnchor::on(top),
        };
        let base = BaseAnchor {
            x: bottom.center_x,
            y: bottom.bottom(),
        };

        Self {
            face,
            limb,
            base,
            swirl,
            top_y: swirl.y - SWIRL_HEIGHT,
        }
    }
}

/// Computes the coil stack and its anchors for a layer count.
///
/// The count is clamped to `2..=5` first, so out-of-range requests behave
/// exactly like the nearest bound.
pub fn compute_layers(num_layers: i32) -> (LayerGeometry, Anchors) {
    let count = clamp_layers(num_layers);
    let layers: Vec<Coil> = (0..count).map(Coil::at_index).collect();

    let bottom = Coil::at_index(0);
    let top = layers.last().copied().unwrap_or(bottom);
    let below = count.checked_sub(2).and_then(|i| layers.get(i));
    let anchors = Anchors::derive(&bottom, below, &top);

    (LayerGeometry { layers }, anchors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn layer_count_matches_request() {
        for n in 2..=5 {
            let (geometry, _) = compute_layers(n);
            assert_eq!(geometry.len(), n as usize);
        }
    }

    #[test]
    fn widths_strictly_decrease() {
        for n in 2..=5 {
            let (geometry, _) = compute_layers(n);
            for pair in geometry.layers().windows(2) {
                assert!(
                    pair[1].width < pair[0].width,
                    "width must taper: {} -> {}",
                    pair[0].width,
                    pair[1].width
                );
            }
        }
    }

    #[test]
    fn out_of_range_counts_clamp() {
        assert_eq!(compute_layers(10), compute_layers(5));
        assert_eq!(compute_layers(0), compute_layers(2));
        assert_eq!(compute_layers(-3), compute_layers(2));
        assert_eq!(compute_layers(i32::MAX), compute_layers(5));
    }

    #[test]
    fn coil_positions() {
        let (geometry, _) = compute_layers(3);
        let layers = geometry.layers();

        assert!(approx(layers[0].width, 180.0));
        assert!(approx(layers[1].width, 180.0 * 0.72 * 0.96));
        assert!(approx(layers[2].width, 180.0 * 0.72 * 0.72 * 1.03));
        assert!(approx(layers[0].center_y, 180.0));
        assert!(approx(layers[1].center_y, 148.5));
        assert!(approx(layers[2].center_y, 117.0));
        assert!(layers.iter().all(|c| c.center_x == CENTER_X && c.height == LAYER_HEIGHT));
    }

    #[test]
    fn anchors_follow_the_top_coil() {
        let (geometry, anchors) = compute_layers(4);
        let top = geometry.layers()[3];
        let below = geometry.layers()[2];

        assert!(approx(anchors.face.y, top.center_y - 10.0));
        assert!(approx(anchors.face.width, top.width));
        assert!(approx(anchors.face.scale(), top.width / 160.0));

        assert!(approx(anchors.swirl.y, top.center_y - 18.0));
        assert!(approx(anchors.swirl.width, top.width * 0.8));
        assert!(approx(anchors.top_y, anchors.swirl.y - 75.0));

        assert!(approx(anchors.limb.y, (top.center_y + below.center_y) / 2.0));
        assert!(approx(anchors.limb.width, (top.width + below.width) / 2.0));
    }

    #[test]
    fn base_anchor_is_bottom_edge() {
        for n in 2..=5 {
            let (_, anchors) = compute_layers(n);
            assert!(approx(anchors.base.y, 202.5));
            assert!(approx(anchors.base.x, CENTER_X));
        }
    }

    #[test]
    fn minimum_stack_uses_both_layers_for_limbs() {
        let (geometry, anchors) = compute_layers(2);
        let [bottom, top] = [geometry.layers()[0], geometry.layers()[1]];
        assert!(approx(anchors.limb.y, (bottom.center_y + top.center_y) / 2.0));
        assert!(approx(anchors.limb.width, (bottom.width + top.width) / 2.0));
    }

    #[test]
    fn single_coil_limb_anchor_falls_back_to_it() {
        let coil = Coil::at_index(0);
        let anchors = Anchors::derive(&coil, None, &coil);
        assert_eq!(anchors.limb.y, coil.center_y);
        assert_eq!(anchors.limb.width, coil.width);
        assert_eq!(anchors.face.width, coil.width);
    }

    #[test]
    fn variation_cycles() {
        let sixth = Coil::at_index(5);
        assert!(approx(sixth.width, 180.0 * 0.72f64.powi(5) * 1.0));
    }
}
