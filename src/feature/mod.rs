//! Primitive renderers.
//!
//! Each renderer is a pure function from anchor data (and a palette where
//! the shape is body-colored) to one or more [`Fragment`]s. Renderers never
//! read each other's output; the only shared inputs are the anchors
//! computed in [`crate::geometry`].
//!
//! [`Fragment`]: crate::svg::Fragment

pub mod body;
pub mod face;
pub mod limbs;

pub use body::{render_coil_layer, render_swirl_cap};
pub use face::{clamp_eyes, render_blush, render_eye, render_eyes, render_mouth, MAX_EYES, MIN_EYES};
pub use limbs::{render_arms, render_legs};

/// Dark line color for outlines, mouths and eye rims.
pub(crate) const OUTLINE: &str = "#333333";

/// One half of a mirrored pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Horizontal direction away from the body's center.
    pub fn sign(&self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}
