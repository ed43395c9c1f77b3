//! Repulsion geometry for the home page's runaway decline button.
//!
//! Everything here works in zone-local CSS pixels so the math is identical
//! on both sides of the DOM boundary and testable on the host.

use crate::constants::{REPEL_STEP, REPEL_TRIGGER_DIST, YES_SCALE_MAX, YES_SCALE_STEP};
use glam::Vec2;

/// Axis-aligned rectangle in zone-local CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A pointer closer than the trigger distance to the button's center
/// qualifies a move for repulsion.
#[inline]
pub fn within_trigger(pointer: Vec2, button: Rect) -> bool {
    pointer.distance(button.center()) < REPEL_TRIGGER_DIST
}

/// New zone-local top-left for the decline button after one repulsion step.
///
/// The button steps directly away from the pointer, clamped per axis so its
/// full extent stays inside the zone. A pointer sitting exactly on the
/// center has no direction to flee in; an arbitrary fixed push keeps the
/// step well-defined.
pub fn repel_from(pointer: Vec2, button: Rect, zone_width: f32, zone_height: f32) -> Vec2 {
    let delta = button.center() - pointer;
    let dir = if delta.length_squared() > 0.0 {
        delta.normalize()
    } else {
        Vec2::X
    };
    let proposed = button.top_left() + dir * REPEL_STEP;
    Vec2::new(
        proposed.x.clamp(0.0, (zone_width - button.width).max(0.0)),
        proposed.y.clamp(0.0, (zone_height - button.height).max(0.0)),
    )
}

/// Grow the accept button's scale by one step, saturating at the cap.
///
/// Growth happens on every qualifying move, even one the clamp fully
/// absorbed.
#[inline]
pub fn grow_yes(scale: f32) -> f32 {
    (scale + YES_SCALE_STEP).min(YES_SCALE_MAX)
}
